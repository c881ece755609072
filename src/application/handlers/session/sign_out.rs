//! SignOut - Command handler forgetting a remembered session.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::SessionId;
use crate::ports::ProfileStore;

/// Command to sign a session out.
#[derive(Debug, Clone, Copy)]
pub struct SignOutCommand {
    pub session_id: SessionId,
}

/// Handler for sign-out. Always succeeds; store failures are logged.
pub struct SignOutHandler {
    store: Arc<dyn ProfileStore>,
}

impl SignOutHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SignOutCommand) {
        let session_id = cmd.session_id;
        match self.store.remove(session_id).await {
            Ok(()) => info!(%session_id, "Signed out"),
            Err(e) => warn!(%session_id, error = %e, "Failed to forget profile"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::application::handlers::session::test_support::FailingProfileStore;
    use crate::domain::session::UserProfile;

    #[tokio::test]
    async fn forgets_profile() {
        let store = Arc::new(InMemoryProfileStore::new());
        let id = SessionId::new();
        store
            .save(id, &UserProfile::from_email("a@b.co").unwrap())
            .await
            .unwrap();

        SignOutHandler::new(store.clone())
            .handle(SignOutCommand { session_id: id })
            .await;

        assert!(store.load(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_failure_is_swallowed() {
        SignOutHandler::new(Arc::new(FailingProfileStore))
            .handle(SignOutCommand {
                session_id: SessionId::new(),
            })
            .await;
    }
}
