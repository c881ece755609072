//! GetSession - Query handler restoring a remembered session.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::ProfileStore;

/// Query for the session remembered under an id.
#[derive(Debug, Clone, Copy)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for session lookups.
pub struct GetSessionHandler {
    store: Arc<dyn ProfileStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Returns the signed-in session, or `SessionNotFound`.
    ///
    /// An unreadable record is treated like a missing one.
    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, DomainError> {
        let session_id = query.session_id;
        let profile = match self.store.load(session_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(%session_id, error = %e, "Failed to load remembered profile");
                None
            }
        };

        profile.map(Session::restored).ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, "Session not found")
                .with_detail("session_id", session_id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::application::handlers::session::test_support::FailingProfileStore;
    use crate::domain::session::UserProfile;

    #[tokio::test]
    async fn restores_remembered_profile() {
        let store = Arc::new(InMemoryProfileStore::new());
        let id = SessionId::new();
        store
            .save(id, &UserProfile::from_email("a@b.co").unwrap())
            .await
            .unwrap();

        let session = GetSessionHandler::new(store)
            .handle(GetSessionQuery { session_id: id })
            .await
            .unwrap();

        assert_eq!(session.display_name(), Some("a"));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let err = GetSessionHandler::new(Arc::new(InMemoryProfileStore::new()))
            .handle(GetSessionQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn unreadable_store_is_not_found() {
        let err = GetSessionHandler::new(Arc::new(FailingProfileStore))
            .handle(GetSessionQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}
