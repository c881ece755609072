//! SignIn - Command handler for the login / sign-up form.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::{Credentials, Session};
use crate::ports::ProfileStore;

/// Command carrying the submitted form.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub credentials: Credentials,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignInResult {
    pub session_id: SessionId,
    pub session: Session,
    /// False when the profile could not be remembered.
    pub remembered: bool,
}

/// Handler for sign-in.
pub struct SignInHandler {
    store: Arc<dyn ProfileStore>,
}

impl SignInHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<SignInResult, DomainError> {
        // 1. Validate form shape
        let profile = cmd.credentials.validate().map_err(|errors| {
            errors.into_iter().fold(
                DomainError::new(ErrorCode::ValidationFailed, "Validation failed"),
                |err, e| err.with_detail(e.field(), e.to_string()),
            )
        })?;

        // 2. Open the session
        let session_id = SessionId::new();
        let mut session = Session::default();
        session.sign_in(profile.clone());

        // 3. Remember the profile, best-effort
        let remembered = match self.store.save(session_id, &profile).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%session_id, error = %e, "Failed to remember profile");
                false
            }
        };

        info!(%session_id, mode = ?cmd.credentials.mode, "Signed in");

        Ok(SignInResult {
            session_id,
            session,
            remembered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::application::handlers::session::test_support::FailingProfileStore;

    #[tokio::test]
    async fn valid_form_opens_and_remembers_session() {
        let store = Arc::new(InMemoryProfileStore::new());
        let handler = SignInHandler::new(store.clone());

        let result = handler
            .handle(SignInCommand {
                credentials: Credentials::login("kavya@example.in", "secret1"),
            })
            .await
            .unwrap();

        assert!(result.remembered);
        assert_eq!(result.session.display_name(), Some("kavya"));
        let stored = store.load(result.session_id).await.unwrap().unwrap();
        assert_eq!(stored.email, "kavya@example.in");
    }

    #[tokio::test]
    async fn invalid_form_reports_every_field() {
        let handler = SignInHandler::new(Arc::new(InMemoryProfileStore::new()));

        let err = handler
            .handle(SignInCommand {
                credentials: Credentials::sign_up("bad", "123", "456"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("email").unwrap(), "Email is invalid");
        assert_eq!(
            err.details.get("password").unwrap(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            err.details.get("confirm_password").unwrap(),
            "Passwords do not match"
        );
    }

    #[tokio::test]
    async fn store_failure_does_not_block_sign_in() {
        let handler = SignInHandler::new(Arc::new(FailingProfileStore));

        let result = handler
            .handle(SignInCommand {
                credentials: Credentials::login("a@b.co", "secret1"),
            })
            .await
            .unwrap();

        assert!(!result.remembered);
        assert!(result.session.is_signed_in());
    }
}
