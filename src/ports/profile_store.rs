//! Profile Store Port - Interface for remembering signed-in profiles.
//!
//! One `{ email, name }` record per session. Callers treat every failure
//! as best-effort: a session works without its record being persisted.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::UserProfile;

/// Errors that can occur during profile store operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize profile: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for remembering the profile of a session
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Save (or replace) the profile of a session
    ///
    /// # Errors
    /// Returns `ProfileStoreError` if the record could not be written
    async fn save(&self, session_id: SessionId, profile: &UserProfile)
        -> Result<(), ProfileStoreError>;

    /// Load the profile of a session
    ///
    /// # Returns
    /// `None` when nothing is remembered for the session
    async fn load(&self, session_id: SessionId) -> Result<Option<UserProfile>, ProfileStoreError>;

    /// Forget the profile of a session. Removing an unknown session is not an error.
    async fn remove(&self, session_id: SessionId) -> Result<(), ProfileStoreError>;
}
