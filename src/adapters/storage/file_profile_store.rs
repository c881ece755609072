//! File-based Profile Store Adapter
//!
//! Stores each remembered profile as `<session-id>.json` holding
//! `{ "email", "name" }`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::SessionId;
use crate::domain::session::UserProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// File-based storage for session profiles
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    base_path: PathBuf,
}

impl FileProfileStore {
    /// Create a store rooted at `base_path`. The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn profile_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.json", session_id))
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn save(
        &self,
        session_id: SessionId,
        profile: &UserProfile,
    ) -> Result<(), ProfileStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ProfileStoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.profile_path(session_id), json)
            .await
            .map_err(|e| ProfileStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, session_id: SessionId) -> Result<Option<UserProfile>, ProfileStoreError> {
        let json = match fs::read_to_string(self.profile_path(session_id)).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProfileStoreError::IoError(e.to_string())),
        };

        let profile = serde_json::from_str(&json)
            .map_err(|e| ProfileStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(profile))
    }

    async fn remove(&self, session_id: SessionId) -> Result<(), ProfileStoreError> {
        match fs::remove_file(self.profile_path(session_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProfileStoreError::IoError(e.to_string())),
        }
    }
}
