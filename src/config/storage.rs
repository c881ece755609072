//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where remembered profiles are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for `<session-id>.json` records. In-memory when unset.
    pub profile_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    ///
    /// A missing directory is fine (it is created on first write); an
    /// existing non-directory is not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(dir) = &self.profile_dir else {
            return Ok(());
        };
        if dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyProfileDir);
        }
        if dir.exists() && !dir.is_dir() {
            return Err(ValidationError::ProfileDirNotADirectory(
                dir.display().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_unset_dir_is_valid() {
        assert!(StorageConfig::default().validate().is_ok());
    }

    #[test]
    fn test_existing_or_missing_dir_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig {
            profile_dir: Some(temp_dir.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());

        let config = StorageConfig {
            profile_dir: Some(temp_dir.path().join("not-yet-created")),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_path_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let config = StorageConfig {
            profile_dir: Some(file.path().to_path_buf()),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ProfileDirNotADirectory(_))
        ));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = StorageConfig {
            profile_dir: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyProfileDir));
    }
}
