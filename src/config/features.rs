//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Mount the share-message endpoint
    #[serde(default = "default_true")]
    pub enable_sharing: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_sharing: true,
            verbose_errors: false,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_sharing);
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_sharing": false,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_sharing);
        assert!(flags.verbose_errors);
        assert!(flags.enable_tracing);
    }
}
