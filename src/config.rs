// src/config.rs
//! Version information injected into the views.
//!
//! Both values are fixed at build time. `from_build_env` captures them from
//! the compiler environment; tests and embedders construct `AppConfig`
//! directly instead.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Application version from package metadata.
pub const APPLICATION_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier forwarded by build.rs, unset when BUILD_VERSION was blank.
pub const BUILD_VERSION: Option<&str> = option_env!("APP_BUILD_VERSION");

/// RFC 3339 timestamp of the build.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub application_version: String,
    pub build_version: Option<String>,
}

impl AppConfig {
    /// Build a config, treating an empty build version as absent.
    pub fn new(application_version: impl Into<String>, build_version: Option<&str>) -> Self {
        Self {
            application_version: application_version.into(),
            build_version: normalize_build_version(build_version),
        }
    }

    /// Like [`AppConfig::new`], but rejects an empty application version.
    pub fn try_new(
        application_version: impl Into<String>,
        build_version: Option<&str>,
    ) -> ConfigResult<Self> {
        let application_version = application_version.into();
        if application_version.trim().is_empty() {
            return Err(ConfigError::EmptyApplicationVersion);
        }
        Ok(Self::new(application_version, build_version))
    }

    pub fn from_build_env() -> Self {
        Self::new(APPLICATION_VERSION, BUILD_VERSION)
    }

    /// Present build version. The field is public, so a literal or
    /// deserialized `Some("")` is still reported as absent here.
    pub fn build_version(&self) -> Option<&str> {
        self.build_version.as_deref().filter(|v| !v.is_empty())
    }
}

/// Maps an empty build version to `None`; any other value is kept verbatim.
pub fn normalize_build_version(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_build_version_is_absent() {
        let config = AppConfig::new("1.2.3", Some(""));
        assert_eq!(config.build_version, None);
        assert_eq!(config.build_version(), None);
    }

    #[test]
    fn test_only_empty_build_version_is_absent() {
        assert_eq!(normalize_build_version(Some("")), None);
        assert_eq!(normalize_build_version(None), None);
        assert_eq!(normalize_build_version(Some("   ")).as_deref(), Some("   "));
    }

    #[test]
    fn test_build_version_is_kept_verbatim() {
        let config = AppConfig::new("1.2.3", Some(" abc 123 "));
        assert_eq!(config.build_version(), Some(" abc 123 "));
    }

    #[test]
    fn test_literal_empty_build_version_reads_as_absent() {
        let config = AppConfig {
            application_version: "1.2.3".to_string(),
            build_version: Some(String::new()),
        };
        assert_eq!(config.build_version(), None);
    }

    #[test]
    fn test_deserialized_empty_build_version_reads_as_absent() {
        let config: AppConfig =
            serde_json::from_str(r#"{"application_version":"1.2.3","build_version":""}"#).unwrap();
        assert_eq!(config.build_version(), None);
    }

    #[test]
    fn test_try_new_rejects_empty_application_version() {
        assert_eq!(
            AppConfig::try_new("", Some("abc123")),
            Err(ConfigError::EmptyApplicationVersion)
        );
        assert_eq!(
            AppConfig::try_new("  ", None),
            Err(ConfigError::EmptyApplicationVersion)
        );
    }

    #[test]
    fn test_try_new_accepts_prerelease_version() {
        let config = AppConfig::try_new("0.0.0-dev", Some("nightly-2024-01-01")).unwrap();
        assert_eq!(config.application_version, "0.0.0-dev");
        assert_eq!(config.build_version(), Some("nightly-2024-01-01"));
    }

    #[test]
    fn test_from_build_env_uses_package_version() {
        let config = AppConfig::from_build_env();
        assert_eq!(config.application_version, env!("CARGO_PKG_VERSION"));
        assert!(!config.application_version.is_empty());
        if let Some(build) = config.build_version() {
            assert!(!build.is_empty());
        }
    }

    #[test]
    fn test_config_serializes_absent_build_version_as_null() {
        let config = AppConfig::new("1.2.3", None);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["application_version"], "1.2.3");
        assert!(value["build_version"].is_null());
    }
}
