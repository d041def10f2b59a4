// src/error.rs
use thiserror::Error;

/// Result type for configuration construction
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Application version must not be empty")]
    EmptyApplicationVersion,
}
