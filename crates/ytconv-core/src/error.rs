//! Conversion error types.

use thiserror::Error;

/// Result type for internal conversion steps.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Why a conversion step failed.
///
/// These never cross the public conversion boundary; each maps onto exactly
/// one [`ErrorCode`](crate::ErrorCode).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input is empty")]
    EmptyInput,

    #[error("not a recognized YouTube host: {0}")]
    UnrecognizedHost(String),

    #[error("no video ID found in URL")]
    VideoIdNotFound,

    #[error("failed to parse source URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("invalid target: {0}")]
    Target(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("target base is not a valid URL: {0}")]
    InvalidTargetBase(String),

    #[error("target base must use http or https, got {0}")]
    UnsupportedScheme(String),
}

impl ConfigError {
    pub fn invalid_target_base(msg: impl Into<String>) -> Self {
        Self::InvalidTargetBase(msg.into())
    }
}
