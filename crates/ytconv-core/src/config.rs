//! Converter configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Fixed output location all converted URLs are written onto.
pub const DEFAULT_TARGET_BASE: &str = "https://yout-ube.com/watch";

/// Environment variable overriding [`DEFAULT_TARGET_BASE`].
pub const TARGET_BASE_ENV: &str = "YTCONV_TARGET_BASE";

/// Converter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Absolute http(s) URL the `v` parameter and preserved parameters are appended to
    #[serde(default = "default_target_base")]
    pub target_base: String,
}

fn default_target_base() -> String {
    DEFAULT_TARGET_BASE.to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            target_base: default_target_base(),
        }
    }
}

impl ConverterConfig {
    /// Create config with an explicit target base.
    pub fn with_target_base(target_base: impl Into<String>) -> Self {
        Self {
            target_base: target_base.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Blank values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            target_base: std::env::var(TARGET_BASE_ENV)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(default_target_base),
        }
    }

    /// Parse the target base, checking it can host converted URLs.
    pub fn target_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(self.target_base.trim()).map_err(|e| {
            ConfigError::invalid_target_base(format!("{}: {}", self.target_base, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(url)
    }

    /// Check the configuration without converting anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target_url().map(|_| ())
    }
}
