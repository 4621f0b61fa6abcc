//! CLI configuration.

use ytconv_core::ConverterConfig;

use crate::cli::Cli;

/// Log output format, from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Log output format
    pub log_format: LogFormat,
    /// Converter settings
    pub converter: ConverterConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            converter: ConverterConfig::default(),
        }
    }
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            log_format,
            converter: ConverterConfig::from_env(),
        }
    }

    /// Apply command-line overrides on top of environment values.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(target_base) = &cli.target_base {
            self.converter.target_base = target_base.clone();
        }
        self
    }
}
