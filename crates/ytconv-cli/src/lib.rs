//! Command-line front end for ytconv.
//!
//! Reads URLs from arguments or stdin and prints conversion, validation or
//! normalization results as plain text or JSON lines.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::{exit_code, read_inputs, run, RunSummary};
pub use config::{CliConfig, LogFormat};
pub use logging::{build_env_filter, init_tracing, DEFAULT_LOG_DIRECTIVE};
