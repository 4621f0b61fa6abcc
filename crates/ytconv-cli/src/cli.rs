//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};

/// Rewrite YouTube links onto the alternate watch domain.
#[derive(Debug, Parser)]
#[command(name = "ytconv", version, about)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Target base URL (overrides YTCONV_TARGET_BASE)
    #[arg(long, global = true)]
    pub target_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert URLs onto the target domain
    Convert {
        /// Skip adding a missing https:// scheme before converting
        #[arg(long)]
        no_normalize: bool,

        /// URLs to convert; read from stdin, one per line, when omitted
        urls: Vec<String>,
    },
    /// Report whether each URL is on a recognized YouTube host
    Check {
        /// URLs to check; read from stdin, one per line, when omitted
        urls: Vec<String>,
    },
    /// Add a missing https:// scheme to each input
    Normalize {
        /// Inputs to normalize; read from stdin, one per line, when omitted
        urls: Vec<String>,
    },
}

impl Command {
    pub fn urls(&self) -> &[String] {
        match self {
            Command::Convert { urls, .. } | Command::Check { urls } | Command::Normalize { urls } => {
                urls
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Convert { .. } => "convert",
            Command::Check { .. } => "check",
            Command::Normalize { .. } => "normalize",
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One plain line per input
    Text,
    /// One JSON object per input
    Json,
}
