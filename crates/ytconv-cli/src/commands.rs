//! Subcommand execution.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use ytconv_core::{is_youtube_url, normalize_url, Converter};

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::output::{write_check, write_conversion, write_normalized};

/// Counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Process exit status for a finished run.
///
/// 0 when every input succeeded, 1 when any input failed, 2 when the run
/// could not complete.
pub fn exit_code(outcome: &Result<RunSummary>) -> u8 {
    match outcome {
        Ok(summary) if summary.all_succeeded() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// Read non-blank lines, trimmed.
pub fn read_inputs(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

/// Run the parsed command over `inputs`, writing one line per input to `out`.
pub fn run(
    cli: &Cli,
    config: &CliConfig,
    inputs: &[String],
    out: &mut impl Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    match &cli.command {
        Command::Convert { no_normalize, .. } => {
            let converter = Converter::try_new(config.converter.clone())
                .context("invalid converter configuration")?;
            debug!(target_base = %converter.config().target_base, "converter ready");

            for input in inputs {
                let candidate = if *no_normalize {
                    input.clone()
                } else {
                    normalize_url(input)
                };
                let result = converter.convert(&candidate);
                if !result.success() {
                    summary.failed += 1;
                }
                summary.total += 1;
                write_conversion(out, cli.format, input, &result)?;
            }
        }
        Command::Check { .. } => {
            for input in inputs {
                let valid = is_youtube_url(input);
                if !valid {
                    summary.failed += 1;
                }
                summary.total += 1;
                write_check(out, cli.format, input, valid)?;
            }
        }
        Command::Normalize { .. } => {
            for input in inputs {
                summary.total += 1;
                write_normalized(out, cli.format, input, &normalize_url(input))?;
            }
        }
    }

    out.flush().context("failed to flush output")?;
    info!(
        command = cli.command.name(),
        total = summary.total,
        failed = summary.failed,
        "run finished"
    );
    Ok(summary)
}
