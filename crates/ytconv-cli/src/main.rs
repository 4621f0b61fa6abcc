//! ytconv binary.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use ytconv_cli::{exit_code, init_tracing, read_inputs, run, Cli, CliConfig, RunSummary};

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_cli_overrides(&cli);

    let tracing_ready = match init_tracing(config.log_format) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{:#}", e);
            false
        }
    };

    let outcome = execute(&cli, &config);
    if let Err(e) = &outcome {
        if tracing_ready {
            error!("{:#}", e);
        } else {
            eprintln!("error: {:#}", e);
        }
    }

    ExitCode::from(exit_code(&outcome))
}

fn execute(cli: &Cli, config: &CliConfig) -> Result<RunSummary> {
    let inputs = if cli.command.urls().is_empty() {
        read_inputs(io::stdin().lock())?
    } else {
        cli.command.urls().to_vec()
    };

    let mut out = BufWriter::new(io::stdout().lock());
    run(cli, config, &inputs, &mut out)
}
