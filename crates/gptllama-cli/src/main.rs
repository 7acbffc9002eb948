//! CLI entry point - the composition root.
//!
//! Operator arguments are captured from the command line here, once, and
//! passed down explicitly. No other code reads the process arguments.

use clap::Parser;
use std::process::ExitCode;

use gptllama_cli::{Cli, CliConfig, CliError, bootstrap, handlers};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(cli)?;
    let ctx = bootstrap(config)?;
    handlers::args::execute(&ctx, cli)
}

fn main() -> ExitCode {
    // Load environment variables before anything reads them (RUST_LOG included)
    bootstrap::load_env_file();

    let cli = Cli::parse();
    bootstrap::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
