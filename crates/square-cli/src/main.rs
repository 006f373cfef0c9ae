//! `sqmodels` entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use square_cli::{Cli, handlers};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    if let Err(err) = handlers::run(command, &mut stdout, &mut stderr) {
        tracing::debug!(?err, "command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
