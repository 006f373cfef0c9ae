//! Command handlers.
//!
//! Handlers write results to `out` and diagnostics to `report` so they can
//! be driven from tests with in-memory buffers; the binary passes stdout
//! and stderr.

pub mod check;
pub mod list;
pub mod tokens;

use std::io::Write;

use crate::commands::Commands;
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
pub fn run(command: Commands, out: &mut impl Write, report: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::List { enums } => list::execute(enums, out),
        Commands::Tokens { name } => tokens::execute(&name, out),
        Commands::Check {
            model,
            file,
            strict,
            pretty,
            empty_as,
        } => {
            let settings = check::settings_for(strict, pretty, empty_as)?;
            let input = check::read_input(file.as_deref())?;
            check::execute(&model, &input, &settings, out, report).map(|_| ())
        }
    }
}
