//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Inspect the Square API model catalog and check wire payloads against it.
#[derive(Parser)]
#[command(name = "sqmodels")]
#[command(about = "Inspect Square API models and check JSON payloads")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use square_core::EmptyAs;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["sqmodels", "list", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::List { enums: false })));
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from([
            "sqmodels",
            "check",
            "Order",
            "order.json",
            "--strict",
            "--empty-as",
            "array",
        ]);
        match cli.command {
            Some(Commands::Check {
                model,
                file,
                strict,
                pretty,
                empty_as,
            }) => {
                assert_eq!(model, "Order");
                assert_eq!(file.as_deref(), Some(std::path::Path::new("order.json")));
                assert!(strict);
                assert!(!pretty);
                assert_eq!(empty_as, Some(EmptyAs::Array));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_bad_empty_as_rejected() {
        assert!(Cli::try_parse_from(["sqmodels", "check", "Order", "--empty-as", "list"]).is_err());
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["sqmodels"]);
        assert!(cli.command.is_none());
    }
}
