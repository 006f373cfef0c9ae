//! Subcommands of `sqmodels`.

use std::path::PathBuf;

use clap::Subcommand;
use square_core::EmptyAs;

#[derive(Subcommand)]
pub enum Commands {
    /// List model names, or enum names with --enums
    List {
        /// List enums instead of models
        #[arg(long)]
        enums: bool,
    },

    /// Print the documented tokens of an enum, one per line
    Tokens {
        /// Enum type name (e.g. "Currency")
        name: String,
    },

    /// Decode a payload as a model and print its canonical form
    Check {
        /// Model type name (e.g. "Order")
        model: String,
        /// JSON file to read; stdin when omitted
        file: Option<PathBuf>,
        /// Fail on enum tokens outside the documented set
        #[arg(long)]
        strict: bool,
        /// Pretty-print the canonical JSON
        #[arg(long)]
        pretty: bool,
        /// How to write an empty object: "object" or "array"
        #[arg(long = "empty-as", value_name = "object|array")]
        empty_as: Option<EmptyAs>,
    },
}
