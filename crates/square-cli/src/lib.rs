//! Library side of the `sqmodels` binary: argument parsing, error mapping
//! and command handlers.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
