//! Drives the command dispatcher the way the binary does, with payloads
//! read from files.

use std::io::Write;

use square_cli::{Cli, CliError, handlers};
use clap::Parser;
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Result<(String, String), CliError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let command = cli.command.expect("a subcommand");
    let mut out = Vec::new();
    let mut report = Vec::new();
    handlers::run(command, &mut out, &mut report)?;
    Ok((
        String::from_utf8(out).unwrap(),
        String::from_utf8(report).unwrap(),
    ))
}

fn payload(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_file() {
    let file = payload(r#"{"location_id":"L1","state":"OPEN","note_to_self":"x"}"#);
    let path = file.path().to_str().unwrap();

    let (out, report) = run(&["sqmodels", "check", "Order", path]).unwrap();
    assert_eq!(out, "{\"location_id\":\"L1\",\"state\":\"OPEN\"}\n");
    assert_eq!(report, "changed: note_to_self\n");
}

#[test]
fn test_check_file_pretty() {
    let file = payload(r#"{"title":"Discount Code"}"#);
    let path = file.path().to_str().unwrap();

    let (out, _) = run(&["sqmodels", "check", "CustomField", path, "--pretty"]).unwrap();
    assert_eq!(out, "{\n  \"title\": \"Discount Code\"\n}\n");
}

#[test]
fn test_check_strict_file() {
    let file = payload(r#"{"location_id":"L1","state":"ARCHIVED"}"#);
    let path = file.path().to_str().unwrap();

    let (_, report) = run(&["sqmodels", "check", "Order", path]).unwrap();
    assert!(report.contains("OrderState::\"ARCHIVED\""));

    let err = run(&["sqmodels", "check", "Order", path, "--strict"]).unwrap_err();
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_check_empty_as_array() {
    let file = payload("{}");
    let path = file.path().to_str().unwrap();

    let (out, _) = run(&["sqmodels", "check", "ErrorResponse", path, "--empty-as", "array"]).unwrap();
    assert_eq!(out, "[]\n");
}

#[test]
fn test_check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let err = run(&["sqmodels", "check", "Order", missing.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_missing_required_field_is_data_error() {
    let file = payload(r#"{"state":"OPEN"}"#);
    let path = file.path().to_str().unwrap();

    let err = run(&["sqmodels", "check", "Order", path]).unwrap_err();
    assert!(matches!(err, CliError::Data(_)));
}

#[test]
fn test_tokens_and_list() {
    let (out, _) = run(&["sqmodels", "tokens", "OrderState"]).unwrap();
    assert_eq!(out, "OPEN\nCOMPLETED\nCANCELED\nDRAFT\n");

    let (out, _) = run(&["sqmodels", "list", "--enums"]).unwrap();
    assert!(out.lines().any(|line| line == "OrderState"));
}
