//! Check command handler.
//!
//! Decodes a payload as the named model, reports enum tokens it did not
//! recognize and top-level keys that did not survive re-encoding, then
//! prints the canonical form.

use std::io::{Read, Write};
use std::path::Path;

use square_core::{EmptyAs, RoundTrip, WireSettings, WireSettingsUpdate};
use square_models::find_model;

use crate::error::CliError;

/// Build settings from the environment, then apply command-line overrides.
///
/// Flags only ever switch a behavior on; leaving a flag off keeps whatever
/// the environment selected.
pub fn settings_for(
    strict: bool,
    pretty: bool,
    empty_as: Option<EmptyAs>,
) -> Result<WireSettings, CliError> {
    let mut settings = WireSettings::from_env()?;
    settings.merge(&WireSettingsUpdate {
        empty_as: empty_as.map(Some),
        pretty: pretty.then_some(Some(true)),
        strict_enums: strict.then_some(Some(true)),
    });
    tracing::debug!(?settings, "effective wire settings");
    Ok(settings)
}

/// Read the payload from `file`, or stdin when `None`.
pub fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display()))),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Run the check and write the canonical JSON to `out`.
pub fn execute(
    model: &str,
    input: &str,
    settings: &WireSettings,
    out: &mut impl Write,
    report: &mut impl Write,
) -> Result<RoundTrip, CliError> {
    let descriptor = find_model(model).ok_or_else(|| {
        CliError::Arguments(format!(
            "Unknown model '{model}'. Run 'sqmodels list' to see available models."
        ))
    })?;

    let result = (descriptor.round_trip)(input, settings)?;

    for token in &result.unrecognized {
        writeln!(report, "unrecognized token: {token}")?;
    }
    for key in &result.changed_keys {
        if key.is_empty() {
            writeln!(report, "changed: top-level value")?;
        } else {
            writeln!(report, "changed: {key}")?;
        }
    }

    let text = if settings.effective_pretty() {
        serde_json::to_string_pretty(&result.canonical)
    } else {
        serde_json::to_string(&result.canonical)
    }
    .map_err(|e| CliError::Data(e.to_string()))?;
    writeln!(out, "{text}")?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(model: &str, input: &str, settings: &WireSettings) -> Result<(String, String), CliError> {
        let mut out = Vec::new();
        let mut report = Vec::new();
        execute(model, input, settings, &mut out, &mut report)?;
        Ok((
            String::from_utf8(out).unwrap(),
            String::from_utf8(report).unwrap(),
        ))
    }

    #[test]
    fn test_canonical_output() {
        let (out, report) = run(
            "CustomField",
            r#"{ "title" : "Discount Code" }"#,
            &WireSettings::with_defaults(),
        )
        .unwrap();
        assert_eq!(out, "{\"title\":\"Discount Code\"}\n");
        assert!(report.is_empty());
    }

    #[test]
    fn test_reports_unrecognized_and_changed() {
        let (out, report) = run(
            "Money",
            r#"{"amount":5,"currency":"XYZ","scale":2}"#,
            &WireSettings::with_defaults(),
        )
        .unwrap();
        assert_eq!(out, "{\"amount\":5,\"currency\":\"XYZ\"}\n");
        assert!(report.contains("unrecognized token: Currency::\"XYZ\""));
        assert!(report.contains("changed: scale"));
    }

    #[test]
    fn test_strict_rejects() {
        let settings = WireSettings {
            strict_enums: Some(true),
            ..WireSettings::with_defaults()
        };
        let err = run("Money", r#"{"currency":"XYZ"}"#, &settings).unwrap_err();
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_empty_as_array() {
        let settings = WireSettings {
            empty_as: Some(EmptyAs::Array),
            ..WireSettings::with_defaults()
        };
        let (out, report) = run("ErrorResponse", "{}", &settings).unwrap();
        assert_eq!(out, "[]\n");
        assert!(report.is_empty());
    }

    #[test]
    fn test_unknown_model() {
        let err = run("Widget", "{}", &WireSettings::with_defaults()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = run("Order", "{", &WireSettings::with_defaults()).unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
    }
}
