//! List command handler.

use std::io::Write;

use square_models::{all_enums, all_models};

use crate::error::CliError;

/// Print every model name, or every enum name with `enums`.
pub fn execute(enums: bool, out: &mut impl Write) -> Result<(), CliError> {
    if enums {
        for descriptor in all_enums() {
            writeln!(out, "{}", descriptor.name)?;
        }
    } else {
        for descriptor in all_models() {
            writeln!(out, "{}", descriptor.name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_models() {
        let mut out = Vec::new();
        execute(false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == "CustomField"));
        assert_eq!(text.lines().count(), all_models().len());
    }

    #[test]
    fn test_lists_enums() {
        let mut out = Vec::new();
        execute(true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == "Currency"));
        assert!(!text.lines().any(|line| line == "Order"));
    }
}
