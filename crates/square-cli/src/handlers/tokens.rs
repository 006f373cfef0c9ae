//! Tokens command handler.

use std::io::Write;

use square_models::find_enum;

use crate::error::CliError;

/// Print the documented tokens of the named enum.
pub fn execute(name: &str, out: &mut impl Write) -> Result<(), CliError> {
    let descriptor = find_enum(name).ok_or_else(|| {
        CliError::Arguments(format!(
            "Unknown enum '{name}'. Run 'sqmodels list --enums' to see available enums."
        ))
    })?;

    for token in descriptor.values {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_tokens_in_order() {
        let mut out = Vec::new();
        execute("SortOrder", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "DESC\nASC\n");
    }

    #[test]
    fn test_unknown_enum() {
        let err = execute("Mood", &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
