//! Locale-tolerant decimal parsing for user-entered numbers.
//!
//! Counter staff type dimensions and coverage rates the way the local keyboard
//! layout suggests: `1,44` as often as `1.44`. The calculator itself only
//! accepts already-parsed numbers, so the presentation edge normalizes here
//! first and shows the typed error inline when the input is unusable.

use thiserror::Error;

/// Reasons a user-entered decimal could not be normalized.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseDecimalError {
    #[error("empty input")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("not a finite number: {0:?}")]
    NonFinite(String),
}

/// Parses a decimal that may use a comma as the decimal separator.
///
/// Mixed separators (`"1.234,5"`) are rejected rather than guessed at; a
/// thousands-grouping heuristic guessing wrong on a price is worse than
/// asking the user to retype.
pub fn parse_decimal(input: &str) -> Result<f64, ParseDecimalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseDecimalError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ParseDecimalError::NonFinite(trimmed.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_dot_both_parse() {
        assert_eq!(parse_decimal("1,44"), Ok(1.44));
        assert_eq!(parse_decimal("1.44"), Ok(1.44));
        assert_eq!(parse_decimal("0,5"), Ok(0.5));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(parse_decimal("  22 "), Ok(22.0));
    }

    #[test]
    fn empty_input_is_its_own_error() {
        assert_eq!(parse_decimal(""), Err(ParseDecimalError::Empty));
        assert_eq!(parse_decimal("   "), Err(ParseDecimalError::Empty));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            parse_decimal("abc"),
            Err(ParseDecimalError::NotANumber("abc".to_string()))
        );
        // Mixed/multiple separators are not guessed at.
        assert_eq!(
            parse_decimal("1,2,3"),
            Err(ParseDecimalError::NotANumber("1,2,3".to_string()))
        );
    }

    #[test]
    fn non_finite_spellings_are_rejected() {
        // f64::from_str happily parses "inf" and "NaN"; the form must not.
        assert_eq!(
            parse_decimal("inf"),
            Err(ParseDecimalError::NonFinite("inf".to_string()))
        );
        assert_eq!(
            parse_decimal("NaN"),
            Err(ParseDecimalError::NonFinite("NaN".to_string()))
        );
    }
}
