#![forbid(unsafe_code)]

//! Parsing and validation of user-supplied arrays.
//!
//! Input is a comma-separated list. Tokens are trimmed and empty tokens are
//! skipped. Checks run in a fixed order so the first problem a user sees is
//! stable: empty input, too many values, non-numeric token, out-of-range
//! value.

use thiserror::Error;

use crate::element::CUSTOM_VALUE_RANGE;

/// Largest array a user may supply.
pub const MAX_CUSTOM_VALUES: usize = 15;

/// Reasons a custom array is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomInputError {
    #[error("Please enter at least one number")]
    Empty,

    #[error("Maximum {max} numbers allowed (got {count})")]
    TooMany { count: usize, max: usize },

    #[error("All values must be valid numbers (`{token}` is not)")]
    NotANumber { token: String },

    #[error("Numbers must be between {min} and {max} (got {value})")]
    OutOfRange { value: i64, min: i32, max: i32 },
}

/// Parse `input` into validated values.
pub fn parse_custom_values(input: &str) -> Result<Vec<i32>, CustomInputError> {
    let tokens: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    validate_tokens(&tokens)
}

/// Validate already-split tokens.
pub fn validate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i32>, CustomInputError> {
    if tokens.is_empty() {
        return Err(CustomInputError::Empty);
    }
    if tokens.len() > MAX_CUSTOM_VALUES {
        return Err(CustomInputError::TooMany {
            count: tokens.len(),
            max: MAX_CUSTOM_VALUES,
        });
    }

    let numbers = tokens
        .iter()
        .map(|t| {
            let token = t.as_ref().trim();
            token.parse::<i64>().map_err(|_| CustomInputError::NotANumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    numbers
        .into_iter()
        .map(|n| {
            i32::try_from(n)
                .ok()
                .filter(|&v| CUSTOM_VALUE_RANGE.contains(v))
                .ok_or(CustomInputError::OutOfRange {
                    value: n,
                    min: CUSTOM_VALUE_RANGE.min,
                    max: CUSTOM_VALUE_RANGE.max,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_comma_list() {
        assert_eq!(parse_custom_values(" 42, 15 ,8,,23 "), Ok(vec![42, 15, 8, 23]));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_custom_values(""), Err(CustomInputError::Empty));
        assert_eq!(parse_custom_values(" , ,"), Err(CustomInputError::Empty));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            validate_tokens(&["7", "abc"]),
            Err(CustomInputError::NotANumber {
                token: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_custom_values("7abc"),
            Err(CustomInputError::NotANumber { .. })
        ));
    }

    #[test]
    fn rejects_more_than_fifteen() {
        let input = (1..=16).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(
            parse_custom_values(&input),
            Err(CustomInputError::TooMany { count: 16, max: 15 })
        );
        let fifteen = (1..=15).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(parse_custom_values(&fifteen).map(|v| v.len()), Ok(15));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_custom_values("5, 1000"),
            Err(CustomInputError::OutOfRange {
                value: 1000,
                min: 1,
                max: 999
            })
        );
        assert!(matches!(
            parse_custom_values("0"),
            Err(CustomInputError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_custom_values("99999999999"),
            Err(CustomInputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn count_is_checked_before_numbers() {
        let input = std::iter::repeat_n("x", 16).collect::<Vec<_>>().join(",");
        assert!(matches!(
            parse_custom_values(&input),
            Err(CustomInputError::TooMany { .. })
        ));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            CustomInputError::Empty.to_string(),
            "Please enter at least one number"
        );
        assert!(
            CustomInputError::OutOfRange {
                value: 1000,
                min: 1,
                max: 999
            }
            .to_string()
            .starts_with("Numbers must be between 1 and 999")
        );
    }
}
