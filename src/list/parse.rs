//! Text input for lists (CLI and demos)

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading list values from text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Token could not be read as an `i32`
    #[error("invalid value '{token}' at position {position}: {source}")]
    InvalidValue {
        /// 1-based position of the token in the input
        position: usize,
        /// Offending token
        token: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

/// Parse whitespace- or comma-separated integers
pub fn parse_values(text: &str) -> Result<Vec<i32>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i32>().map_err(|source| ParseError::InvalidValue {
                position: idx + 1,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_values("1, 2 3\n-4,,5").unwrap(), vec![1, 2, 3, -4, 5]);
        assert_eq!(parse_values("  ").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_reports_bad_token() {
        let err = parse_values("1 2 x3 4").unwrap_err();
        match err {
            ParseError::InvalidValue { position, token, .. } => {
                assert_eq!(position, 3);
                assert_eq!(token, "x3");
            }
        }
    }
}
