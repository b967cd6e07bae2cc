use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fixed length of every short code.
pub const CODE_LENGTH: usize = 6;

/// The alphabet short codes are drawn from: digits plus lowercase letters.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A validated short code standing in for an original URL.
///
/// Short codes are exactly [`CODE_LENGTH`] characters long and contain
/// only characters from the base-36 [`ALPHABET`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn parse(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to emit valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be exactly {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only digits and lowercase letters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::parse("abc123").is_ok());
        assert!(ShortCode::parse("000000").is_ok());
        assert!(ShortCode::parse("zzzzzz").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::parse("").is_err());
        assert!(ShortCode::parse("abc12").is_err());
        assert!(ShortCode::parse("abc1234").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::parse("ABC123").is_err());
        assert!(ShortCode::parse("abc 12").is_err());
        assert!(ShortCode::parse("abc-12").is_err());
    }

    #[test]
    fn display_round_trips() {
        let code = ShortCode::parse("x1y2z3").unwrap();
        assert_eq!(code.to_string(), "x1y2z3");
        assert_eq!(code.as_str(), "x1y2z3");
    }

    #[test]
    fn to_url_trims_trailing_slash() {
        let code = ShortCode::parse("abc123").unwrap();
        assert_eq!(code.to_url("https://short.ly"), "https://short.ly/abc123");
        assert_eq!(code.to_url("https://short.ly/"), "https://short.ly/abc123");
    }
}
