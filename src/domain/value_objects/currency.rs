//! # Currency Code Value Object
//!
//! ISO 4217 alphabetic currency code.
//!
//! This module provides the [`CurrencyCode`] type. Only the shape of the
//! code is validated (three ASCII letters); whether the code is assigned
//! by ISO is left to the carrier that produced it.
//!
//! # Examples
//!
//! ```
//! use shipping_rates::domain::value_objects::currency::CurrencyCode;
//!
//! let usd = CurrencyCode::new("usd").unwrap();
//! assert_eq!(usd.as_str(), "USD");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for currency code validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code is empty.
    #[error("currency code cannot be empty")]
    Empty,

    /// Currency code does not have exactly three characters.
    #[error("currency code must have 3 letters, got '{0}'")]
    InvalidLength(String),

    /// Currency code contains non-letter characters.
    #[error("currency code contains invalid characters: '{0}'")]
    InvalidCharacters(String),
}

/// A validated ISO 4217 currency code such as `USD` or `CAD`.
///
/// # Invariants
///
/// - Exactly three ASCII letters
/// - Stored in uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Required length of a code.
    pub const LENGTH: usize = 3;

    /// Creates a currency code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError` if the code is empty, not three characters
    /// long, or contains anything other than ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CurrencyError> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(CurrencyError::Empty);
        }
        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCharacters(value.to_string()));
        }
        if value.len() != Self::LENGTH {
            return Err(CurrencyError::InvalidLength(value.to_string()));
        }

        Ok(Self(value.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_to_uppercase() {
        assert_eq!(CurrencyCode::new(" cad ").unwrap().as_str(), "CAD");
    }

    #[test]
    fn new_empty_fails() {
        assert_eq!(CurrencyCode::new(""), Err(CurrencyError::Empty));
    }

    #[test]
    fn new_wrong_length_fails() {
        assert!(matches!(
            CurrencyCode::new("US"),
            Err(CurrencyError::InvalidLength(_))
        ));
        assert!(matches!(
            CurrencyCode::new("USDT"),
            Err(CurrencyError::InvalidLength(_))
        ));
    }

    #[test]
    fn new_digits_fail() {
        assert!(matches!(
            CurrencyCode::new("840"),
            Err(CurrencyError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let code = CurrencyCode::new("EUR").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"EUR\"");
        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn deserialize_invalid_fails() {
        let result: Result<CurrencyCode, _> = serde_json::from_str("\"E1R\"");
        assert!(result.is_err());
    }
}
