//! # Domain Errors
//!
//! The single error type returned by rate-estimate operations.
//!
//! Every [`DomainError`] carries a stable numeric code. Codes are grouped
//! by the thousands digit: `1xxx` rejects malformed input, `2xxx` rejects
//! an operation the estimate cannot perform in its current state, and
//! `4xxx` reports minor-unit arithmetic that left the `i64` range.
//!
//! ```
//! use shipping_rates::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidAmount("'abc' is not an integer".to_string());
//! assert_eq!(error.code(), 1001);
//! assert!(error.is_validation_error());
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::currency::CurrencyError;
use thiserror::Error;

/// Error raised by money normalization, validation and estimate state checks.
///
/// ```
/// use shipping_rates::domain::errors::DomainError;
///
/// let error = DomainError::InvalidOperation("rate required".to_string());
/// assert!(error.is_state_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// A monetary amount could not be normalized to minor units.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid currency code.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Invalid origin or destination.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Invalid package.
    #[error("invalid package: {0}")]
    InvalidPackage(String),

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// No total price is stored and at least one package rate is missing.
    #[error("incomplete rate: {0}")]
    IncompleteRate(String),

    /// Operation not allowed in the estimate's current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    // ========================================================================
    // Arithmetic Errors (4000-4999)
    // ========================================================================
    /// Arithmetic overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// A value that cannot take part in arithmetic, such as a non-finite
    /// float amount or an unknown rounding mode.
    #[error("invalid arithmetic value: {0}")]
    InvalidArithmeticValue(String),
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use shipping_rates::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::IncompleteRate("test".to_string()).code(), 2001);
    /// assert_eq!(DomainError::Overflow.code(), 4001);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidAmount(_) => 1001,
            Self::InvalidCurrency(_) => 1002,
            Self::InvalidLocation(_) => 1003,
            Self::InvalidPackage(_) => 1004,
            Self::ValidationError(_) => 1099,

            // State errors (2000-2999)
            Self::IncompleteRate(_) => 2001,
            Self::InvalidOperation(_) => 2002,

            // Arithmetic errors (4000-4999)
            Self::Overflow => 4001,
            Self::Underflow => 4002,
            Self::InvalidArithmeticValue(_) => 4004,
        }
    }

    /// Returns the error category name.
    ///
    /// # Examples
    ///
    /// ```
    /// use shipping_rates::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::InvalidAmount("x".to_string()).category(), "validation");
    /// assert_eq!(DomainError::InvalidOperation("x".to_string()).category(), "state");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            4000..=4999 => "arithmetic",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }

    /// Returns true if this is an arithmetic error.
    #[inline]
    #[must_use]
    pub const fn is_arithmetic_error(&self) -> bool {
        matches!(self.code(), 4000..=4999)
    }
}

impl From<ArithmeticError> for DomainError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::Overflow => Self::Overflow,
            ArithmeticError::Underflow => Self::Underflow,
            ArithmeticError::InvalidValue(msg) => Self::InvalidArithmeticValue(msg.to_string()),
        }
    }
}

impl From<CurrencyError> for DomainError {
    fn from(err: CurrencyError) -> Self {
        Self::InvalidCurrency(err.to_string())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod error_codes {
        use super::*;

        fn s() -> String {
            "x".to_string()
        }

        #[test]
        fn codes_are_stable() {
            let expected = [
                (DomainError::InvalidAmount(s()), 1001, "validation"),
                (DomainError::InvalidCurrency(s()), 1002, "validation"),
                (DomainError::InvalidLocation(s()), 1003, "validation"),
                (DomainError::InvalidPackage(s()), 1004, "validation"),
                (DomainError::ValidationError(s()), 1099, "validation"),
                (DomainError::IncompleteRate(s()), 2001, "state"),
                (DomainError::InvalidOperation(s()), 2002, "state"),
                (DomainError::Overflow, 4001, "arithmetic"),
                (DomainError::Underflow, 4002, "arithmetic"),
                (DomainError::InvalidArithmeticValue(s()), 4004, "arithmetic"),
            ];

            for (error, code, category) in expected {
                assert_eq!(error.code(), code, "{error}");
                assert_eq!(error.category(), category, "{error}");
            }
        }

        #[test]
        fn predicates_follow_category() {
            assert!(DomainError::InvalidPackage(s()).is_validation_error());
            assert!(!DomainError::InvalidPackage(s()).is_state_error());
            assert!(DomainError::IncompleteRate(s()).is_state_error());
            assert!(DomainError::Overflow.is_arithmetic_error());
            assert!(!DomainError::Overflow.is_validation_error());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn incomplete_rate_display() {
            let error = DomainError::IncompleteRate("package 2 has no rate".to_string());
            assert_eq!(error.to_string(), "incomplete rate: package 2 has no rate");
        }

        #[test]
        fn invalid_operation_display() {
            let error = DomainError::InvalidOperation("rate required".to_string());
            assert_eq!(error.to_string(), "invalid operation: rate required");
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn arithmetic_errors_convert() {
            assert_eq!(
                DomainError::from(ArithmeticError::Overflow),
                DomainError::Overflow
            );
            assert_eq!(
                DomainError::from(ArithmeticError::InvalidValue("negative")),
                DomainError::InvalidArithmeticValue("negative".to_string())
            );
        }

        #[test]
        fn non_finite_float_amount_is_invalid_arithmetic_value() {
            use crate::domain::value_objects::Amount;

            let err: DomainError = Amount::try_from(f64::NAN).unwrap_err().into();
            assert_eq!(err.code(), 4004);
        }

        #[test]
        fn unknown_rounding_mode_is_invalid_arithmetic_value() {
            use crate::domain::value_objects::Rounding;

            let err: DomainError = "sideways".parse::<Rounding>().unwrap_err().into();
            assert!(matches!(err, DomainError::InvalidArithmeticValue(_)));
        }

        #[test]
        fn currency_error_converts() {
            let err: DomainError = CurrencyError::Empty.into();
            assert_eq!(err.code(), 1002);
        }
    }
}
