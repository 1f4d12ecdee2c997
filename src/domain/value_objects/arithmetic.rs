//! # Checked Arithmetic
//!
//! Overflow-safe arithmetic for monetary values.
//!
//! This module provides the [`CheckedArithmetic`] trait implemented for
//! [`Decimal`] and `i64`, the [`ArithmeticError`] type it reports, and the
//! [`Rounding`] mode used when major-unit amounts are converted to integer
//! minor units.
//!
//! # Examples
//!
//! ```
//! use shipping_rates::domain::value_objects::arithmetic::{CheckedArithmetic, ArithmeticError};
//!
//! assert_eq!(250_i64.safe_add(250), Ok(500));
//! assert_eq!(i64::MAX.safe_add(1), Err(ArithmeticError::Overflow));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned by checked arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The result exceeded the representable range.
    #[error("arithmetic overflow")]
    Overflow,

    /// The result fell below the representable range.
    #[error("arithmetic underflow")]
    Underflow,

    /// An operand or result was not a valid value.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for checked arithmetic.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Arithmetic that reports failure instead of panicking or wrapping.
pub trait CheckedArithmetic: Sized {
    /// Adds `rhs`, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result is out of range.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Subtracts `rhs`, failing on underflow.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result is out of range.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Multiplies by `rhs`, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result is out of range.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

impl CheckedArithmetic for i64 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(if rhs < 0 {
            ArithmeticError::Underflow
        } else {
            ArithmeticError::Overflow
        })
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(if rhs > 0 {
            ArithmeticError::Underflow
        } else {
            ArithmeticError::Overflow
        })
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Rounding direction applied when an amount has more precision than
/// the target unit.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shipping_rates::domain::value_objects::arithmetic::Rounding;
///
/// let value = Decimal::new(12345, 1); // 1234.5
/// assert_eq!(Rounding::HalfAwayFromZero.round(value), Decimal::new(1235, 0));
/// assert_eq!(Rounding::HalfEven.round(value), Decimal::new(1234, 0));
/// assert_eq!(Rounding::TowardZero.round(value), Decimal::new(1234, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round half away from zero (`0.5 -> 1`, `-0.5 -> -1`).
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding (`0.5 -> 0`, `1.5 -> 2`).
    HalfEven,
    /// Truncate toward zero.
    TowardZero,
    /// Round any fraction away from zero.
    AwayFromZero,
}

impl Rounding {
    /// Rounds `value` to an integral decimal using this mode.
    #[must_use]
    pub fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(0, self.strategy())
    }

    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::TowardZero => RoundingStrategy::ToZero,
            Self::AwayFromZero => RoundingStrategy::AwayFromZero,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::HalfAwayFromZero => "half_away_from_zero",
            Self::HalfEven => "half_even",
            Self::TowardZero => "toward_zero",
            Self::AwayFromZero => "away_from_zero",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Rounding {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half_away_from_zero" | "half_up" => Ok(Self::HalfAwayFromZero),
            "half_even" | "bankers" => Ok(Self::HalfEven),
            "toward_zero" | "down" => Ok(Self::TowardZero),
            "away_from_zero" | "up" => Ok(Self::AwayFromZero),
            _ => Err(ArithmeticError::InvalidValue("unknown rounding mode")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod integer {
        use super::*;

        #[test]
        fn safe_add_works() {
            assert_eq!(100_i64.safe_add(50), Ok(150));
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(i64::MAX.safe_add(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_add_negative_underflow_fails() {
            assert_eq!(i64::MIN.safe_add(-1), Err(ArithmeticError::Underflow));
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(i64::MIN.safe_sub(1), Err(ArithmeticError::Underflow));
        }
    }

    mod decimal {
        use super::*;

        #[test]
        fn safe_mul_works() {
            let result = Decimal::new(1234, 2).safe_mul(Decimal::ONE_HUNDRED).unwrap();
            assert_eq!(result, Decimal::new(1234, 0));
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn half_away_from_zero_handles_negatives() {
            let value = Decimal::new(-25, 1);
            assert_eq!(Rounding::HalfAwayFromZero.round(value), Decimal::new(-3, 0));
        }

        #[test]
        fn half_even_rounds_to_even() {
            assert_eq!(Rounding::HalfEven.round(Decimal::new(25, 1)), Decimal::TWO);
            assert_eq!(
                Rounding::HalfEven.round(Decimal::new(35, 1)),
                Decimal::new(4, 0)
            );
        }

        #[test]
        fn away_from_zero_rounds_any_fraction() {
            assert_eq!(
                Rounding::AwayFromZero.round(Decimal::new(101, 2)),
                Decimal::TWO
            );
        }

        #[test]
        fn default_is_half_away_from_zero() {
            assert_eq!(Rounding::default(), Rounding::HalfAwayFromZero);
        }

        #[test]
        fn parses_aliases() {
            assert_eq!("half_up".parse(), Ok(Rounding::HalfAwayFromZero));
            assert_eq!("BANKERS".parse(), Ok(Rounding::HalfEven));
            assert!("sideways".parse::<Rounding>().is_err());
        }

        #[test]
        fn display_roundtrips_through_from_str() {
            for mode in [
                Rounding::HalfAwayFromZero,
                Rounding::HalfEven,
                Rounding::TowardZero,
                Rounding::AwayFromZero,
            ] {
                assert_eq!(mode.to_string().parse(), Ok(mode));
            }
        }
    }
}
