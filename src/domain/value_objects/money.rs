//! # Money Value Objects
//!
//! Integer minor-unit amounts and the normalization that produces them.
//!
//! Carriers report charges in whatever shape their API uses: decimal
//! numbers in major units (`12.34`), numeric strings (`"12.34"`, `"1234"`)
//! or integers that are already minor units. Every monetary field of a
//! rate estimate goes through [`Cents::from_amount`] exactly once, so the
//! rest of the crate only ever sees [`Cents`].
//!
//! # Normalization Rules
//!
//! | Input | Interpretation | Result |
//! |-------|----------------|--------|
//! | `Amount::Minor(1234)` | minor units | `1234` |
//! | `Amount::Major(12.34)` | major units | `1234` |
//! | `Amount::Text("12.34")` | contains `.`: major units | `1234` |
//! | `Amount::Text("1234")` | no `.`: minor units | `1234` |
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipping_rates::domain::value_objects::money::{cents_from, Amount, Cents};
//!
//! let cents = Cents::from_amount(&Amount::from(Decimal::new(1234, 2))).unwrap();
//! assert_eq!(cents.get(), 1234);
//!
//! assert_eq!(cents_from(None::<Amount>).unwrap(), None);
//! ```

use super::arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, Rounding};
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of minor units in one major unit.
const MINOR_PER_MAJOR: i64 = 100;

/// Decimal places of a major-unit amount expressed from minor units.
const MINOR_SCALE: u32 = 2;

/// An amount of money as an integer count of currency minor units.
///
/// Signed so that discounts and rebates can be represented.
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::value_objects::money::Cents;
///
/// let rate = Cents::new(1250);
/// assert_eq!(rate.to_major().to_string(), "12.50");
///
/// let total = Cents::checked_sum([Cents::new(500), Cents::new(750)]).unwrap();
/// assert_eq!(total, Cents::new(1250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a minor-unit count.
    #[inline]
    #[must_use]
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the minor-unit count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts a decimal amount in major units to minor units.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shipping_rates::domain::value_objects::arithmetic::Rounding;
    /// use shipping_rates::domain::value_objects::money::Cents;
    ///
    /// let cents = Cents::from_major(Decimal::new(10005, 3), Rounding::HalfAwayFromZero).unwrap();
    /// assert_eq!(cents.get(), 1001);
    /// ```
    pub fn from_major(value: Decimal, rounding: Rounding) -> ArithmeticResult<Self> {
        let scaled = value.safe_mul(Decimal::from(MINOR_PER_MAJOR))?;
        rounding
            .round(scaled)
            .to_i64()
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Normalizes a caller-supplied amount using the default rounding.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for unparsable text and
    /// `DomainError::Overflow` if the amount is out of range.
    pub fn from_amount(amount: &Amount) -> DomainResult<Self> {
        Self::from_amount_with(amount, Rounding::default())
    }

    /// Normalizes a caller-supplied amount using `rounding` for major-unit input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for unparsable text and
    /// `DomainError::Overflow` if the amount is out of range.
    pub fn from_amount_with(amount: &Amount, rounding: Rounding) -> DomainResult<Self> {
        match amount {
            Amount::Minor(value) => Ok(Self(*value)),
            Amount::Major(value) => Ok(Self::from_major(*value, rounding)?),
            Amount::Text(text) => parse_text(text, rounding),
        }
    }

    /// Returns the amount in major units with two decimal places.
    #[must_use]
    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, MINOR_SCALE)
    }

    /// Adds another amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` or `ArithmeticError::Underflow`
    /// if the result is out of range.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    /// Subtracts another amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` or `ArithmeticError::Underflow`
    /// if the result is out of range.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_sub(rhs.0).map(Self)
    }

    /// Sums amounts, failing instead of wrapping.
    ///
    /// An empty sequence sums to [`Cents::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns an `ArithmeticError` if any partial sum is out of range.
    pub fn checked_sum<I>(amounts: I) -> ArithmeticResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.safe_add(amount))
    }
}

fn parse_text(text: &str, rounding: Rounding) -> DomainResult<Cents> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidAmount("empty amount".to_string()));
    }

    if trimmed.contains('.') {
        let value = Decimal::from_str(trimmed)
            .map_err(|_| DomainError::InvalidAmount(format!("'{trimmed}' is not a decimal")))?;
        return Ok(Cents::from_major(value, rounding)?);
    }

    trimmed
        .parse::<i64>()
        .map(Cents)
        .map_err(|_| DomainError::InvalidAmount(format!("'{trimmed}' is not an integer")))
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Cents {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cents> for i64 {
    #[inline]
    fn from(cents: Cents) -> Self {
        cents.0
    }
}

/// A monetary amount as supplied by a caller, before normalization.
///
/// Deserializes from JSON integers (minor units), strings, or decimal
/// numbers (major units), in that order of preference.
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::value_objects::money::Amount;
///
/// let minor: Amount = serde_json::from_str("500").unwrap();
/// assert_eq!(minor, Amount::Minor(500));
///
/// let text: Amount = serde_json::from_str("\"12.34\"").unwrap();
/// assert_eq!(text, Amount::from("12.34"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Integer count of minor units.
    Minor(i64),
    /// Numeric string; a `.` marks major units, otherwise minor units.
    Text(String),
    /// Decimal amount in major units.
    Major(Decimal),
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Minor(value)
    }
}

impl From<Cents> for Amount {
    fn from(value: Cents) -> Self {
        Self::Minor(value.get())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Major(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = ArithmeticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::try_from(value)
            .map(Self::Major)
            .map_err(|_| ArithmeticError::InvalidValue("invalid float"))
    }
}

/// Normalizes an optional amount into optional minor units.
///
/// Absent input yields absent output; present input follows the rules of
/// [`Cents::from_amount`].
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` for unparsable text and
/// `DomainError::Overflow` if the amount is out of range.
pub fn cents_from<A>(amount: Option<A>) -> DomainResult<Option<Cents>>
where
    A: Into<Amount>,
{
    cents_from_with(amount, Rounding::default())
}

/// Like [`cents_from`] with an explicit rounding mode for major-unit input.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` for unparsable text and
/// `DomainError::Overflow` if the amount is out of range.
pub fn cents_from_with<A>(amount: Option<A>, rounding: Rounding) -> DomainResult<Option<Cents>>
where
    A: Into<Amount>,
{
    amount
        .map(|a| Cents::from_amount_with(&a.into(), rounding))
        .transpose()
}
