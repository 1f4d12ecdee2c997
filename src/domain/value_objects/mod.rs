//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Money
//!
//! - [`Cents`]: Integer count of currency minor units
//! - [`Amount`]: Raw monetary input before normalization
//! - [`cents_from`]: The single normalization entry point
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`Rounding`]: Rounding mode for major-to-minor conversion
//!
//! ## Identity Types
//!
//! - [`CarrierName`], [`ServiceCode`]: String-based identifiers
//! - [`CurrencyCode`]: ISO 4217 code
//!
//! ## Shipment Records
//!
//! - [`Location`]: Origin or destination
//! - [`Package`]: A shipped item

pub mod arithmetic;
pub mod currency;
pub mod ids;
pub mod location;
pub mod money;
pub mod package;

#[cfg(test)]
mod tests;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, Rounding};
pub use currency::{CurrencyCode, CurrencyError};
pub use ids::{CarrierName, ServiceCode};
pub use location::{Location, LocationBuilder};
pub use money::{Amount, Cents, cents_from, cents_from_with};
pub use package::{Dimensions, Package, PackageBuilder};
