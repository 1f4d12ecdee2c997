//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Error codes are organized by category:
//! - 1000-1999: Validation errors
//! - 2000-2999: State errors
//! - 4000-4999: Arithmetic errors
//!
//! # Examples
//!
//! ```
//! use shipping_rates::domain::errors::{DomainError, DomainResult};
//!
//! fn require_rate(rate: Option<i64>) -> DomainResult<i64> {
//!     rate.ok_or_else(|| DomainError::IncompleteRate("missing rate".to_string()))
//! }
//!
//! assert_eq!(require_rate(None).unwrap_err().code(), 2001);
//! ```

pub mod arithmetic_error;
pub mod domain_error;

pub use arithmetic_error::ArithmeticError;
pub use domain_error::{DomainError, DomainResult};
