//! # Arithmetic Errors
//!
//! Failures of checked money arithmetic: summing package rates,
//! scaling major units to minor units.
//!
//! Defined next to the arithmetic in
//! [`crate::domain::value_objects::arithmetic`] and re-exported here so
//! callers find every error type under `domain::errors`.

pub use crate::domain::value_objects::arithmetic::{ArithmeticError, ArithmeticResult};
