//! # Domain Layer
//!
//! Core shipping-rate model following Domain-Driven Design principles.
//!
//! This layer contains:
//! - **Entities**: The carrier rate estimate and its package rates
//! - **Value Objects**: Money, currency, locations and packages
//! - **Errors**: Domain-specific error types

pub mod entities;
pub mod errors;
pub mod value_objects;
