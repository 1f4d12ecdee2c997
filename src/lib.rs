//! # Shipping Rates
//!
//! Carrier shipping-rate estimates with exact integer money.
//!
//! A [`RateEstimate`](domain::entities::RateEstimate) is one carrier's
//! quote for shipping a set of packages between two locations. Monetary
//! input may arrive in major units (`"12.34"`, `12.34`) or minor units
//! (`1234`, `"1234"`) and is normalized to [`Cents`](domain::value_objects::Cents)
//! on construction.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain`): Entities, value objects, and errors
//! - **Application Layer** (`application`): Request DTOs and ranking services
//! - **Configuration** (`config`): File and environment configuration
//!
//! ## Example
//!
//! ```
//! use shipping_rates::domain::entities::{RateEstimate, RateEstimateOptions};
//! use shipping_rates::domain::value_objects::{Cents, Location, Package};
//!
//! let origin = Location::builder("US").postal_code("90210").build()?;
//! let destination = Location::builder("CA").postal_code("K1P 1J1").build()?;
//! let options = RateEstimateOptions::new()
//!     .package_rate(Package::new(500)?, Some("12.34"))
//!     .package_rate(Package::new(750)?, Some(866));
//!
//! let estimate = RateEstimate::new(origin, destination, "FedEx", "Ground", options)?;
//! assert_eq!(estimate.total_price()?, Cents::new(2100));
//! # Ok::<(), shipping_rates::domain::errors::DomainError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
