//! # Domain Entities
//!
//! ## Entities
//!
//! - [`RateEstimate`]: A carrier's quote for shipping a set of packages
//!
//! ## Supporting Types
//!
//! - [`PackageRate`]: A package paired with its quoted rate
//! - [`RateEstimateOptions`]: Recognized construction options
//! - [`ChargeTotals`]: Aggregate charge breakdown

pub mod rate_estimate;


pub use rate_estimate::{
    ChargeTotals, PackageRate, PackageRateInput, RateEstimate, RateEstimateOptions,
};
