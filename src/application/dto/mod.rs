//! # Data Transfer Objects
//!
//! Wire shapes for estimate requests and ranked summaries, decoupling the
//! JSON boundary from the domain entities.

pub mod rate_estimate_dto;

pub use rate_estimate_dto::{PackageRateRequest, RateEstimateRequest, RateEstimateSummary};
