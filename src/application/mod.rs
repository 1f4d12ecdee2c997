//! # Application Layer
//!
//! Request conversion and ranking on top of the domain layer.
//!
//! ## DTOs
//!
//! - [`RateEstimateRequest`]: JSON request that builds a `RateEstimate`
//! - [`RateEstimateSummary`]: Serializable ranked result
//!
//! ## Services
//!
//! - [`CheapestFirst`] and [`FastestFirst`]: ranking strategies

pub mod dto;
pub mod services;

pub use dto::{PackageRateRequest, RateEstimateRequest, RateEstimateSummary};
pub use services::{CheapestFirst, FastestFirst, RankedRate, RankingKind, RateRankingStrategy};
