//! # Application Services
//!
//! Services that operate on collections of estimates.
//!
//! - [`RateRankingStrategy`]: Strategies for ranking estimates

pub mod rate_ranking;

pub use rate_ranking::{CheapestFirst, FastestFirst, RankedRate, RankingKind, RateRankingStrategy};
