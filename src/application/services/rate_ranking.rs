//! # Rate Ranking
//!
//! Strategies for ranking the estimates a carrier (or several carriers)
//! returned for the same shipment.
//!
//! This module provides the [`RateRankingStrategy`] trait and the
//! [`CheapestFirst`] and [`FastestFirst`] implementations. Estimates whose
//! price cannot be computed are left out of the ranking.
//!
//! Prices are only comparable within one currency. A strategy ranks in its
//! configured currency, or else in the currency of the first priced
//! estimate; estimates quoted in any other currency (or in none, when the
//! ranking currency is known) are skipped with a warning.

use crate::domain::entities::RateEstimate;
use crate::domain::value_objects::{Cents, CurrencyCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// An estimate with its ranking information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRate {
    /// The estimate being ranked.
    pub estimate: RateEstimate,
    /// The rank (1 = best).
    pub rank: usize,
    /// The total price the ranking used.
    pub price: Cents,
}

impl RankedRate {
    /// Creates a new ranked rate.
    #[must_use]
    pub fn new(estimate: RateEstimate, rank: usize, price: Cents) -> Self {
        Self {
            estimate,
            rank,
            price,
        }
    }

    /// Returns true if this estimate is the best (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.rank, self.estimate)
    }
}

/// Trait for ranking strategies.
pub trait RateRankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given estimates, best first.
    ///
    /// Estimates without a computable price are skipped.
    fn rank(&self, estimates: &[RateEstimate]) -> Vec<RankedRate>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// An estimate that could be priced, with its input position.
struct Priced<'a> {
    index: usize,
    price: Cents,
    delivery: Option<DateTime<Utc>>,
    estimate: &'a RateEstimate,
}

fn currency_label(currency: Option<&CurrencyCode>) -> &str {
    currency.map_or("none", CurrencyCode::as_str)
}

/// Prices the estimates that can be compared in one currency.
///
/// `currency` fixes the ranking currency; when `None`, the first priced
/// estimate's currency is used.
fn priced<'a>(estimates: &'a [RateEstimate], currency: Option<&CurrencyCode>) -> Vec<Priced<'a>> {
    let mut basis: Option<Option<CurrencyCode>> = currency.map(|c| Some(c.clone()));
    let mut scored = Vec::with_capacity(estimates.len());

    for (index, estimate) in estimates.iter().enumerate() {
        let price = match estimate.total_price() {
            Ok(price) => price,
            Err(err) => {
                warn!(
                    carrier = %estimate.carrier(),
                    service = estimate.service_name(),
                    error = %err,
                    "skipping estimate without a price"
                );
                continue;
            }
        };

        let basis = basis.get_or_insert_with(|| estimate.currency().cloned());
        if estimate.currency() != basis.as_ref() {
            warn!(
                carrier = %estimate.carrier(),
                service = estimate.service_name(),
                currency = currency_label(estimate.currency()),
                ranking_currency = currency_label(basis.as_ref()),
                "skipping estimate quoted in another currency"
            );
            continue;
        }

        scored.push(Priced {
            index,
            price,
            delivery: estimate.delivery_date(),
            estimate,
        });
    }

    scored
}

/// Orders known dates first, earliest first.
fn cmp_delivery(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn into_ranked(sorted: Vec<Priced<'_>>) -> Vec<RankedRate> {
    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, p)| RankedRate::new(p.estimate.clone(), rank + 1, p.price))
        .collect()
}

/// Cheapest first.
///
/// Ties are broken by earlier delivery date, then input order.
#[derive(Debug, Clone, Default)]
pub struct CheapestFirst {
    currency: Option<CurrencyCode>,
}

impl CheapestFirst {
    /// Creates a cheapest-first strategy ranking in the first priced
    /// estimate's currency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cheapest-first strategy ranking only `currency` quotes.
    #[must_use]
    pub fn in_currency(currency: CurrencyCode) -> Self {
        Self {
            currency: Some(currency),
        }
    }
}

impl RateRankingStrategy for CheapestFirst {
    fn rank(&self, estimates: &[RateEstimate]) -> Vec<RankedRate> {
        let mut scored = priced(estimates, self.currency.as_ref());
        scored.sort_by(|a, b| {
            a.price
                .cmp(&b.price)
                .then_with(|| cmp_delivery(a.delivery, b.delivery))
                .then_with(|| a.index.cmp(&b.index))
        });
        debug!(
            strategy = self.name(),
            input = estimates.len(),
            ranked = scored.len(),
            "ranked estimates"
        );
        into_ranked(scored)
    }

    fn name(&self) -> &'static str {
        "CheapestFirst"
    }
}

/// Earliest delivery first.
///
/// Estimates without a delivery date rank after dated ones. Ties are
/// broken by price, then input order.
#[derive(Debug, Clone, Default)]
pub struct FastestFirst {
    currency: Option<CurrencyCode>,
}

impl FastestFirst {
    /// Creates a fastest-first strategy ranking in the first priced
    /// estimate's currency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fastest-first strategy ranking only `currency` quotes.
    #[must_use]
    pub fn in_currency(currency: CurrencyCode) -> Self {
        Self {
            currency: Some(currency),
        }
    }
}

impl RateRankingStrategy for FastestFirst {
    fn rank(&self, estimates: &[RateEstimate]) -> Vec<RankedRate> {
        let mut scored = priced(estimates, self.currency.as_ref());
        scored.sort_by(|a, b| {
            cmp_delivery(a.delivery, b.delivery)
                .then_with(|| a.price.cmp(&b.price))
                .then_with(|| a.index.cmp(&b.index))
        });
        debug!(
            strategy = self.name(),
            input = estimates.len(),
            ranked = scored.len(),
            "ranked estimates"
        );
        into_ranked(scored)
    }

    fn name(&self) -> &'static str {
        "FastestFirst"
    }
}

/// Selectable ranking strategy, for configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingKind {
    /// [`CheapestFirst`].
    #[default]
    Cheapest,
    /// [`FastestFirst`].
    Fastest,
}

impl RankingKind {
    /// Returns the strategy for this kind, ranking in `currency` when
    /// given.
    #[must_use]
    pub fn strategy(self, currency: Option<CurrencyCode>) -> Box<dyn RateRankingStrategy> {
        match self {
            Self::Cheapest => Box::new(CheapestFirst { currency }),
            Self::Fastest => Box::new(FastestFirst { currency }),
        }
    }
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cheapest => write!(f, "cheapest"),
            Self::Fastest => write!(f, "fastest"),
        }
    }
}

impl FromStr for RankingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cheapest" => Ok(Self::Cheapest),
            "fastest" => Ok(Self::Fastest),
            other => Err(format!("unknown ranking strategy '{other}'")),
        }
    }
}
