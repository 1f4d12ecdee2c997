//! # Rate Estimate DTOs
//!
//! Serializable request and summary shapes for rate estimates.
//!
//! [`RateEstimateRequest`] is the option bag as it arrives over the wire:
//! unknown keys are ignored and every recognized key is optional apart
//! from the origin, destination, carrier and service name.
//! [`RateEstimateSummary`] is what gets reported back.

use crate::application::services::RankedRate;
use crate::domain::entities::{PackageRateInput, RateEstimate, RateEstimateOptions};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Amount, CurrencyCode, Location, Package, Rounding};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package with its raw quoted rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRateRequest {
    /// The quoted package.
    pub package: Package,
    /// The raw rate, if the carrier priced this package.
    #[serde(default)]
    pub rate: Option<Amount>,
}

/// Request to build a [`RateEstimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEstimateRequest {
    /// Shipment origin.
    pub origin: Location,
    /// Shipment destination.
    pub destination: Location,
    /// Quoting carrier.
    pub carrier: String,
    /// Human-readable service name.
    pub service_name: String,
    /// Carrier service code.
    #[serde(default)]
    pub service_code: Option<String>,
    /// Packages with their rates.
    #[serde(default)]
    pub package_rates: Option<Vec<PackageRateRequest>>,
    /// Unrated packages, used only when `package_rates` is absent.
    #[serde(default)]
    pub packages: Option<Vec<Package>>,
    /// Total price.
    #[serde(default)]
    pub total_price: Option<Amount>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Estimated delivery date (RFC 3339).
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
    /// Billable weight.
    #[serde(default)]
    pub total_billing_weight: Option<Amount>,
    /// Base charge.
    #[serde(default)]
    pub total_base_charge: Option<Amount>,
    /// Freight discounts.
    #[serde(default)]
    pub total_freight_discounts: Option<Amount>,
    /// Net freight.
    #[serde(default)]
    pub total_net_freight: Option<Amount>,
    /// Surcharges.
    #[serde(default)]
    pub total_surcharges: Option<Amount>,
    /// Net carrier charge.
    #[serde(default, alias = "total_net_fedex_charge")]
    pub total_net_carrier_charge: Option<Amount>,
    /// Taxes.
    #[serde(default)]
    pub total_taxes: Option<Amount>,
    /// Rebates.
    #[serde(default)]
    pub total_rebates: Option<Amount>,
    /// Opaque carrier-specific detail.
    #[serde(default)]
    pub package_estimates: Option<serde_json::Value>,
}

impl RateEstimateRequest {
    /// Validates the request fields that the entity does not check itself.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` describing the first invalid field.
    pub fn validate(&self) -> DomainResult<()> {
        if self.carrier.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "carrier cannot be empty".to_string(),
            ));
        }
        if self.service_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        self.origin.validate()?;
        self.destination.validate()?;

        let rated = self.package_rates.iter().flatten().map(|pr| &pr.package);
        let unrated = self.packages.iter().flatten();
        for package in rated.chain(unrated) {
            package.validate()?;
        }
        Ok(())
    }

    /// Converts the request into a domain estimate.
    ///
    /// `default_currency` applies when the request names none.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if validation or amount normalization fails.
    pub fn into_estimate(
        self,
        rounding: Rounding,
        default_currency: Option<&CurrencyCode>,
    ) -> DomainResult<RateEstimate> {
        self.validate()?;

        let currency = match self.currency {
            Some(code) => Some(CurrencyCode::new(code)?),
            None => default_currency.cloned(),
        };

        let options = RateEstimateOptions {
            service_code: self.service_code.map(Into::into),
            package_rates: self.package_rates.map(|rates| {
                rates
                    .into_iter()
                    .map(|pr| PackageRateInput {
                        package: pr.package,
                        rate: pr.rate,
                    })
                    .collect()
            }),
            packages: self.packages.unwrap_or_default(),
            total_price: self.total_price,
            currency,
            delivery_date: self.delivery_date,
            total_billing_weight: self.total_billing_weight,
            total_base_charge: self.total_base_charge,
            total_freight_discounts: self.total_freight_discounts,
            total_net_freight: self.total_net_freight,
            total_surcharges: self.total_surcharges,
            total_net_carrier_charge: self.total_net_carrier_charge,
            total_taxes: self.total_taxes,
            total_rebates: self.total_rebates,
            package_estimates: self.package_estimates,
            rounding,
        };

        RateEstimate::new(
            self.origin,
            self.destination,
            self.carrier,
            self.service_name,
            options,
        )
    }
}

impl fmt::Display for RateEstimateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RateEstimateRequest {{ carrier: {}, service: {}, {} -> {} }}",
            self.carrier, self.service_name, self.origin, self.destination
        )
    }
}

/// Summary of a ranked estimate for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEstimateSummary {
    /// Rank (1 = best).
    pub rank: usize,
    /// Quoting carrier.
    pub carrier: String,
    /// Service name.
    pub service_name: String,
    /// Service code, if any.
    pub service_code: Option<String>,
    /// Total price in minor units.
    pub total_price: i64,
    /// Total price in major units.
    pub total_price_major: Decimal,
    /// Currency code, if any.
    pub currency: Option<String>,
    /// Estimated delivery date, if any.
    pub delivery_date: Option<DateTime<Utc>>,
    /// Number of packages quoted.
    pub package_count: usize,
}

impl From<&RankedRate> for RateEstimateSummary {
    fn from(ranked: &RankedRate) -> Self {
        let estimate = &ranked.estimate;
        Self {
            rank: ranked.rank,
            carrier: estimate.carrier().to_string(),
            service_name: estimate.service_name().to_string(),
            service_code: estimate.service_code().map(ToString::to_string),
            total_price: ranked.price.get(),
            total_price_major: ranked.price.to_major(),
            currency: estimate.currency().map(ToString::to_string),
            delivery_date: estimate.delivery_date(),
            package_count: estimate.package_count(),
        }
    }
}

impl fmt::Display for RateEstimateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {:<10} {:<28} {:>12} {:<3}",
            self.rank,
            self.carrier,
            self.service_name,
            self.total_price_major,
            self.currency.as_deref().unwrap_or("")
        )?;
        if let Some(date) = self.delivery_date {
            write!(f, "  {}", date.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}
