//! # Rate Estimate Entity
//!
//! A shipping-rate quotation returned by a carrier.
//!
//! This module provides the [`RateEstimate`] entity: origin and destination,
//! the rate quoted for each package, aggregate charge totals, currency and
//! estimated delivery date. Every monetary field is normalized once into
//! [`Cents`] when the estimate is built or a package is added.
//!
//! # Total Price
//!
//! ```text
//! stored total?  ── yes ──▶ stored total
//!      │
//!      no
//!      ▼
//! every package rated? ── no ──▶ IncompleteRate
//!      │
//!     yes
//!      ▼
//! sum of package rates
//! ```
//!
//! # Examples
//!
//! ```
//! use shipping_rates::domain::entities::rate_estimate::{RateEstimate, RateEstimateOptions};
//! use shipping_rates::domain::value_objects::{Cents, Location, Package};
//!
//! let origin = Location::builder("US").postal_code("90210").build().unwrap();
//! let destination = Location::builder("CA").postal_code("K1P 1J1").build().unwrap();
//!
//! let options = RateEstimateOptions::new()
//!     .package_rate(Package::new(500).unwrap(), Some("12.34"))
//!     .package_rate(Package::new(750).unwrap(), Some(866));
//!
//! let estimate = RateEstimate::new(origin, destination, "USPS", "Priority Mail", options).unwrap();
//!
//! assert_eq!(estimate.total_price().unwrap(), Cents::new(2100));
//! assert_eq!(estimate.package_count(), 2);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::Rounding;
use crate::domain::value_objects::money::{Amount, Cents, cents_from_with};
use crate::domain::value_objects::{CarrierName, CurrencyCode, Location, Package, ServiceCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package paired with the rate quoted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRate {
    package: Package,
    rate: Option<Cents>,
}

impl PackageRate {
    /// Creates a package rate entry.
    #[must_use]
    pub fn new(package: Package, rate: Option<Cents>) -> Self {
        Self { package, rate }
    }

    /// Returns the package.
    #[inline]
    #[must_use]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Returns the quoted rate, if the carrier priced this package.
    #[inline]
    #[must_use]
    pub fn rate(&self) -> Option<Cents> {
        self.rate
    }
}

/// A package and its rate as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRateInput {
    /// The quoted package.
    pub package: Package,
    /// The raw rate, if any.
    pub rate: Option<Amount>,
}

impl PackageRateInput {
    /// Creates a package rate input.
    #[must_use]
    pub fn new<A: Into<Amount>>(package: Package, rate: Option<A>) -> Self {
        Self {
            package,
            rate: rate.map(Into::into),
        }
    }
}

/// Aggregate charge breakdown reported by some carriers.
///
/// Every field is independent and optional; nothing here is derived from
/// the package rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChargeTotals {
    /// Billable weight, stored in the same integer minor-unit form as money.
    pub billing_weight: Option<Cents>,
    /// Base charge before discounts and surcharges.
    pub base_charge: Option<Cents>,
    /// Freight discounts.
    pub freight_discounts: Option<Cents>,
    /// Net freight.
    pub net_freight: Option<Cents>,
    /// Surcharges.
    pub surcharges: Option<Cents>,
    /// Net charge billed by the carrier.
    pub net_carrier_charge: Option<Cents>,
    /// Taxes.
    pub taxes: Option<Cents>,
    /// Rebates.
    pub rebates: Option<Cents>,
}

impl ChargeTotals {
    /// Returns true if no total is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Options recognized when building a [`RateEstimate`].
///
/// Every field is optional. `packages` is only consulted when
/// `package_rates` is `None`.
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::entities::rate_estimate::RateEstimateOptions;
/// use shipping_rates::domain::value_objects::{CurrencyCode, Package};
///
/// let options = RateEstimateOptions::new()
///     .service_code("FEDEX_GROUND")
///     .packages([Package::new(1_000).unwrap()])
///     .total_price("24.10")
///     .currency(CurrencyCode::new("USD").unwrap());
///
/// assert!(options.package_rates.is_none());
/// assert_eq!(options.packages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateEstimateOptions {
    /// Carrier service code.
    pub service_code: Option<ServiceCode>,
    /// Packages with their quoted rates, in quote order.
    pub package_rates: Option<Vec<PackageRateInput>>,
    /// Unrated packages, used only when `package_rates` is `None`.
    pub packages: Vec<Package>,
    /// Total price for the whole shipment.
    pub total_price: Option<Amount>,
    /// Currency of every monetary field.
    pub currency: Option<CurrencyCode>,
    /// Estimated delivery date.
    pub delivery_date: Option<DateTime<Utc>>,
    /// Billable weight.
    pub total_billing_weight: Option<Amount>,
    /// Base charge.
    pub total_base_charge: Option<Amount>,
    /// Freight discounts.
    pub total_freight_discounts: Option<Amount>,
    /// Net freight.
    pub total_net_freight: Option<Amount>,
    /// Surcharges.
    pub total_surcharges: Option<Amount>,
    /// Net carrier charge.
    pub total_net_carrier_charge: Option<Amount>,
    /// Taxes.
    pub total_taxes: Option<Amount>,
    /// Rebates.
    pub total_rebates: Option<Amount>,
    /// Carrier-specific per-package detail, passed through untouched.
    pub package_estimates: Option<serde_json::Value>,
    /// Rounding for major-unit amounts.
    pub rounding: Rounding,
}

impl RateEstimateOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service code.
    #[must_use]
    pub fn service_code(mut self, code: impl Into<ServiceCode>) -> Self {
        self.service_code = Some(code.into());
        self
    }

    /// Replaces the package rates.
    #[must_use]
    pub fn package_rates(mut self, rates: impl IntoIterator<Item = PackageRateInput>) -> Self {
        self.package_rates = Some(rates.into_iter().collect());
        self
    }

    /// Appends one package rate.
    #[must_use]
    pub fn package_rate<A: Into<Amount>>(mut self, package: Package, rate: Option<A>) -> Self {
        self.package_rates
            .get_or_insert_with(Vec::new)
            .push(PackageRateInput::new(package, rate));
        self
    }

    /// Sets the unrated packages.
    #[must_use]
    pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
        self.packages = packages.into_iter().collect();
        self
    }

    /// Sets the total price.
    #[must_use]
    pub fn total_price(mut self, amount: impl Into<Amount>) -> Self {
        self.total_price = Some(amount.into());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the estimated delivery date.
    #[must_use]
    pub fn delivery_date(mut self, date: DateTime<Utc>) -> Self {
        self.delivery_date = Some(date);
        self
    }

    /// Sets the billable weight.
    #[must_use]
    pub fn total_billing_weight(mut self, amount: impl Into<Amount>) -> Self {
        self.total_billing_weight = Some(amount.into());
        self
    }

    /// Sets the base charge.
    #[must_use]
    pub fn total_base_charge(mut self, amount: impl Into<Amount>) -> Self {
        self.total_base_charge = Some(amount.into());
        self
    }

    /// Sets the freight discounts.
    #[must_use]
    pub fn total_freight_discounts(mut self, amount: impl Into<Amount>) -> Self {
        self.total_freight_discounts = Some(amount.into());
        self
    }

    /// Sets the net freight.
    #[must_use]
    pub fn total_net_freight(mut self, amount: impl Into<Amount>) -> Self {
        self.total_net_freight = Some(amount.into());
        self
    }

    /// Sets the surcharges.
    #[must_use]
    pub fn total_surcharges(mut self, amount: impl Into<Amount>) -> Self {
        self.total_surcharges = Some(amount.into());
        self
    }

    /// Sets the net carrier charge.
    #[must_use]
    pub fn total_net_carrier_charge(mut self, amount: impl Into<Amount>) -> Self {
        self.total_net_carrier_charge = Some(amount.into());
        self
    }

    /// Sets the taxes.
    #[must_use]
    pub fn total_taxes(mut self, amount: impl Into<Amount>) -> Self {
        self.total_taxes = Some(amount.into());
        self
    }

    /// Sets the rebates.
    #[must_use]
    pub fn total_rebates(mut self, amount: impl Into<Amount>) -> Self {
        self.total_rebates = Some(amount.into());
        self
    }

    /// Sets the opaque per-package estimates.
    #[must_use]
    pub fn package_estimates(mut self, estimates: serde_json::Value) -> Self {
        self.package_estimates = Some(estimates);
        self
    }

    /// Sets the rounding mode for major-unit amounts.
    #[must_use]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

/// A carrier's quote for shipping a set of packages.
///
/// # Invariants
///
/// - Without a stored total, every package rate must be present for
///   [`RateEstimate::total_price`] to succeed
/// - `package_rates` keeps insertion order
/// - Monetary fields are normalized once, on construction or [`RateEstimate::add`]
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::entities::rate_estimate::{RateEstimate, RateEstimateOptions};
/// use shipping_rates::domain::errors::DomainError;
/// use shipping_rates::domain::value_objects::{Cents, Location, Package};
///
/// let origin = Location::builder("US").build().unwrap();
/// let destination = Location::builder("US").build().unwrap();
///
/// let options = RateEstimateOptions::new().packages([Package::new(500).unwrap()]);
/// let mut estimate = RateEstimate::new(origin, destination, "UPS", "Ground", options).unwrap();
///
/// // An unrated package and no total
/// assert!(matches!(estimate.total_price(), Err(DomainError::IncompleteRate(_))));
///
/// // A rate-less package cannot be added without a total
/// let result = estimate.add(Package::new(250).unwrap(), None::<i64>);
/// assert!(matches!(result, Err(DomainError::InvalidOperation(_))));
/// assert_eq!(estimate.package_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEstimate {
    origin: Location,
    destination: Location,
    carrier: CarrierName,
    service_name: String,
    service_code: Option<ServiceCode>,
    package_rates: Vec<PackageRate>,
    total_price: Option<Cents>,
    currency: Option<CurrencyCode>,
    delivery_date: Option<DateTime<Utc>>,
    totals: ChargeTotals,
    package_estimates: Option<serde_json::Value>,
    rounding: Rounding,
}

impl RateEstimate {
    /// Creates a rate estimate, normalizing every monetary option.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if an amount cannot be parsed
    /// and `DomainError::Overflow` if one does not fit in minor units.
    pub fn new(
        origin: Location,
        destination: Location,
        carrier: impl Into<CarrierName>,
        service_name: impl Into<String>,
        options: RateEstimateOptions,
    ) -> DomainResult<Self> {
        let rounding = options.rounding;
        let normalize = |amount: Option<Amount>| cents_from_with(amount, rounding);

        let package_rates = match options.package_rates {
            Some(rates) => rates
                .into_iter()
                .map(|input| -> DomainResult<PackageRate> {
                    Ok(PackageRate::new(input.package, normalize(input.rate)?))
                })
                .collect::<DomainResult<Vec<_>>>()?,
            None => options
                .packages
                .into_iter()
                .map(|package| PackageRate::new(package, None))
                .collect(),
        };

        let totals = ChargeTotals {
            billing_weight: normalize(options.total_billing_weight)?,
            base_charge: normalize(options.total_base_charge)?,
            freight_discounts: normalize(options.total_freight_discounts)?,
            net_freight: normalize(options.total_net_freight)?,
            surcharges: normalize(options.total_surcharges)?,
            net_carrier_charge: normalize(options.total_net_carrier_charge)?,
            taxes: normalize(options.total_taxes)?,
            rebates: normalize(options.total_rebates)?,
        };

        Ok(Self {
            origin,
            destination,
            carrier: carrier.into(),
            service_name: service_name.into(),
            service_code: options.service_code,
            package_rates,
            total_price: normalize(options.total_price)?,
            currency: options.currency,
            delivery_date: options.delivery_date,
            totals,
            package_estimates: options.package_estimates,
            rounding,
        })
    }

    /// Returns the total price of the shipment.
    ///
    /// The stored total wins when present. Otherwise the package rates are
    /// summed, which requires every package to carry a rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRate` if no total is stored and a
    /// package has no rate, or `DomainError::Overflow` if the sum does not
    /// fit.
    pub fn total_price(&self) -> DomainResult<Cents> {
        if let Some(total) = self.total_price {
            return Ok(total);
        }

        if let Some(index) = self.package_rates.iter().position(|pr| pr.rate.is_none()) {
            return Err(DomainError::IncompleteRate(format!(
                "estimate must have a total price set, or a full set of valid package rates \
                 (package {} of {} has no rate)",
                index + 1,
                self.package_rates.len()
            )));
        }

        Ok(Cents::checked_sum(
            self.package_rates.iter().filter_map(PackageRate::rate),
        )?)
    }

    /// Alias of [`RateEstimate::total_price`].
    ///
    /// # Errors
    ///
    /// Same as [`RateEstimate::total_price`].
    #[inline]
    pub fn price(&self) -> DomainResult<Cents> {
        self.total_price()
    }

    /// Appends a package and its rate, returning the estimate for chaining.
    ///
    /// The rate is normalized with the estimate's rounding mode. On error
    /// the estimate is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOperation` if `rate` is `None` and the
    /// estimate has no stored total, or `DomainError::InvalidAmount` if the
    /// rate cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shipping_rates::domain::entities::rate_estimate::{RateEstimate, RateEstimateOptions};
    /// use shipping_rates::domain::value_objects::{Cents, Location, Package};
    ///
    /// let here = Location::builder("US").build().unwrap();
    /// let mut estimate =
    ///     RateEstimate::new(here.clone(), here, "USPS", "Ground", RateEstimateOptions::new()).unwrap();
    ///
    /// estimate
    ///     .add(Package::new(100).unwrap(), Some(300))
    ///     .unwrap()
    ///     .add(Package::new(200).unwrap(), Some("4.50"))
    ///     .unwrap();
    ///
    /// assert_eq!(estimate.total_price().unwrap(), Cents::new(750));
    /// ```
    pub fn add<A: Into<Amount>>(
        &mut self,
        package: Package,
        rate: Option<A>,
    ) -> DomainResult<&mut Self> {
        let rate = cents_from_with(rate, self.rounding)?;
        if rate.is_none() && self.total_price.is_none() {
            return Err(DomainError::InvalidOperation(
                "new packages must have valid rate information since this estimate has no total \
                 price set"
                    .to_string(),
            ));
        }
        self.package_rates.push(PackageRate::new(package, rate));
        Ok(self)
    }

    /// Returns the packages in quote order.
    ///
    /// Call again to restart, or clone the iterator.
    pub fn packages(&self) -> impl ExactSizeIterator<Item = &Package> + Clone + '_ {
        self.package_rates.iter().map(PackageRate::package)
    }

    /// Returns the number of packages.
    #[inline]
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.package_rates.len()
    }

    /// Returns the package rate entries in quote order.
    #[inline]
    #[must_use]
    pub fn package_rates(&self) -> &[PackageRate] {
        &self.package_rates
    }

    /// Returns true if a total price is stored.
    #[inline]
    #[must_use]
    pub fn has_total_price(&self) -> bool {
        self.total_price.is_some()
    }

    /// Returns true if every package carries a rate.
    #[must_use]
    pub fn has_complete_rates(&self) -> bool {
        self.package_rates.iter().all(|pr| pr.rate.is_some())
    }

    /// Returns the origin.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the carrier.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &CarrierName {
        &self.carrier
    }

    /// Returns the human-readable service name.
    #[inline]
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the service code, if any.
    #[inline]
    #[must_use]
    pub fn service_code(&self) -> Option<&ServiceCode> {
        self.service_code.as_ref()
    }

    /// Returns the currency, if any.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }

    /// Returns the estimated delivery date, if any.
    #[inline]
    #[must_use]
    pub fn delivery_date(&self) -> Option<DateTime<Utc>> {
        self.delivery_date
    }

    /// Returns the aggregate charge totals.
    #[inline]
    #[must_use]
    pub fn charge_totals(&self) -> &ChargeTotals {
        &self.totals
    }

    /// Returns the billable weight, if reported.
    #[inline]
    #[must_use]
    pub fn total_billing_weight(&self) -> Option<Cents> {
        self.totals.billing_weight
    }

    /// Returns the base charge, if reported.
    #[inline]
    #[must_use]
    pub fn total_base_charge(&self) -> Option<Cents> {
        self.totals.base_charge
    }

    /// Returns the freight discounts, if reported.
    #[inline]
    #[must_use]
    pub fn total_freight_discounts(&self) -> Option<Cents> {
        self.totals.freight_discounts
    }

    /// Returns the net freight, if reported.
    #[inline]
    #[must_use]
    pub fn total_net_freight(&self) -> Option<Cents> {
        self.totals.net_freight
    }

    /// Returns the surcharges, if reported.
    #[inline]
    #[must_use]
    pub fn total_surcharges(&self) -> Option<Cents> {
        self.totals.surcharges
    }

    /// Returns the net carrier charge, if reported.
    #[inline]
    #[must_use]
    pub fn total_net_carrier_charge(&self) -> Option<Cents> {
        self.totals.net_carrier_charge
    }

    /// Returns the taxes, if reported.
    #[inline]
    #[must_use]
    pub fn total_taxes(&self) -> Option<Cents> {
        self.totals.taxes
    }

    /// Returns the rebates, if reported.
    #[inline]
    #[must_use]
    pub fn total_rebates(&self) -> Option<Cents> {
        self.totals.rebates
    }

    /// Returns the carrier-specific per-package detail, if any.
    #[inline]
    #[must_use]
    pub fn package_estimates(&self) -> Option<&serde_json::Value> {
        self.package_estimates.as_ref()
    }

    /// Returns the rounding mode used for major-unit amounts.
    #[inline]
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

impl fmt::Display for RateEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.carrier, self.service_name)?;
        match self.total_price() {
            Ok(price) => write!(f, "{}", price.to_major())?,
            Err(_) => write!(f, "unpriced")?,
        }
        if let Some(currency) = &self.currency {
            write!(f, " {}", currency)?;
        }
        Ok(())
    }
}
