//! # Package Value Object
//!
//! A shipped item as quoted by a carrier.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipping_rates::domain::value_objects::package::{Dimensions, Package};
//!
//! let package = Package::builder(2_500)
//!     .dimensions(Dimensions::new(Decimal::new(30, 0), Decimal::new(20, 0), Decimal::new(10, 0)).unwrap())
//!     .gift(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(package.weight_grams(), 2_500);
//! assert_eq!(package.volume_cm3(), Some(Decimal::new(6000, 0)));
//! ```

use super::currency::CurrencyCode;
use super::money::Cents;
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outer dimensions of a package in centimetres.
///
/// # Invariants
///
/// - Every side is strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    length_cm: Decimal,
    width_cm: Decimal,
    height_cm: Decimal,
}

impl Dimensions {
    /// Creates dimensions from length, width and height in centimetres.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPackage` if any side is zero or negative.
    pub fn new(length_cm: Decimal, width_cm: Decimal, height_cm: Decimal) -> DomainResult<Self> {
        let dims = Self {
            length_cm,
            width_cm,
            height_cm,
        };
        dims.validate()?;
        Ok(dims)
    }

    fn validate(&self) -> DomainResult<()> {
        let sides = [self.length_cm, self.width_cm, self.height_cm];
        if sides.iter().any(|side| side.is_sign_negative() || side.is_zero()) {
            return Err(DomainError::InvalidPackage(
                "dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the length in centimetres.
    #[inline]
    #[must_use]
    pub const fn length_cm(&self) -> Decimal {
        self.length_cm
    }

    /// Returns the width in centimetres.
    #[inline]
    #[must_use]
    pub const fn width_cm(&self) -> Decimal {
        self.width_cm
    }

    /// Returns the height in centimetres.
    #[inline]
    #[must_use]
    pub const fn height_cm(&self) -> Decimal {
        self.height_cm
    }

    /// Returns the volume in cubic centimetres, or `None` on overflow.
    #[must_use]
    pub fn volume_cm3(&self) -> Option<Decimal> {
        self.length_cm
            .checked_mul(self.width_cm)?
            .checked_mul(self.height_cm)
    }
}

/// A package referenced by a rate estimate.
///
/// # Invariants
///
/// - `weight_grams` is strictly positive
/// - `value` and `currency` are either both set or `currency` is unset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    weight_grams: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Cents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<CurrencyCode>,
    #[serde(default)]
    cylinder: bool,
    #[serde(default)]
    gift: bool,
}

impl Package {
    /// Creates a package with only a weight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPackage` if the weight is zero.
    pub fn new(weight_grams: u32) -> DomainResult<Self> {
        Self::builder(weight_grams).build()
    }

    /// Creates a builder for a package of `weight_grams`.
    #[must_use]
    pub fn builder(weight_grams: u32) -> PackageBuilder {
        PackageBuilder::new(weight_grams)
    }

    /// Validates the package.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPackage` if an invariant does not hold.
    pub fn validate(&self) -> DomainResult<()> {
        if self.weight_grams == 0 {
            return Err(DomainError::InvalidPackage(
                "weight must be positive".to_string(),
            ));
        }
        if let Some(dims) = &self.dimensions {
            dims.validate()?;
        }
        if self.currency.is_some() && self.value.is_none() {
            return Err(DomainError::InvalidPackage(
                "currency given without a declared value".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the weight in grams.
    #[inline]
    #[must_use]
    pub const fn weight_grams(&self) -> u32 {
        self.weight_grams
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        Decimal::new(i64::from(self.weight_grams), 3)
    }

    /// Returns the outer dimensions, if known.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// Returns the volume in cubic centimetres, if dimensions are known.
    #[must_use]
    pub fn volume_cm3(&self) -> Option<Decimal> {
        self.dimensions.as_ref().and_then(Dimensions::volume_cm3)
    }

    /// Returns the declared value, if any.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<Cents> {
        self.value
    }

    /// Returns the currency of the declared value, if any.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }

    /// Returns true if the package is a cylinder (tube).
    #[inline]
    #[must_use]
    pub const fn is_cylinder(&self) -> bool {
        self.cylinder
    }

    /// Returns true if the package is marked as a gift.
    #[inline]
    #[must_use]
    pub const fn is_gift(&self) -> bool {
        self.gift
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Package({}g", self.weight_grams)?;
        if let Some(d) = &self.dimensions {
            write!(f, " {}x{}x{}cm", d.length_cm, d.width_cm, d.height_cm)?;
        }
        write!(f, ")")
    }
}

/// Builder for constructing [`Package`] instances.
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    inner: Package,
}

impl PackageBuilder {
    fn new(weight_grams: u32) -> Self {
        Self {
            inner: Package {
                weight_grams,
                dimensions: None,
                value: None,
                currency: None,
                cylinder: false,
                gift: false,
            },
        }
    }

    /// Sets the outer dimensions.
    #[must_use]
    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.inner.dimensions = Some(dimensions);
        self
    }

    /// Sets the declared value and its currency.
    #[must_use]
    pub fn value(mut self, value: Cents, currency: CurrencyCode) -> Self {
        self.inner.value = Some(value);
        self.inner.currency = Some(currency);
        self
    }

    /// Marks the package as a cylinder.
    #[must_use]
    pub fn cylinder(mut self, cylinder: bool) -> Self {
        self.inner.cylinder = cylinder;
        self
    }

    /// Marks the package as a gift.
    #[must_use]
    pub fn gift(mut self, gift: bool) -> Self {
        self.inner.gift = gift;
        self
    }

    /// Builds the package.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPackage` if the weight is zero.
    pub fn build(self) -> DomainResult<Package> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
