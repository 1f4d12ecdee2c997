//! # Location Value Object
//!
//! Origin or destination address of a shipment.
//!
//! # Examples
//!
//! ```
//! use shipping_rates::domain::value_objects::location::Location;
//!
//! let origin = Location::builder("us")
//!     .province("CA")
//!     .city("Beverly Hills")
//!     .postal_code("90210")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(origin.country(), "US");
//! assert_eq!(origin.postal_code(), Some("90210"));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

fn normalize_country(country: &str) -> String {
    country.trim().to_ascii_uppercase()
}

fn deserialize_country<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_country(&raw))
}

/// A postal location.
///
/// Only the country is required; carriers quote on as little as a
/// country and postal code.
///
/// # Invariants
///
/// - `country` is an ISO 3166-1 alpha-2 code in uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "deserialize_country")]
    country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    address_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl Location {
    /// Creates a builder for a location in `country`.
    #[must_use]
    pub fn builder(country: impl Into<String>) -> LocationBuilder {
        LocationBuilder::new(country.into())
    }

    /// Validates the location.
    ///
    /// Both the builder and deserialization uppercase the country, so
    /// this only rejects codes of the wrong length or alphabet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if the country is not a
    /// two-letter code in uppercase.
    pub fn validate(&self) -> DomainResult<()> {
        let valid = self.country.len() == 2
            && self.country.chars().all(|c| c.is_ascii_uppercase());
        if !valid {
            return Err(DomainError::InvalidLocation(format!(
                "country must be a two-letter ISO code, got '{}'",
                self.country
            )));
        }
        Ok(())
    }

    /// Returns the country code.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the postal code, if set.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Returns the province or state, if set.
    #[inline]
    #[must_use]
    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    /// Returns the city, if set.
    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the street address lines.
    #[inline]
    #[must_use]
    pub fn address_lines(&self) -> &[String] {
        &self.address_lines
    }

    /// Returns the contact name, if set.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the company name, if set.
    #[inline]
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Returns the phone number, if set.
    #[inline]
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.city(), self.province(), self.postal_code()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            write!(f, "{}", self.country)
        } else {
            write!(f, "{} {}", parts.join(", "), self.country)
        }
    }
}

/// Builder for constructing [`Location`] instances.
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    inner: Location,
}

impl LocationBuilder {
    fn new(country: String) -> Self {
        Self {
            inner: Location {
                country: normalize_country(&country),
                postal_code: None,
                province: None,
                city: None,
                address_lines: Vec::new(),
                name: None,
                company_name: None,
                phone: None,
            },
        }
    }

    /// Sets the postal code.
    #[must_use]
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.inner.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the province or state.
    #[must_use]
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.inner.province = Some(province.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.inner.city = Some(city.into());
        self
    }

    /// Appends a street address line.
    #[must_use]
    pub fn address_line(mut self, line: impl Into<String>) -> Self {
        self.inner.address_lines.push(line.into());
        self
    }

    /// Sets the contact name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.inner.company_name = Some(company_name.into());
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = Some(phone.into());
        self
    }

    /// Builds the location.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if the country is invalid.
    pub fn build(self) -> DomainResult<Location> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
