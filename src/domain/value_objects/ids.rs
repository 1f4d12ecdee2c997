//! # Identity Value Objects
//!
//! String-based identifiers for carriers and their services.
//!
//! - [`CarrierName`] - the quoting provider (`USPS`, `FedEx`, ...)
//! - [`ServiceCode`] - the carrier's machine identifier for a service level

use serde::{Deserialize, Serialize};
use std::fmt;

/// Carrier identifier.
///
/// The name of the provider that issued a quote.
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::value_objects::ids::CarrierName;
///
/// let carrier = CarrierName::new("USPS");
/// assert_eq!(carrier.as_str(), "USPS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierName(String);

impl CarrierName {
    /// Creates a carrier name from a string.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the carrier name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CarrierName and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CarrierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CarrierName {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CarrierName {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for CarrierName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Carrier service code.
///
/// The machine identifier a carrier uses for a service level, as opposed
/// to the human-readable service name.
///
/// # Examples
///
/// ```
/// use shipping_rates::domain::value_objects::ids::ServiceCode;
///
/// let code = ServiceCode::new("PRIORITY_OVERNIGHT");
/// assert_eq!(code.to_string(), "PRIORITY_OVERNIGHT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCode(String);

impl ServiceCode {
    /// Creates a service code from a string.
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the service code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ServiceCode {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceCode {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for ServiceCode {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn carrier_name_conversions() {
        let from_str: CarrierName = "FedEx".into();
        let from_string: CarrierName = String::from("FedEx").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.into_inner(), "FedEx");
    }

    #[test]
    fn carrier_name_serializes_transparently() {
        let json = serde_json::to_string(&CarrierName::new("UPS")).unwrap();
        assert_eq!(json, "\"UPS\"");
    }

    #[test]
    fn service_code_display() {
        assert_eq!(ServiceCode::new("01").to_string(), "01");
    }
}
