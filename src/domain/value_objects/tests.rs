//! # Property-Based Tests for Domain Value Objects
//!
//! Property tests for money normalization and checked arithmetic.
//!
//! # Test Categories
//!
//! - **Normalization**: Major-unit and minor-unit inputs agree
//! - **Summation**: Checked sums match plain integer sums when in range
//! - **Validation**: Currency codes and packages reject malformed input

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use proptest::prelude::*;

use super::arithmetic::Rounding;
use super::currency::CurrencyCode;
use super::money::{Amount, Cents, cents_from};
use super::package::Package;
use rust_decimal::Decimal;

// ============================================================================
// Strategy Definitions
// ============================================================================

/// Minor-unit values well inside the `i64` range.
fn minor_units() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

fn rounding_mode() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::HalfAwayFromZero),
        Just(Rounding::HalfEven),
        Just(Rounding::TowardZero),
        Just(Rounding::AwayFromZero),
    ]
}

// ============================================================================
// Normalization Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A two-place major amount converts exactly, whatever the rounding.
    #[test]
    fn two_place_major_amount_is_exact(cents in minor_units(), rounding in rounding_mode()) {
        let major = Decimal::new(cents, 2);
        let result = Cents::from_amount_with(&Amount::from(major), rounding).unwrap();
        prop_assert_eq!(result, Cents::new(cents));
    }

    /// Integers are already minor units and pass through unchanged.
    #[test]
    fn integer_amount_is_identity(cents in any::<i64>()) {
        prop_assert_eq!(Cents::from_amount(&Amount::from(cents)).unwrap(), Cents::new(cents));
    }

    /// Text with a dot and the equivalent decimal normalize identically.
    #[test]
    fn decimal_text_matches_decimal(cents in minor_units()) {
        let major = Decimal::new(cents, 2);
        let from_text = Cents::from_amount(&Amount::from(major.to_string())).unwrap();
        let from_decimal = Cents::from_amount(&Amount::from(major)).unwrap();
        prop_assert_eq!(from_text, from_decimal);
    }

    /// Text without a dot is read as minor units.
    #[test]
    fn integer_text_is_minor_units(cents in minor_units()) {
        let result = Cents::from_amount(&Amount::from(cents.to_string())).unwrap();
        prop_assert_eq!(result, Cents::new(cents));
    }

    /// Converting to major units and back is lossless.
    #[test]
    fn to_major_roundtrip(cents in minor_units()) {
        let value = Cents::new(cents);
        let back = Cents::from_amount(&Amount::from(value.to_major())).unwrap();
        prop_assert_eq!(back, value);
    }

    /// Sub-cent amounts land within one cent of the exact value.
    #[test]
    fn rounding_stays_within_one_cent(
        thousandths in -1_000_000_000i64..1_000_000_000i64,
        rounding in rounding_mode()
    ) {
        let major = Decimal::new(thousandths, 3);
        let cents = Cents::from_amount_with(&Amount::from(major), rounding).unwrap();
        let exact = major * Decimal::ONE_HUNDRED;
        let diff = (Decimal::from(cents.get()) - exact).abs();
        prop_assert!(diff < Decimal::ONE);
    }

    /// Absent input always yields absent output.
    #[test]
    fn absent_stays_absent(_seed in any::<u8>()) {
        prop_assert_eq!(cents_from(None::<Amount>).unwrap(), None);
    }
}

// ============================================================================
// Summation Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Checked sum equals the integer sum for in-range values.
    #[test]
    fn checked_sum_matches_integer_sum(values in prop::collection::vec(minor_units(), 0..20)) {
        let expected: i64 = values.iter().sum();
        let total = Cents::checked_sum(values.iter().copied().map(Cents::new)).unwrap();
        prop_assert_eq!(total, Cents::new(expected));
    }

    /// Summation order does not change the result.
    #[test]
    fn checked_sum_is_order_independent(values in prop::collection::vec(minor_units(), 0..20)) {
        let forward = Cents::checked_sum(values.iter().copied().map(Cents::new));
        let backward = Cents::checked_sum(values.iter().rev().copied().map(Cents::new));
        prop_assert_eq!(forward, backward);
    }

    /// Addition then subtraction is the identity.
    #[test]
    fn add_sub_inverse(a in minor_units(), b in minor_units()) {
        let (a, b) = (Cents::new(a), Cents::new(b));
        prop_assert_eq!(a.safe_add(b).unwrap().safe_sub(b).unwrap(), a);
    }
}

// ============================================================================
// Validation Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any three ASCII letters form a code, normalized to uppercase.
    #[test]
    fn three_letters_are_a_currency(code in "[a-zA-Z]{3}") {
        let currency = CurrencyCode::new(&code).unwrap();
        prop_assert_eq!(currency.as_str(), code.to_ascii_uppercase());
    }

    /// Codes of any other length are rejected.
    #[test]
    fn other_lengths_are_rejected(code in "[A-Z]{4,8}") {
        prop_assert!(CurrencyCode::new(&code).is_err());
    }

    /// Every positive weight builds a package.
    #[test]
    fn positive_weight_builds(grams in 1u32..) {
        prop_assert_eq!(Package::new(grams).unwrap().weight_grams(), grams);
    }
}
