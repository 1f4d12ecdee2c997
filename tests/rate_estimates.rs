//! # Rate Estimate Integration Tests
//!
//! End-to-end checks through the public API: building estimates from typed
//! options and from JSON requests, then ranking them.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shipping_rates::application::dto::{RateEstimateRequest, RateEstimateSummary};
use shipping_rates::application::services::{
    CheapestFirst, FastestFirst, RankingKind, RateRankingStrategy,
};
use shipping_rates::domain::entities::{RateEstimate, RateEstimateOptions};
use shipping_rates::domain::errors::DomainError;
use shipping_rates::domain::value_objects::{
    Cents, CurrencyCode, Location, Package, Rounding, cents_from,
};

// ============================================================================
// Helpers
// ============================================================================

fn origin() -> Location {
    Location::builder("US")
        .city("Beverly Hills")
        .province("CA")
        .postal_code("90210")
        .build()
        .unwrap()
}

fn destination() -> Location {
    Location::builder("CA")
        .city("Ottawa")
        .province("ON")
        .postal_code("K1P 1J1")
        .build()
        .unwrap()
}

fn estimate(options: RateEstimateOptions) -> RateEstimate {
    RateEstimate::new(origin(), destination(), "USPS", "Priority Mail", options).unwrap()
}

fn parse(json: &str) -> Vec<RateEstimate> {
    let requests: Vec<RateEstimateRequest> = serde_json::from_str(json).unwrap();
    requests
        .into_iter()
        .map(|r| r.into_estimate(Rounding::default(), None).unwrap())
        .collect()
}

// ============================================================================
// Total Price
// ============================================================================

#[test]
fn sums_rates_when_no_total_is_stored() {
    let estimate = estimate(
        RateEstimateOptions::new()
            .package_rate(Package::new(500).unwrap(), Some("12.34"))
            .package_rate(Package::new(250).unwrap(), Some(Decimal::new(766, 2)))
            .package_rate(Package::new(100).unwrap(), Some(100)),
    );

    assert_eq!(estimate.total_price().unwrap(), Cents::new(2100));
    assert_eq!(estimate.price().unwrap(), Cents::new(2100));
}

#[test]
fn unrated_packages_fail_until_a_total_exists() {
    let p1 = Package::new(1000).unwrap();
    let p2 = Package::new(2000).unwrap();
    let mut estimate = estimate(RateEstimateOptions::new().packages([p1.clone(), p2]));

    assert!(matches!(
        estimate.total_price(),
        Err(DomainError::IncompleteRate(_))
    ));

    estimate.add(p1, Some(500)).unwrap();

    assert_eq!(estimate.package_count(), 3);
    assert!(matches!(
        estimate.total_price(),
        Err(DomainError::IncompleteRate(_))
    ));
}

#[test]
fn stored_total_wins_over_missing_rate() {
    let estimate = estimate(
        RateEstimateOptions::new()
            .total_price(1000)
            .package_rate(Package::new(1).unwrap(), Some(500))
            .package_rate(Package::new(2).unwrap(), None::<i64>),
    );

    assert_eq!(estimate.total_price().unwrap(), Cents::new(1000));
}

#[test]
fn money_normalization() {
    assert_eq!(
        cents_from(Some(Decimal::new(1234, 2))).unwrap(),
        Some(Cents::new(1234))
    );
    assert_eq!(cents_from(None::<i64>).unwrap(), None);
}

// ============================================================================
// Add
// ============================================================================

#[test]
fn add_without_rate_or_total_leaves_estimate_unchanged() {
    let mut estimate = estimate(
        RateEstimateOptions::new().package_rate(Package::new(10).unwrap(), Some(100)),
    );
    let before: Vec<Package> = estimate.packages().cloned().collect();

    let result = estimate.add(Package::new(20).unwrap(), None::<i64>);

    assert!(matches!(result, Err(DomainError::InvalidOperation(_))));
    assert_eq!(estimate.package_count(), 1);
    assert_eq!(estimate.packages().cloned().collect::<Vec<_>>(), before);
}

#[test]
fn add_chains() {
    let mut estimate = estimate(RateEstimateOptions::new());
    estimate
        .add(Package::new(1).unwrap(), Some(100))
        .unwrap()
        .add(Package::new(2).unwrap(), Some("2.50"))
        .unwrap();

    assert_eq!(estimate.package_count(), 2);
    assert_eq!(estimate.total_price().unwrap(), Cents::new(350));
}

// ============================================================================
// JSON Requests and Ranking
// ============================================================================

const QUOTES: &str = r#"[
    {
        "origin": { "country": "US", "postal_code": "90210" },
        "destination": { "country": "CA", "postal_code": "K1P 1J1" },
        "carrier": "UPS",
        "service_name": "Standard",
        "total_price": "24.10",
        "currency": "USD",
        "delivery_date": "2026-11-09T17:00:00Z"
    },
    {
        "origin": { "country": "US", "postal_code": "90210" },
        "destination": { "country": "CA", "postal_code": "K1P 1J1" },
        "carrier": "FedEx",
        "service_name": "International Priority",
        "package_rates": [
            { "package": { "weight_grams": 500 }, "rate": "30.00" },
            { "package": { "weight_grams": 900 }, "rate": 1250 }
        ],
        "currency": "USD",
        "delivery_date": "2026-11-04T17:00:00Z",
        "total_net_fedex_charge": "42.50"
    },
    {
        "origin": { "country": "US", "postal_code": "90210" },
        "destination": { "country": "CA", "postal_code": "K1P 1J1" },
        "carrier": "USPS",
        "service_name": "Priority Mail International",
        "packages": [{ "weight_grams": 500 }],
        "currency": "USD"
    }
]"#;

#[test]
fn cheapest_first_ranks_json_quotes() {
    let estimates = parse(QUOTES);
    let ranked = CheapestFirst::new().rank(&estimates);

    let order: Vec<&str> = ranked.iter().map(|r| r.estimate.carrier().as_str()).collect();
    assert_eq!(order, vec!["UPS", "FedEx"]);
    assert_eq!(ranked[0].price, Cents::new(2410));
    assert_eq!(ranked[1].price, Cents::new(4250));
}

#[test]
fn fastest_first_ranks_json_quotes() {
    let estimates = parse(QUOTES);
    let ranked = FastestFirst::new().rank(&estimates);

    let order: Vec<&str> = ranked.iter().map(|r| r.estimate.carrier().as_str()).collect();
    assert_eq!(order, vec!["FedEx", "UPS"]);
}

#[test]
fn summaries_serialize_to_json() {
    let estimates = parse(QUOTES);
    let ranked = RankingKind::Cheapest.strategy(None).rank(&estimates);
    let summaries: Vec<RateEstimateSummary> = ranked.iter().map(RateEstimateSummary::from).collect();

    let json = serde_json::to_value(&summaries).unwrap();

    assert_eq!(json[0]["carrier"], "UPS");
    assert_eq!(json[0]["rank"], 1);
    assert_eq!(json[0]["total_price"], 2410);
    assert_eq!(json[1]["package_count"], 2);
}

#[test]
fn mixed_currency_quotes_are_not_compared() {
    let json = QUOTES.replacen("\"currency\": \"USD\"", "\"currency\": \"JPY\"", 1);
    let estimates = parse(&json);

    let ranked = CheapestFirst::new().rank(&estimates);
    let order: Vec<&str> = ranked.iter().map(|r| r.estimate.carrier().as_str()).collect();
    assert_eq!(order, vec!["UPS"]);

    let usd = CurrencyCode::new("USD").unwrap();
    let ranked = RankingKind::Cheapest.strategy(Some(usd)).rank(&estimates);
    let order: Vec<&str> = ranked.iter().map(|r| r.estimate.carrier().as_str()).collect();
    assert_eq!(order, vec!["FedEx"]);
}

#[test]
fn lowercase_country_in_request_is_accepted() {
    let json = QUOTES.replace("\"country\": \"US\"", "\"country\": \"us\"");
    let estimates = parse(&json);
    assert_eq!(estimates[0].origin().country(), "US");
}

#[test]
fn fedex_alias_populates_net_carrier_charge() {
    let estimates = parse(QUOTES);
    assert_eq!(
        estimates[1].total_net_carrier_charge(),
        Some(Cents::new(4250))
    );
}

#[test]
fn invalid_amount_in_request_is_rejected() {
    let json = QUOTES.replace("\"24.10\"", "\"twenty\"");
    let requests: Vec<RateEstimateRequest> = serde_json::from_str(&json).unwrap();
    let first = requests.into_iter().next().unwrap();

    let result = first.into_estimate(Rounding::default(), None);

    assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
}
