//! Integration tests for the exchange registry
//!
//! Tests registry, rate table and configuration working together

use approx::assert_relative_eq;
use currency_exchange::prelude::*;

fn demo_exchange() -> (Exchange, CurrencyId) {
    let mut exchange = Exchange::new();

    exchange.add_currency(Currency::new("USD", 1.0));
    let rub = exchange.add_currency(Currency::new("RUB", 75.0));
    exchange.add_currency(Currency::new("CNY", 7.0));
    exchange.add_currency(Currency::new("BTC", 50000.0));
    exchange.add_currency(Currency::new("ETH", 3000.0));

    exchange.set_exchange_rate("RUB", "CNY", 0.093).unwrap();
    exchange.set_exchange_rate("BTC", "USD", 50000.0).unwrap();
    exchange.set_exchange_rate("ETH", "USD", 3000.0).unwrap();

    (exchange, rub)
}

#[test]
fn test_demo_scenario() {
    let (mut exchange, rub) = demo_exchange();

    exchange.update_rate(rub, 80.0).unwrap();

    assert_relative_eq!(exchange.convert(1000.0, "RUB", "CNY").unwrap(), 93.0, epsilon = 1e-9);
    assert_eq!(exchange.convert(1.0, "BTC", "USD").unwrap(), 50000.0);
    assert_eq!(exchange.convert(2.0, "ETH", "USD").unwrap(), 6000.0);

    let rub = exchange.currency("RUB").unwrap();
    assert_eq!(rub.current_rate(), 80.0);
    assert_eq!(rub.history(), &[75.0, 80.0]);
}

#[test]
fn test_sample_config_matches_manual_setup() {
    let (mut manual, rub) = demo_exchange();
    manual.update_rate(rub, 80.0).unwrap();
    let built = ExchangeConfig::sample().build().unwrap();

    let manual_pairs: Vec<(String, f64)> = manual
        .pairs()
        .into_iter()
        .map(|(p, r)| (p.to_string(), r))
        .collect();
    let built_pairs: Vec<(String, f64)> = built
        .pairs()
        .into_iter()
        .map(|(p, r)| (p.to_string(), r))
        .collect();
    assert_eq!(manual_pairs, built_pairs);

    let manual_codes: Vec<&Currency> = manual.currencies().collect();
    let built_codes: Vec<&Currency> = built.currencies().collect();
    assert_eq!(manual_codes, built_codes);
}

#[test]
fn test_rate_update_leaves_rate_table_alone() {
    let (mut exchange, _) = demo_exchange();
    let before = exchange.rate("RUB", "CNY");

    exchange.update_rate_by_code("RUB", 80.0).unwrap();
    exchange.update_rate_by_code("CNY", 7.3).unwrap();

    assert_eq!(exchange.rate("RUB", "CNY"), before);
}

#[test]
fn test_replacing_currency_with_live_handle() {
    let (mut exchange, old_rub) = demo_exchange();
    let new_rub = exchange.add_currency(Currency::new("RUB", 95.0));

    exchange.update_rate(old_rub, 81.0).unwrap();

    assert_eq!(exchange.id_of("RUB"), Some(new_rub));
    assert_eq!(exchange.currency("RUB").unwrap().history(), &[95.0]);
    assert_eq!(exchange.len(), 5);
}

#[test]
fn test_failed_conversion_reports_pair() {
    let (exchange, _) = demo_exchange();

    match exchange.convert(100.0, "CNY", "USD") {
        Err(ExchangeError::UnregisteredRatePair { from, to }) => {
            assert_eq!(from, "CNY");
            assert_eq!(to, "USD");
        }
        other => panic!("expected UnregisteredRatePair, got {:?}", other),
    }
}

#[test]
fn test_portfolio_value() {
    let (exchange, _) = demo_exchange();

    let holdings = [(0.5, "BTC"), (3.0, "ETH")];
    let total = exchange.total_value(&holdings, "USD").unwrap();
    assert_eq!(total, 34000.0);
}

#[test]
fn test_currencies_serialize() {
    let (exchange, _) = demo_exchange();
    let btc = exchange.currency("BTC").unwrap();

    let json = serde_json::to_value(btc).unwrap();
    assert_eq!(json["name"], "BTC");
    assert_eq!(json["rate"], 50000.0);
    assert_eq!(json["history"], serde_json::json!([50000.0]));
}
