//! TOML description of a registry: currencies, pairwise rates and updates
//!
//! ```toml
//! [[currencies]]
//! name = "RUB"
//! rate = 75.0
//!
//! [[rates]]
//! from = "RUB"
//! to = "CNY"
//! rate = 0.093
//!
//! [[updates]]
//! name = "RUB"
//! rate = 80.0
//! ```

use crate::currency::Currency;
use crate::error::{ExchangeError, Result};
use crate::exchange::Exchange;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

/// Standalone rate update applied after registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateUpdate {
    pub name: String,
    pub rate: f64,
}

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    #[serde(default)]
    pub updates: Vec<RateUpdate>,
}

impl ExchangeConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ExchangeError::Config(e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Built-in sample data set
    pub fn sample() -> Self {
        let currency = |name: &str, rate| CurrencyConfig {
            name: name.to_string(),
            rate,
        };
        let pair = |from: &str, to: &str, rate| RateConfig {
            from: from.to_string(),
            to: to.to_string(),
            rate,
        };

        Self {
            currencies: vec![
                currency("USD", 1.0),
                currency("RUB", 75.0),
                currency("CNY", 7.0),
                currency("BTC", 50000.0),
                currency("ETH", 3000.0),
            ],
            rates: vec![
                pair("RUB", "CNY", 0.093),
                pair("BTC", "USD", 50000.0),
                pair("ETH", "USD", 3000.0),
            ],
            updates: vec![RateUpdate {
                name: "RUB".to_string(),
                rate: 80.0,
            }],
        }
    }

    /// Build a populated exchange: currencies, then rates, then updates
    pub fn build(&self) -> Result<Exchange> {
        let mut exchange = Exchange::new();

        for c in &self.currencies {
            exchange.add_currency(Currency::new(c.name.clone(), c.rate));
        }
        for r in &self.rates {
            exchange.set_exchange_rate(&r.from, &r.to, r.rate)?;
        }
        for u in &self.updates {
            exchange.update_rate_by_code(&u.name, u.rate)?;
        }

        log::debug!(
            "Built exchange with {} currencies and {} directed rates",
            exchange.len(),
            exchange.num_pairs()
        );
        Ok(exchange)
    }
}
