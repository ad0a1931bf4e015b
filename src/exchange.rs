//! Currency registry and pairwise conversion
//!
//! The exchange owns every registered [`Currency`] in an arena and hands out
//! [`CurrencyId`] handles. Exchange rates live in a separate table keyed by
//! directed [`CurrencyPair`]; every write stores both directions so the table
//! never holds a stale reciprocal.

use crate::currency::Currency;
use crate::error::{ExchangeError, Result};
use crate::pair::CurrencyPair;
use hashbrown::HashMap;

/// Handle to a currency stored in an [`Exchange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyId(usize);

impl CurrencyId {
    /// Arena slot index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Currency registry with a reciprocal exchange rate table
///
/// # Example
/// ```
/// use currency_exchange::currency::Currency;
/// use currency_exchange::exchange::Exchange;
///
/// let mut exchange = Exchange::new();
/// exchange.add_currency(Currency::new("RUB", 75.0));
/// exchange.add_currency(Currency::new("CNY", 7.0));
///
/// exchange.set_exchange_rate("RUB", "CNY", 0.093).unwrap();
///
/// let cny = exchange.convert(1000.0, "RUB", "CNY").unwrap();
/// assert!((cny - 93.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    /// Arena of every currency ever registered
    currencies: Vec<Currency>,
    /// Code -> arena slot of the latest registration
    index: HashMap<String, CurrencyId>,
    /// (from, to) -> rate, with amount_from * rate == amount_to
    exchange_rates: HashMap<CurrencyPair, f64>,
}

impl Exchange {
    /// Create an empty exchange
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a currency, replacing any previous entry with the same code
    ///
    /// Handles to a replaced entry keep addressing the old currency, which is
    /// no longer reachable by code. Replaced slots are never freed, so the
    /// arena grows by one slot per registration.
    pub fn add_currency(&mut self, currency: Currency) -> CurrencyId {
        let id = CurrencyId(self.currencies.len());
        let code = currency.name().to_string();

        log::debug!("Registering currency {} at rate {}", code, currency.current_rate());
        self.currencies.push(currency);

        if let Some(old) = self.index.insert(code.clone(), id) {
            log::warn!("Currency {} re-registered, replacing handle {}", code, old.0);
        }

        id
    }

    /// Look up a registered currency by code
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.index.get(code).and_then(|id| self.currencies.get(id.0))
    }

    /// Look up a currency by handle
    pub fn currency_by_id(&self, id: CurrencyId) -> Option<&Currency> {
        self.currencies.get(id.0)
    }

    /// Handle of the currency currently registered under `code`
    pub fn id_of(&self, code: &str) -> Option<CurrencyId> {
        self.index.get(code).copied()
    }

    /// Registered currencies, sorted by code
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        let mut ids: Vec<(&String, &CurrencyId)> = self.index.iter().collect();
        ids.sort_by(|a, b| a.0.cmp(b.0));
        ids.into_iter().map(move |(_, id)| &self.currencies[id.0])
    }

    /// Number of codes currently registered
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Update the standalone rate of a registered currency
    ///
    /// Does not touch the pairwise rate table.
    pub fn update_rate(&mut self, id: CurrencyId, new_rate: f64) -> Result<()> {
        let currency = self
            .currencies
            .get_mut(id.0)
            .ok_or(ExchangeError::UnknownCurrencyId(id.0))?;

        log::debug!(
            "Updating {} rate {} -> {}",
            currency.name(),
            currency.current_rate(),
            new_rate
        );
        currency.update_rate(new_rate);
        Ok(())
    }

    /// Update the standalone rate of the currency registered under `code`
    pub fn update_rate_by_code(&mut self, code: &str, new_rate: f64) -> Result<()> {
        let id = self
            .id_of(code)
            .ok_or_else(|| ExchangeError::UnknownCurrency(code.to_string()))?;
        self.update_rate(id, new_rate)
    }

    /// Set the rate for `from -> to` and its reciprocal for `to -> from`
    ///
    /// The rate and its reciprocal must be positive and finite. Codes are not
    /// required to be registered currencies. For `from == to` both writes hit
    /// one key and the reciprocal is stored.
    pub fn set_exchange_rate(&mut self, from: &str, to: &str, rate: f64) -> Result<()> {
        let inverse = 1.0 / rate;
        if !rate.is_finite() || rate <= 0.0 || !inverse.is_finite() {
            return Err(ExchangeError::InvalidRate {
                from: from.to_string(),
                to: to.to_string(),
                rate,
            });
        }

        let pair = CurrencyPair::new(from, to);
        log::debug!("Setting exchange rate {} = {}", pair, rate);

        self.exchange_rates.insert(pair.clone(), rate);
        self.exchange_rates.insert(pair.inverse(), inverse);
        Ok(())
    }

    /// Registered rate for the exact directed pair
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.exchange_rates.get(&CurrencyPair::new(from, to)).copied()
    }

    /// Check if a rate is registered for the exact directed pair
    pub fn has_rate(&self, from: &str, to: &str) -> bool {
        self.rate(from, to).is_some()
    }

    /// Number of directed entries in the rate table
    pub fn num_pairs(&self) -> usize {
        self.exchange_rates.len()
    }

    /// All directed rates, sorted by pair
    pub fn pairs(&self) -> Vec<(&CurrencyPair, f64)> {
        let mut pairs: Vec<(&CurrencyPair, f64)> =
            self.exchange_rates.iter().map(|(p, r)| (p, *r)).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Convert `amount` from one currency to another
    ///
    /// Only the exact directed pair is consulted: no reverse lookup, no
    /// multi-hop path, and identical codes are not special-cased.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        match self.rate(from, to) {
            Some(rate) => Ok(amount * rate),
            None => Err(ExchangeError::UnregisteredRatePair {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Convert several amounts into one target currency
    pub fn convert_all(&self, amounts: &[(f64, &str)], to: &str) -> Result<Vec<f64>> {
        amounts
            .iter()
            .map(|(amount, from)| self.convert(*amount, from, to))
            .collect()
    }

    /// Sum of several amounts expressed in one target currency
    pub fn total_value(&self, amounts: &[(f64, &str)], to: &str) -> Result<f64> {
        Ok(self.convert_all(amounts, to)?.iter().sum())
    }
}
