//! Currency with a mutable current rate and its rate history

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named currency quoted against an implicit base unit.
///
/// `history` always starts with the initial rate and its last element is
/// the current rate.
///
/// # Example
/// ```
/// use currency_exchange::currency::Currency;
///
/// let mut rub = Currency::new("RUB", 75.0);
/// rub.update_rate(80.0);
///
/// assert_eq!(rub.current_rate(), 80.0);
/// assert_eq!(rub.history(), &[75.0, 80.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code, e.g. "USD"
    name: String,
    /// Current rate relative to the base unit
    rate: f64,
    /// Every rate this currency has had, oldest first
    history: Vec<f64>,
}

impl Currency {
    /// Create a currency seeded with its initial rate
    pub fn new(name: impl Into<String>, initial_rate: f64) -> Self {
        Self {
            name: name.into(),
            rate: initial_rate,
            history: vec![initial_rate],
        }
    }

    /// Currency code
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a new current rate and record it in the history
    pub fn update_rate(&mut self, new_rate: f64) {
        self.rate = new_rate;
        self.history.push(new_rate);
    }

    /// Current rate relative to the base unit
    pub fn current_rate(&self) -> f64 {
        self.rate
    }

    /// All recorded rates, oldest first
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Rate before the latest update
    pub fn previous_rate(&self) -> Option<f64> {
        let n = self.history.len();
        if n < 2 {
            return None;
        }
        Some(self.history[n - 2])
    }

    /// Relative change introduced by the latest update
    pub fn change(&self) -> Option<f64> {
        match self.previous_rate() {
            Some(prev) if prev != 0.0 => Some((self.rate - prev) / prev),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.rate)
    }
}
