//! Error types for the currency exchange

use thiserror::Error;

/// Main error type for registry and conversion operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("No exchange rate registered for {from}/{to}")]
    UnregisteredRatePair { from: String, to: String },

    #[error("Invalid exchange rate for {from}/{to}: {rate} (must be positive and finite)")]
    InvalidRate { from: String, to: String, rate: f64 },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown currency handle: {0}")]
    UnknownCurrencyId(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exchange operations
pub type Result<T> = std::result::Result<T, ExchangeError>;
