//! # currency_exchange
//!
//! An in-memory registry of named currencies and explicitly registered
//! pairwise exchange rates.
//!
//! Each [`Currency`](currency::Currency) carries its current rate against an
//! implicit base unit together with the full history of that rate. The
//! [`Exchange`](exchange::Exchange) owns registered currencies and a table of
//! directed rates; setting a rate for `A -> B` always records the reciprocal
//! for `B -> A`. Conversion only uses the exact registered pair.
//!
//! ## Example
//!
//! ```rust
//! use currency_exchange::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut exchange = Exchange::new();
//! exchange.add_currency(Currency::new("BTC", 50000.0));
//! exchange.add_currency(Currency::new("USD", 1.0));
//!
//! exchange.set_exchange_rate("BTC", "USD", 50000.0)?;
//!
//! assert_eq!(exchange.convert(1.0, "BTC", "USD")?, 50000.0);
//! assert!((exchange.convert(25000.0, "USD", "BTC")? - 0.5).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod pair;

pub mod prelude {
    //! Commonly used types
    pub use crate::config::ExchangeConfig;
    pub use crate::currency::Currency;
    pub use crate::error::{ExchangeError, Result};
    pub use crate::exchange::{CurrencyId, Exchange};
    pub use crate::pair::CurrencyPair;
}
