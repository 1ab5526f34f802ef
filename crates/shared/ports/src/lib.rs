//! Meridian Ports
//!
//! Port definitions (traits) for the Meridian market-metadata layer.
//! These define the boundaries between the normalization core and the
//! infrastructure that feeds it (exchange connectors, clocks).

mod clock;
mod error;
mod market_data;

pub use clock::Clock;
pub use error::{FieldError, SourceError, SourceResult};
pub use market_data::{
    MarketDataSource, MarketDefinition, Markets, PrecisionMode, RawCurrencies, RawCurrency,
    parse_decimal,
};
