//! Error types for the instruments crate

use meridian_core::Venue;
use meridian_ports::{PrecisionMode, SourceError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while normalizing venue metadata
///
/// Every variant aborts the load in progress.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Precision mode {mode} is not supported (venue {venue})")]
    UnsupportedPrecisionMode { venue: Venue, mode: PrecisionMode },

    #[error("Currency {code} not found in catalog or venue currencies")]
    MissingCurrency { code: String },

    #[error("Malformed market definition for {symbol}: field `{field}`")]
    MalformedMarketDefinition { symbol: String, field: String },

    #[error("Malformed currency definition for {code}: field `{field}`")]
    MalformedCurrencyDefinition { code: String, field: String },

    #[error("Invalid precision value: {value}")]
    InvalidPrecision { value: Decimal },

    #[error("Invalid provider configuration: {0}")]
    Config(String),

    #[error("Market data source error: {0}")]
    Source(#[from] SourceError),
}

impl ProviderError {
    pub(crate) fn malformed(symbol: &str, field: &str) -> Self {
        ProviderError::MalformedMarketDefinition {
            symbol: symbol.to_string(),
            field: field.to_string(),
        }
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
