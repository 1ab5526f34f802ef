//! Currency definitions and the canonical currency catalog

mod catalog;
mod currency;

pub use catalog::CurrencyCatalog;
pub use currency::{Currency, CurrencyType, FIAT_CODES};
