//! Meridian Core Domain
//!
//! Pure domain types for the Meridian market-metadata layer.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod currencies;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use currencies::{Currency, CurrencyCatalog, CurrencyType, FIAT_CODES};
pub use instruments::{AssetClass, AssetType, Instrument, InstrumentSpec, Symbol, Venue};
pub use values::{MAX_PRECISION, Money, Price, Quantity, Timestamp, ValueError};
