//! Canonical instrument definitions
//!
//! This module provides the venue-scoped identity of a tradable contract and
//! the normalized record downstream components price, size and charge fees
//! against:
//! - `Venue` / `Symbol` (BTC/USDT on BINANCE)
//! - `AssetClass` / `AssetType` classification
//! - `Instrument`, the precision-correct contract record
//! - `InstrumentSpec`, tick/lot validation and rounding helpers

mod asset;
mod instrument;
mod spec;
mod symbol;

pub use asset::{AssetClass, AssetType};
pub use instrument::Instrument;
pub use spec::InstrumentSpec;
pub use symbol::{Symbol, Venue};
