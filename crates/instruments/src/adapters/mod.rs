//! Market data sources
//!
//! - `memory`: programmable in-process source (tests, replay)
//! - `json`: snapshot file of a venue's currencies and markets

pub mod json;
pub mod memory;

pub use json::JsonMarketSource;
pub use memory::{InMemoryMarketSource, MarketSourceHandle};
