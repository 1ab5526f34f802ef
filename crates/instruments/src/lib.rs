//! Meridian Instruments
//!
//! Normalization layer between venue market metadata and the rest of the
//! trading system. Provides:
//! - Precision resolution for decimal-place and tick-size conventions
//! - Currency resolution (canonical catalog first, venue listing second)
//! - Instrument construction with precision-correct bounds
//! - A venue-scoped cache and the provider that refreshes it
//!
//! ## Architecture
//!
//! ```text
//! Venue connector (MarketDataSource)
//!         │ reload_markets / reload_markets_async
//!    ┌────▼─────────────┐
//!    │InstrumentProvider│──▶ resolve_currencies ──▶ InstrumentBuilder
//!    └────┬─────────────┘
//!         │ upsert
//!    ┌────▼──────────┐
//!    │InstrumentCache│◀── get / get_all / currency
//!    └───────────────┘
//! ```

pub mod adapters;
pub mod builder;
pub mod cache;
pub mod config;
pub mod currency;
pub mod error;
pub mod precision;
pub mod provider;

// Re-export commonly used types
pub use adapters::{InMemoryMarketSource, JsonMarketSource, MarketSourceHandle};
pub use builder::InstrumentBuilder;
pub use cache::InstrumentCache;
pub use config::ProviderConfig;
pub use currency::resolve_currencies;
pub use error::{ProviderError, ProviderResult};
pub use precision::resolve_precision;
pub use provider::InstrumentProvider;
