//! In-memory market data source
//!
//! The source and its handle share the data the next reload will return, so
//! a test can change the venue's listing between loads while the provider
//! owns the source.

use async_trait::async_trait;
use log::debug;
use meridian_ports::{
    MarketDataSource, MarketDefinition, Markets, PrecisionMode, RawCurrencies, RawCurrency,
    SourceError, SourceResult,
};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Listing {
    markets: Markets,
    currencies: RawCurrencies,
    fail_next: Option<SourceError>,
    reloads: usize,
}

/// Programmable `MarketDataSource`
pub struct InMemoryMarketSource {
    name: String,
    mode: PrecisionMode,
    currencies: RawCurrencies,
    listing: Arc<Mutex<Listing>>,
}

/// Controls what an `InMemoryMarketSource` returns on its next reload
#[derive(Clone)]
pub struct MarketSourceHandle {
    listing: Arc<Mutex<Listing>>,
}

impl InMemoryMarketSource {
    /// Create a source and the handle that feeds it
    pub fn new(name: impl Into<String>, mode: PrecisionMode) -> (Self, MarketSourceHandle) {
        let listing = Arc::new(Mutex::new(Listing::default()));
        let source = Self {
            name: name.into(),
            mode,
            currencies: RawCurrencies::new(),
            listing: listing.clone(),
        };
        (source, MarketSourceHandle { listing })
    }

    fn refresh(&mut self) -> SourceResult<Markets> {
        let mut listing = lock(&self.listing);
        listing.reloads += 1;
        if let Some(err) = listing.fail_next.take() {
            return Err(err);
        }
        self.currencies = listing.currencies.clone();
        debug!(
            "{} reload #{}: {} markets, {} currencies",
            self.name,
            listing.reloads,
            listing.markets.len(),
            listing.currencies.len()
        );
        Ok(listing.markets.clone())
    }
}

#[async_trait]
impl MarketDataSource for InMemoryMarketSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn precision_mode(&self) -> PrecisionMode {
        self.mode
    }

    fn currencies(&self) -> &RawCurrencies {
        &self.currencies
    }

    fn reload_markets(&mut self) -> SourceResult<Markets> {
        self.refresh()
    }

    async fn reload_markets_async(&mut self) -> SourceResult<Markets> {
        tokio::task::yield_now().await;
        self.refresh()
    }
}

impl MarketSourceHandle {
    pub fn set_markets(&self, markets: Markets) {
        lock(&self.listing).markets = markets;
    }

    pub fn insert_market(&self, code: impl Into<String>, market: MarketDefinition) {
        lock(&self.listing).markets.insert(code.into(), market);
    }

    pub fn remove_market(&self, code: &str) -> Option<MarketDefinition> {
        lock(&self.listing).markets.remove(code)
    }

    pub fn set_currencies(&self, currencies: RawCurrencies) {
        lock(&self.listing).currencies = currencies;
    }

    pub fn insert_currency(&self, code: impl Into<String>, currency: RawCurrency) {
        lock(&self.listing).currencies.insert(code.into(), currency);
    }

    /// Make the next reload fail with `error`
    pub fn fail_next_reload(&self, error: SourceError) {
        lock(&self.listing).fail_next = Some(error);
    }

    /// Number of reloads attempted so far, failed ones included
    pub fn reload_count(&self) -> usize {
        lock(&self.listing).reloads
    }
}

fn lock(listing: &Mutex<Listing>) -> MutexGuard<'_, Listing> {
    listing
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
