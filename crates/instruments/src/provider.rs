//! Instrument provider - refreshes the cache from a market data source
//!
//! A load fetches every market from the source (forcing a fresh fetch),
//! resolves the venue currencies, builds one `Instrument` per market and
//! upserts it into the cache.
//!
//! ```text
//! MarketDataSource ──reload──▶ resolve_currencies ──▶ InstrumentBuilder ──upsert──▶ InstrumentCache
//! ```
//!
//! Both load entry points take `&mut self`, so a provider can never run two
//! loads at once, nor serve reads while one is in flight.

use log::{debug, error, info};
use meridian_clock::SystemClock;
use meridian_core::{Currency, CurrencyCatalog, Instrument, Symbol, Venue};
use meridian_ports::{Clock, MarketDataSource, Markets, PrecisionMode};
use std::collections::HashMap;
use std::sync::Arc;

use crate::builder::InstrumentBuilder;
use crate::cache::InstrumentCache;
use crate::config::ProviderConfig;
use crate::currency::resolve_currencies;
use crate::error::ProviderResult;

/// Canonical instruments and currencies for one venue
pub struct InstrumentProvider {
    source: Box<dyn MarketDataSource>,
    venue: Venue,
    clock: Arc<dyn Clock>,
    catalog: CurrencyCatalog,
    config: ProviderConfig,
    cache: InstrumentCache,
    count: usize,
}

impl InstrumentProvider {
    /// Provider with the wall clock, the builtin currency catalog and default config
    pub fn new(source: Box<dyn MarketDataSource>) -> Self {
        Self::with_config(
            source,
            Arc::new(SystemClock::new()),
            CurrencyCatalog::builtin(),
            ProviderConfig::default(),
        )
    }

    pub fn with_config(
        source: Box<dyn MarketDataSource>,
        clock: Arc<dyn Clock>,
        catalog: CurrencyCatalog,
        config: ProviderConfig,
    ) -> Self {
        let venue = Venue::new(source.name());
        debug!(
            "Instrument provider for {} using {} ({} catalog currencies)",
            venue,
            clock.name(),
            catalog.len()
        );
        Self {
            source,
            cache: InstrumentCache::new(venue.clone()),
            venue,
            clock,
            catalog,
            config,
            count: 0,
        }
    }

    /// Reload every market, blocking the current thread during the fetch
    pub fn load_all(&mut self) -> ProviderResult<()> {
        let markets = self.source.reload_markets().inspect_err(|e| {
            error!("Failed to reload markets for {}: {}", self.venue, e);
        })?;
        self.apply(markets)
    }

    /// Reload every market; suspends only while fetching
    pub async fn load_all_async(&mut self) -> ProviderResult<()> {
        let markets = self.source.reload_markets_async().await.inspect_err(|e| {
            error!("Failed to reload markets for {}: {}", self.venue, e);
        })?;
        self.apply(markets)
    }

    fn apply(&mut self, markets: Markets) -> ProviderResult<()> {
        let mode = self.source.precision_mode();
        let currencies = resolve_currencies(self.source.currencies(), mode, &self.venue)
            .inspect_err(|e| error!("Failed to resolve currencies for {}: {}", self.venue, e))?;

        let builder = InstrumentBuilder::new(&self.venue, mode, &self.catalog, self.clock.as_ref())
            .with_default_size_precision(self.config.default_size_precision);
        let log_overwrites = self.config.log_overwrites;

        if self.config.atomic_reload {
            let mut staged = self.cache.clone();
            populate(&mut staged, &builder, currencies, &markets, log_overwrites)?;
            self.cache = staged;
        } else {
            populate(&mut self.cache, &builder, currencies, &markets, log_overwrites)?;
        }

        self.count = self.cache.len();
        info!(
            "Loaded {} markets for {}: {} instruments, {} currencies cached",
            markets.len(),
            self.venue,
            self.count,
            self.cache.currencies_ref().len()
        );
        Ok(())
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn precision_mode(&self) -> PrecisionMode {
        self.source.precision_mode()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Instrument count as of the last successful load
    ///
    /// A failed non-atomic load can leave the cache holding more entries
    /// than this.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, code: &str) -> Option<&Instrument> {
        self.cache.get(code)
    }

    pub fn find(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.cache.find(symbol)
    }

    /// Copy of every cached instrument
    pub fn get_all(&self) -> HashMap<String, Instrument> {
        self.cache.get_all()
    }

    /// Borrow the instrument map without copying
    pub fn get_all_ref(&self) -> &HashMap<String, Instrument> {
        self.cache.get_all_ref()
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.cache.currency(code)
    }

    pub fn currencies(&self) -> HashMap<String, Currency> {
        self.cache.currencies()
    }

    pub fn cache(&self) -> &InstrumentCache {
        &self.cache
    }
}

fn populate(
    cache: &mut InstrumentCache,
    builder: &InstrumentBuilder<'_>,
    currencies: HashMap<String, Currency>,
    markets: &Markets,
    log_overwrites: bool,
) -> ProviderResult<()> {
    cache.merge_currencies(currencies);

    for (code, market) in markets {
        let instrument = builder
            .build(code, market, cache.currencies_ref())
            .inspect_err(|e| error!("Failed to parse market {} on {}: {}", code, cache.venue(), e))?;

        match cache.upsert(instrument) {
            Some(previous) if log_overwrites => {
                debug!("Replaced {} parsed at {}", code, previous.timestamp)
            }
            Some(_) => {}
            None => debug!("Added {}", code),
        }
    }
    Ok(())
}
