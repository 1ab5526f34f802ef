//! Venue-scoped instrument and currency storage

use meridian_core::{Currency, Instrument, Symbol, Venue};
use std::collections::HashMap;

/// Symbol code → `Instrument` and currency code → `Currency` for one venue
///
/// Entries are only ever inserted or overwritten; nothing is evicted when a
/// venue stops listing a market.
#[derive(Debug, Clone)]
pub struct InstrumentCache {
    venue: Venue,
    instruments: HashMap<String, Instrument>,
    currencies: HashMap<String, Currency>,
}

impl InstrumentCache {
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            instruments: HashMap::new(),
            currencies: HashMap::new(),
        }
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Instrument by exact symbol code
    pub fn get(&self, code: &str) -> Option<&Instrument> {
        self.instruments.get(code)
    }

    /// Instrument by full symbol; `None` if the symbol belongs to another venue
    pub fn find(&self, symbol: &Symbol) -> Option<&Instrument> {
        if symbol.venue() != &self.venue {
            return None;
        }
        self.get(symbol.code())
    }

    /// Copy of every cached instrument; changes to it never reach the cache
    pub fn get_all(&self) -> HashMap<String, Instrument> {
        self.instruments.clone()
    }

    /// Borrow the instrument map without copying
    ///
    /// For hot paths that only read. Prefer `get_all` everywhere else.
    pub fn get_all_ref(&self) -> &HashMap<String, Instrument> {
        &self.instruments
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    /// Copy of every cached currency
    pub fn currencies(&self) -> HashMap<String, Currency> {
        self.currencies.clone()
    }

    pub(crate) fn currencies_ref(&self) -> &HashMap<String, Currency> {
        &self.currencies
    }

    /// Number of cached instruments
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Insert or replace an instrument, returning the one it replaced
    pub(crate) fn upsert(&mut self, instrument: Instrument) -> Option<Instrument> {
        self.instruments
            .insert(instrument.code().to_string(), instrument)
    }

    /// Overwrite currencies by code; codes not in `currencies` are left alone
    pub(crate) fn merge_currencies(&mut self, currencies: HashMap<String, Currency>) {
        self.currencies.extend(currencies);
    }
}
