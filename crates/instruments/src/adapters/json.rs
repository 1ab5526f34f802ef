//! Snapshot-file market data source
//!
//! Reads a JSON document of the form
//!
//! ```json
//! {
//!   "name": "binance",
//!   "precision_mode": "TICK_SIZE",
//!   "currencies": {"BTC": {"precision": 0.00000001}},
//!   "markets": {"BTC/USDT": {"precision": {...}, "limits": {...}, "quote": "USDT"}}
//! }
//! ```
//!
//! Every reload re-reads the file.

use async_trait::async_trait;
use log::{debug, warn};
use meridian_ports::{
    MarketDataSource, Markets, PrecisionMode, RawCurrencies, SourceError, SourceResult,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Snapshot {
    name: String,
    precision_mode: PrecisionMode,
    #[serde(default)]
    currencies: RawCurrencies,
    #[serde(default)]
    markets: Markets,
}

/// `MarketDataSource` backed by a snapshot file on disk
#[derive(Debug)]
pub struct JsonMarketSource {
    path: PathBuf,
    name: String,
    mode: PrecisionMode,
    currencies: RawCurrencies,
}

impl JsonMarketSource {
    /// Open a snapshot, reading it once for the venue name and precision mode
    ///
    /// Currencies stay empty until the first reload.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = parse(&std::fs::read_to_string(&path)?)?;
        debug!("Opened snapshot {} for {}", path.display(), snapshot.name);
        Ok(Self {
            path,
            name: snapshot.name,
            mode: snapshot.precision_mode,
            currencies: RawCurrencies::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn accept(&mut self, snapshot: Snapshot) -> Markets {
        if snapshot.name != self.name {
            warn!(
                "Snapshot {} now names venue {}; keeping {}",
                self.path.display(),
                snapshot.name,
                self.name
            );
        }
        self.mode = snapshot.precision_mode;
        self.currencies = snapshot.currencies;
        snapshot.markets
    }
}

fn parse(contents: &str) -> SourceResult<Snapshot> {
    serde_json::from_str(contents).map_err(SourceError::from)
}

#[async_trait]
impl MarketDataSource for JsonMarketSource {
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
        let snapshot = parse(&std::fs::read_to_string(&self.path)?)?;
        Ok(self.accept(snapshot))
    }

    async fn reload_markets_async(&mut self) -> SourceResult<Markets> {
        let snapshot = parse(&tokio::fs::read_to_string(&self.path).await?)?;
        Ok(self.accept(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write_snapshot(dir: &tempfile::TempDir, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join("markets.json");
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_open_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(
            &dir,
            json!({
                "name": "kraken",
                "precision_mode": "DECIMAL_PLACES",
                "currencies": {"USD": {"precision": 2}},
                "markets": {"BTC/USD": {"quote": "USD"}}
            }),
        );

        let mut source = JsonMarketSource::open(&path).unwrap();
        assert_eq!(source.name(), "kraken");
        assert_eq!(source.precision_mode(), PrecisionMode::DecimalPlaces);
        assert!(source.currencies().is_empty());

        let markets = source.reload_markets().unwrap();
        assert!(markets.contains_key("BTC/USD"));
        assert!(source.currencies().contains_key("USD"));
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            JsonMarketSource::open(dir.path().join("absent.json")),
            Err(SourceError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"name\": 1}").unwrap();
        assert!(matches!(
            JsonMarketSource::open(&path),
            Err(SourceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_async_reload_rereads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(
            &dir,
            json!({"name": "okx", "precision_mode": "TICK_SIZE", "markets": {"A/USD": {}}}),
        );
        let mut source = JsonMarketSource::open(&path).unwrap();
        assert_eq!(source.reload_markets_async().await.unwrap().len(), 1);

        write_snapshot(
            &dir,
            json!({"name": "okx", "precision_mode": "TICK_SIZE", "markets": {"A/USD": {}, "B/USD": {}}}),
        );
        assert_eq!(source.reload_markets_async().await.unwrap().len(), 2);
    }
}
