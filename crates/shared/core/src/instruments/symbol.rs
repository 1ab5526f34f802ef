use serde::{Deserialize, Serialize};

/// Identifier of an exchange or trading destination
///
/// Always upper-case; derived from a market data source's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Venue(String);

impl Venue {
    /// Create a venue from any casing of its name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Venue {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Venue-scoped ticker for a tradable contract (e.g. `BTC/USDT` on `BINANCE`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    code: String,
    venue: Venue,
}

impl Symbol {
    pub fn new(code: impl Into<String>, venue: Venue) -> Self {
        Self {
            code: code.into(),
            venue,
        }
    }

    /// The exchange-local ticker
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.code, self.venue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_is_upper_case() {
        assert_eq!(Venue::new("binance").as_str(), "BINANCE");
        assert_eq!(Venue::from("Kraken"), Venue::new("KRAKEN"));
    }

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::new("BTC/USDT", Venue::new("binance"));
        assert_eq!(symbol.code(), "BTC/USDT");
        assert_eq!(symbol.venue().as_str(), "BINANCE");
        assert_eq!(format!("{}", symbol), "BTC/USDT.BINANCE");
    }
}
