use std::collections::HashMap;

use super::{Currency, CurrencyType};

const BUILTIN: &[(&str, u8, CurrencyType)] = &[
    // Fiat
    ("AUD", 2, CurrencyType::Fiat),
    ("BRL", 2, CurrencyType::Fiat),
    ("CAD", 2, CurrencyType::Fiat),
    ("CHF", 2, CurrencyType::Fiat),
    ("CNY", 2, CurrencyType::Fiat),
    ("EUR", 2, CurrencyType::Fiat),
    ("GBP", 2, CurrencyType::Fiat),
    ("HKD", 2, CurrencyType::Fiat),
    ("INR", 2, CurrencyType::Fiat),
    ("JPY", 0, CurrencyType::Fiat),
    ("KRW", 0, CurrencyType::Fiat),
    ("MXN", 2, CurrencyType::Fiat),
    ("NOK", 2, CurrencyType::Fiat),
    ("NZD", 2, CurrencyType::Fiat),
    ("SEK", 2, CurrencyType::Fiat),
    ("SGD", 2, CurrencyType::Fiat),
    ("TRY", 2, CurrencyType::Fiat),
    ("USD", 2, CurrencyType::Fiat),
    ("ZAR", 2, CurrencyType::Fiat),
    // Crypto
    ("ADA", 6, CurrencyType::Crypto),
    ("BNB", 8, CurrencyType::Crypto),
    ("BTC", 8, CurrencyType::Crypto),
    ("DOGE", 8, CurrencyType::Crypto),
    ("DOT", 8, CurrencyType::Crypto),
    ("ETH", 8, CurrencyType::Crypto),
    ("LTC", 8, CurrencyType::Crypto),
    ("SOL", 8, CurrencyType::Crypto),
    ("TRX", 6, CurrencyType::Crypto),
    ("USDC", 8, CurrencyType::Crypto),
    ("USDT", 8, CurrencyType::Crypto),
    ("XRP", 6, CurrencyType::Crypto),
];

/// Read-only table of canonical currencies, looked up by code
///
/// Venue-specific currencies that are not in the catalog are resolved from
/// the venue's own currency listing instead.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    currencies: HashMap<String, Currency>,
}

impl CurrencyCatalog {
    /// Catalog with no entries; every lookup falls through to the venue cache
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog of commonly traded fiat and crypto currencies
    pub fn builtin() -> Self {
        Self::from_currencies(
            BUILTIN
                .iter()
                .map(|(code, precision, kind)| Currency::new(*code, *precision, *kind)),
        )
    }

    pub fn from_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        Self {
            currencies: currencies
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = CurrencyCatalog::builtin();
        let usd = catalog.get("USD").unwrap();
        assert_eq!(usd.precision, 2);
        assert!(usd.is_fiat());

        let btc = catalog.get("BTC").unwrap();
        assert_eq!(btc.precision, 8);
        assert_eq!(btc.currency_type, CurrencyType::Crypto);

        assert!(catalog.get("SHIB").is_none());
    }

    #[test]
    fn test_builtin_types_follow_fiat_rule() {
        let catalog = CurrencyCatalog::builtin();
        for (code, _, kind) in BUILTIN {
            assert_eq!(CurrencyType::classify(code), *kind, "{}", code);
        }
        assert_eq!(catalog.len(), BUILTIN.len());
    }

    #[test]
    fn test_empty_and_custom() {
        assert!(CurrencyCatalog::empty().is_empty());

        let catalog = CurrencyCatalog::from_currencies([Currency::crypto("XYZ", 4)]);
        assert!(catalog.contains("XYZ"));
        assert!(!catalog.contains("USD"));
    }
}
