//! Currency resolution from a venue's currency listing

use meridian_core::{Currency, Venue};
use meridian_ports::{PrecisionMode, RawCurrencies};
use std::collections::HashMap;

use crate::error::{ProviderError, ProviderResult};
use crate::precision::resolve_precision;

/// Build a fresh code → `Currency` map from a venue listing
///
/// The type follows the fiat-code rule and the precision goes through the
/// precision resolver. Merging into a cache is left to the caller.
///
/// A precision the resolver rejects as out of range is reported as
/// `MalformedCurrencyDefinition` naming the currency, not as
/// `InvalidPrecision`; an unsupported mode propagates unchanged.
pub fn resolve_currencies(
    raw: &RawCurrencies,
    mode: PrecisionMode,
    venue: &Venue,
) -> ProviderResult<HashMap<String, Currency>> {
    raw.iter()
        .map(|(code, entry)| {
            let value = entry
                .precision()
                .ok()
                .flatten()
                .ok_or_else(|| malformed(code))?;
            let precision = resolve_precision(value, mode, venue).map_err(|e| match e {
                ProviderError::InvalidPrecision { .. } => malformed(code),
                other => other,
            })?;
            Ok((code.clone(), Currency::classified(code.as_str(), precision)))
        })
        .collect()
}

fn malformed(code: &str) -> ProviderError {
    ProviderError::MalformedCurrencyDefinition {
        code: code.to_string(),
        field: "precision".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::CurrencyType;
    use meridian_ports::RawCurrency;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn listing(entries: &[(&str, RawCurrency)]) -> RawCurrencies {
        entries
            .iter()
            .map(|(code, raw)| (code.to_string(), raw.clone()))
            .collect()
    }

    #[test]
    fn test_resolve_decimal_places() {
        let raw = listing(&[
            ("USD", RawCurrency::with_precision(dec!(2))),
            ("BTC", RawCurrency::with_precision(dec!(8))),
        ]);
        let venue = Venue::new("kraken");
        let currencies = resolve_currencies(&raw, PrecisionMode::DecimalPlaces, &venue).unwrap();

        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies["USD"], Currency::fiat("USD", 2));
        assert_eq!(currencies["BTC"].currency_type, CurrencyType::Crypto);
        assert_eq!(currencies["BTC"].precision, 8);
    }

    #[test]
    fn test_resolve_tick_size() {
        let raw = listing(&[("ETH", RawCurrency::with_precision(dec!(0.000001)))]);
        let venue = Venue::new("okx");
        let currencies = resolve_currencies(&raw, PrecisionMode::TickSize, &venue).unwrap();
        assert_eq!(currencies["ETH"].precision, 6);
    }

    #[test]
    fn test_missing_precision_is_malformed() {
        let raw = listing(&[("XYZ", RawCurrency::default())]);
        let venue = Venue::new("okx");
        match resolve_currencies(&raw, PrecisionMode::TickSize, &venue) {
            Err(ProviderError::MalformedCurrencyDefinition { code, field }) => {
                assert_eq!(code, "XYZ");
                assert_eq!(field, "precision");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_or_out_of_range_precision_is_malformed() {
        let unreadable: RawCurrency = serde_json::from_value(json!({"precision": "eight"})).unwrap();
        for (code, raw) in [("ABC", unreadable), ("DEF", RawCurrency::with_precision(dec!(40)))] {
            let venue = Venue::new("kraken");
            match resolve_currencies(&listing(&[(code, raw)]), PrecisionMode::DecimalPlaces, &venue) {
                Err(ProviderError::MalformedCurrencyDefinition { code: reported, field }) => {
                    assert_eq!(reported, code);
                    assert_eq!(field, "precision");
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_unsupported_mode_propagates() {
        let raw = listing(&[("BTC", RawCurrency::with_precision(dec!(5)))]);
        let venue = Venue::new("bitfinex");
        assert!(matches!(
            resolve_currencies(&raw, PrecisionMode::SignificantDigits, &venue),
            Err(ProviderError::UnsupportedPrecisionMode { .. })
        ));
    }
}
