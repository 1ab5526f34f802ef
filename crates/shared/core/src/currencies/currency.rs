use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known fiat currency codes (ISO 4217)
///
/// Any code outside this set is classified as crypto.
pub const FIAT_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK", "EUR", "GBP",
    "HKD", "HUF", "IDR", "ILS", "INR", "JPY", "KRW", "KZT", "MXN", "MYR", "NGN", "NOK", "NZD",
    "PEN", "PHP", "PLN", "RON", "RUB", "SAR", "SEK", "SGD", "THB", "TRY", "TWD", "UAH", "USD",
    "VND", "ZAR",
];

/// Classification of a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyType {
    Fiat,
    Crypto,
}

impl CurrencyType {
    /// Fiat if `code` is a well-known fiat code, otherwise crypto
    pub fn classify(code: &str) -> Self {
        if FIAT_CODES.iter().any(|fiat| fiat.eq_ignore_ascii_case(code)) {
            Self::Fiat
        } else {
            Self::Crypto
        }
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyType::Fiat => write!(f, "FIAT"),
            CurrencyType::Crypto => write!(f, "CRYPTO"),
        }
    }
}

/// A currency with the number of decimal places amounts are quoted at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub precision: u8,
    pub currency_type: CurrencyType,
}

impl Currency {
    pub fn new(code: impl Into<String>, precision: u8, currency_type: CurrencyType) -> Self {
        Self {
            code: code.into(),
            precision,
            currency_type,
        }
    }

    pub fn fiat(code: impl Into<String>, precision: u8) -> Self {
        Self::new(code, precision, CurrencyType::Fiat)
    }

    pub fn crypto(code: impl Into<String>, precision: u8) -> Self {
        Self::new(code, precision, CurrencyType::Crypto)
    }

    /// Build a currency whose type follows the fiat-code rule
    pub fn classified(code: impl Into<String>, precision: u8) -> Self {
        let code = code.into();
        let currency_type = CurrencyType::classify(&code);
        Self::new(code, precision, currency_type)
    }

    pub fn is_fiat(&self) -> bool {
        self.currency_type == CurrencyType::Fiat
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(CurrencyType::classify("USD"), CurrencyType::Fiat);
        assert_eq!(CurrencyType::classify("eur"), CurrencyType::Fiat);
        assert_eq!(CurrencyType::classify("BTC"), CurrencyType::Crypto);
        assert_eq!(CurrencyType::classify("USDT"), CurrencyType::Crypto);
    }

    #[test]
    fn test_classified_constructor() {
        let jpy = Currency::classified("JPY", 0);
        assert!(jpy.is_fiat());
        assert_eq!(jpy.precision, 0);

        let eth = Currency::classified("ETH", 8);
        assert_eq!(eth.currency_type, CurrencyType::Crypto);
        assert_eq!(format!("{}", eth), "ETH");
    }
}
