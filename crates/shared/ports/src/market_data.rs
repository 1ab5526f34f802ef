use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, SourceResult};

/// Convention by which a venue reports numeric precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecisionMode {
    /// The raw value is a count of decimal places (e.g. `2`)
    DecimalPlaces,
    /// The raw value is the smallest increment (e.g. `0.01`)
    TickSize,
    /// The raw value is a count of significant digits
    SignificantDigits,
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionMode::DecimalPlaces => write!(f, "DECIMAL_PLACES"),
            PrecisionMode::TickSize => write!(f, "TICK_SIZE"),
            PrecisionMode::SignificantDigits => write!(f, "SIGNIFICANT_DIGITS"),
        }
    }
}

/// Read a JSON number or numeric string as a `Decimal`
///
/// Venues mix both encodings and sometimes use scientific notation
/// (`1e-8`). Anything else yields `None`.
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Currency entry as listed by a venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCurrency {
    /// Raw precision, interpreted per the venue's `PrecisionMode`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawCurrency {
    pub fn with_precision(precision: Decimal) -> Self {
        Self {
            precision: Some(Value::String(precision.to_string())),
            extra: Map::new(),
        }
    }

    /// `precision` as a decimal; `Ok(None)` when absent
    pub fn precision(&self) -> Result<Option<Decimal>, FieldError> {
        match &self.precision {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse_decimal(value)
                .map(Some)
                .ok_or_else(|| FieldError::new("precision")),
        }
    }
}

/// One market as reported by a venue
///
/// The dictionary is kept exactly as received. Nothing is interpreted while
/// decoding, so a badly typed field in one market never fails a whole
/// listing; the typed readers below report it against its dotted path
/// instead. JSON `null` reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketDefinition(Value);

impl MarketDefinition {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// The definition as received from the venue
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    /// Value at a dotted path such as `limits.amount.min`
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, key| node.get(key))
            .filter(|value| !value.is_null())
    }

    /// Nested block at `path`; present but not an object is an error
    pub fn object(&self, path: &str) -> Result<Option<&Map<String, Value>>, FieldError> {
        self.get(path)
            .map(|value| value.as_object().ok_or_else(|| FieldError::new(path)))
            .transpose()
    }

    /// Number or numeric string at `path`
    pub fn decimal(&self, path: &str) -> Result<Option<Decimal>, FieldError> {
        self.get(path)
            .map(|value| parse_decimal(value).ok_or_else(|| FieldError::new(path)))
            .transpose()
    }

    /// String at `path`
    pub fn text(&self, path: &str) -> Result<Option<&str>, FieldError> {
        self.get(path)
            .map(|value| value.as_str().ok_or_else(|| FieldError::new(path)))
            .transpose()
    }
}

impl Default for MarketDefinition {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for MarketDefinition {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

/// Markets keyed by symbol code, in a stable order
pub type Markets = BTreeMap<String, MarketDefinition>;

/// Venue currency listing keyed by currency code
pub type RawCurrencies = BTreeMap<String, RawCurrency>;

/// Port for a venue's market metadata
///
/// Implemented by exchange connectors. Both reload methods force a fresh,
/// non-cached fetch and refresh `currencies()` as a side effect. Callers
/// serialize reloads; `&mut self` makes that explicit.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Source name; the venue identifier is its upper-cased form
    fn name(&self) -> &str;

    /// Precision convention used by this venue
    fn precision_mode(&self) -> PrecisionMode;

    /// Currency listing as of the last reload
    fn currencies(&self) -> &RawCurrencies;

    /// Fetch all market definitions, blocking the current thread
    fn reload_markets(&mut self) -> SourceResult<Markets>;

    /// Fetch all market definitions without blocking
    async fn reload_markets_async(&mut self) -> SourceResult<Markets>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_precision_mode_wire_names() {
        let mode: PrecisionMode = serde_json::from_value(json!("TICK_SIZE")).unwrap();
        assert_eq!(mode, PrecisionMode::TickSize);
        assert_eq!(
            serde_json::to_value(PrecisionMode::DecimalPlaces).unwrap(),
            json!("DECIMAL_PLACES")
        );
        assert_eq!(PrecisionMode::SignificantDigits.to_string(), "SIGNIFICANT_DIGITS");
    }

    #[test]
    fn test_parse_decimal_encodings() {
        assert_eq!(parse_decimal(&json!(2)), Some(dec!(2)));
        assert_eq!(parse_decimal(&json!(0.0001)), Some(dec!(0.0001)));
        assert_eq!(parse_decimal(&json!(" 0.0100 ")), Some(dec!(0.0100)));
        assert_eq!(parse_decimal(&json!(1e-8)), Some(dec!(0.00000001)));
        assert_eq!(parse_decimal(&json!("1e-6")), Some(dec!(0.000001)));
        assert_eq!(parse_decimal(&json!("abc")), None);
        assert_eq!(parse_decimal(&json!(true)), None);
        assert_eq!(parse_decimal(&json!({"value": 1})), None);
    }

    #[test]
    fn test_market_definition_readers() {
        let market: MarketDefinition = serde_json::from_value(json!({
            "id": "BTCUSDT",
            "base": "BTC",
            "quote": "USDT",
            "type": "spot",
            "precision": {"price": 2, "amount": "0.00001"},
            "limits": {"amount": {"min": 0.0001, "max": 9000}, "cost": {"min": 10, "max": null}},
            "info": {"lotSize": "0.0001"},
            "maker": 0.001
        }))
        .unwrap();

        assert_eq!(market.decimal("precision.price"), Ok(Some(dec!(2))));
        assert_eq!(market.decimal("precision.amount"), Ok(Some(dec!(0.00001))));
        assert_eq!(market.decimal("limits.amount.min"), Ok(Some(dec!(0.0001))));
        assert_eq!(market.decimal("limits.cost.max"), Ok(None));
        assert_eq!(market.decimal("taker"), Ok(None));
        assert_eq!(market.text("type"), Ok(Some("spot")));
        assert!(market.object("limits.amount").unwrap().is_some());
        assert!(market.object("limits.price").unwrap().is_none());
        assert_eq!(market.get("id"), Some(&json!("BTCUSDT")));
    }

    #[test]
    fn test_mistyped_fields_report_their_path() {
        let market: MarketDefinition = serde_json::from_value(json!({
            "quote": 5,
            "precision": {"price": "abc"},
            "limits": "none"
        }))
        .unwrap();

        assert_eq!(market.text("quote"), Err(FieldError::new("quote")));
        assert_eq!(
            market.decimal("precision.price"),
            Err(FieldError::new("precision.price"))
        );
        assert_eq!(market.object("limits"), Err(FieldError::new("limits")));
    }

    #[test]
    fn test_raw_definition_is_kept_verbatim() {
        let raw = json!({
            "quote": "USD",
            "active": true,
            "maker": 0.001,
            "precision": {"price": 0.5, "base": 8},
            "limits": {"amount": {"min": 0.5, "step": 0.1}}
        });
        let market: MarketDefinition = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(market.raw(), &raw);
        assert_eq!(serde_json::to_value(&market).unwrap(), raw);
        assert_eq!(MarketDefinition::default().raw(), &json!({}));
    }

    #[test]
    fn test_raw_currency_precision() {
        let currency: RawCurrency =
            serde_json::from_value(json!({"precision": 1e-8, "name": "Bitcoin"})).unwrap();
        assert_eq!(currency.precision(), Ok(Some(dec!(0.00000001))));
        assert_eq!(currency.extra.get("name"), Some(&json!("Bitcoin")));

        assert_eq!(RawCurrency::default().precision(), Ok(None));
        assert_eq!(RawCurrency::with_precision(dec!(2)).precision(), Ok(Some(dec!(2))));

        let broken: RawCurrency = serde_json::from_value(json!({"precision": "n/a"})).unwrap();
        assert_eq!(broken.precision(), Err(FieldError::new("precision")));
    }
}
