//! Instrument construction from one raw market definition
//!
//! The builder reconciles the venue's precision convention, resolves the
//! base/quote currencies and wraps every numeric bound in a value object
//! carrying the right precision.

use meridian_core::{
    AssetClass, AssetType, Currency, CurrencyCatalog, Instrument, Money, Price, Quantity, Symbol,
    Venue,
};
use meridian_ports::{Clock, FieldError, MarketDefinition, PrecisionMode};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{ProviderError, ProviderResult};
use crate::precision::resolve_precision;

/// Venue-provided lot size inside the market's `info` block
const LOT_SIZE_FIELD: &str = "info.lotSize";

/// Builds `Instrument`s for one venue
pub struct InstrumentBuilder<'a> {
    venue: &'a Venue,
    mode: PrecisionMode,
    catalog: &'a CurrencyCatalog,
    clock: &'a dyn Clock,
    default_size_precision: u8,
}

impl<'a> InstrumentBuilder<'a> {
    pub fn new(
        venue: &'a Venue,
        mode: PrecisionMode,
        catalog: &'a CurrencyCatalog,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            venue,
            mode,
            catalog,
            clock,
            default_size_precision: 8,
        }
    }

    /// Size precision used in decimal-places mode when `precision.amount` is absent
    pub fn with_default_size_precision(mut self, precision: u8) -> Self {
        self.default_size_precision = precision;
        self
    }

    /// Build the instrument for `code` from its raw definition
    ///
    /// `currencies` is the venue currency cache, consulted after the
    /// canonical catalog. Absent required blocks and mistyped fields are
    /// both reported as `MalformedMarketDefinition` with the field's path.
    pub fn build(
        &self,
        code: &str,
        market: &MarketDefinition,
        currencies: &HashMap<String, Currency>,
    ) -> ProviderResult<Instrument> {
        let (price_precision, size_precision, tick_size) = self.precisions(code, market)?;

        // Unrecognized or non-string types fall back to Undefined.
        let asset_type = AssetType::from_market_type(market.get("type").and_then(|t| t.as_str()));

        let base_currency = read(code, market.text("base"))?
            .and_then(|base| self.lookup_currency(base, currencies));
        let quote_code = read(code, market.text("quote"))?
            .ok_or_else(|| ProviderError::malformed(code, "quote"))?;
        let quote_currency = self
            .lookup_currency(quote_code, currencies)
            .ok_or_else(|| ProviderError::MissingCurrency {
                code: quote_code.to_string(),
            })?;

        for block in ["limits", "limits.amount", "limits.cost"] {
            if read(code, market.object(block))?.is_none() {
                return Err(ProviderError::malformed(code, block));
            }
        }

        let max_quantity = quantity(code, market, "limits.amount.max", size_precision)?;
        let min_quantity = quantity(code, market, "limits.amount.min", size_precision)?;

        let lot_size = match read(code, market.decimal(LOT_SIZE_FIELD))? {
            Some(lot) => Quantity::new(lot, size_precision)
                .map_err(|_| ProviderError::malformed(code, LOT_SIZE_FIELD))?,
            None => match min_quantity {
                Some(min) => min
                    .with_precision(size_precision)
                    .map_err(|_| ProviderError::malformed(code, "limits.amount.min"))?,
                None => Quantity::from_int(1),
            },
        };

        let max_cost = read(code, market.decimal("limits.cost.max"))?;
        let min_cost = read(code, market.decimal("limits.cost.min"))?;
        let max_notional = max_cost.map(|v| Money::new(v, quote_currency.clone()));
        let min_notional = min_cost.map(|v| Money::new(v, quote_currency.clone()));
        // Price bounds are read from the cost limits, same as notional.
        let max_price = price(code, "limits.cost.max", max_cost, price_precision)?;
        let min_price = price(code, "limits.cost.min", min_cost, price_precision)?;

        let maker_fee = read(code, market.decimal("maker"))?.unwrap_or(Decimal::ZERO);
        let taker_fee = read(code, market.decimal("taker"))?.unwrap_or(Decimal::ZERO);

        Ok(Instrument {
            symbol: Symbol::new(code, self.venue.clone()),
            asset_class: AssetClass::Crypto,
            asset_type,
            base_currency,
            settlement_currency: quote_currency.clone(),
            quote_currency,
            is_inverse: false,
            price_precision,
            size_precision,
            tick_size,
            multiplier: Quantity::from_int(1),
            leverage: Decimal::ONE,
            lot_size,
            max_quantity,
            min_quantity,
            max_notional,
            min_notional,
            max_price,
            min_price,
            margin_init: Decimal::ZERO,
            margin_maint: Decimal::ZERO,
            maker_fee,
            taker_fee,
            financing: HashMap::new(),
            timestamp: self.clock.now(),
            info: market.raw().clone(),
        })
    }

    /// Canonical catalog first, then the venue cache
    fn lookup_currency(
        &self,
        code: &str,
        currencies: &HashMap<String, Currency>,
    ) -> Option<Currency> {
        self.catalog
            .get(code)
            .or_else(|| currencies.get(code))
            .cloned()
    }

    /// Returns `(price_precision, size_precision, tick_size)`
    fn precisions(&self, code: &str, market: &MarketDefinition) -> ProviderResult<(u8, u8, Price)> {
        let absent_size_precision = match self.mode {
            PrecisionMode::DecimalPlaces => self.default_size_precision,
            PrecisionMode::TickSize => 0,
            PrecisionMode::SignificantDigits => {
                return Err(ProviderError::UnsupportedPrecisionMode {
                    venue: self.venue.clone(),
                    mode: self.mode,
                });
            }
        };

        if read(code, market.object("precision"))?.is_none() {
            return Err(ProviderError::malformed(code, "precision"));
        }
        let raw_price = read(code, market.decimal("precision.price"))?
            .ok_or_else(|| ProviderError::malformed(code, "precision.price"))?;
        let price_precision = self.resolve(code, "precision.price", raw_price)?;
        let size_precision = match read(code, market.decimal("precision.amount"))? {
            Some(amount) => self.resolve(code, "precision.amount", amount)?,
            None => absent_size_precision,
        };

        // Decimal places: tick is 1 / 10^p, built exactly. Tick size: the raw value is the tick.
        let tick_size = match self.mode {
            PrecisionMode::TickSize => Price::new(raw_price, price_precision),
            _ => Price::increment(price_precision),
        }
        .map_err(|_| ProviderError::malformed(code, "precision.price"))?;

        Ok((price_precision, size_precision, tick_size))
    }

    fn resolve(&self, code: &str, field: &str, value: Decimal) -> ProviderResult<u8> {
        resolve_precision(value, self.mode, self.venue).map_err(|e| match e {
            ProviderError::InvalidPrecision { .. } => ProviderError::malformed(code, field),
            other => other,
        })
    }
}

fn read<T>(code: &str, value: Result<T, FieldError>) -> ProviderResult<T> {
    value.map_err(|e| ProviderError::malformed(code, &e.field))
}

fn quantity(
    code: &str,
    market: &MarketDefinition,
    field: &str,
    precision: u8,
) -> ProviderResult<Option<Quantity>> {
    read(code, market.decimal(field))?
        .map(|v| Quantity::new(v, precision))
        .transpose()
        .map_err(|_| ProviderError::malformed(code, field))
}

fn price(
    code: &str,
    field: &str,
    value: Option<Decimal>,
    precision: u8,
) -> ProviderResult<Option<Price>> {
    value
        .map(|v| Price::new(v, precision))
        .transpose()
        .map_err(|_| ProviderError::malformed(code, field))
}
