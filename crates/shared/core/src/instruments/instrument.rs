use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{AssetClass, AssetType, InstrumentSpec, Symbol};
use crate::currencies::Currency;
use crate::values::{Money, Price, Quantity, Timestamp, ValueError};

/// Canonical, precision-correct record of a tradable contract
///
/// Every numeric bound carries its own precision, so pricing and sizing code
/// downstream never has to guess how many decimals a venue meant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub asset_class: AssetClass,
    pub asset_type: AssetType,
    /// Absent for contracts without a base leg
    pub base_currency: Option<Currency>,
    pub quote_currency: Currency,
    pub settlement_currency: Currency,
    pub is_inverse: bool,
    pub price_precision: u8,
    pub size_precision: u8,
    pub tick_size: Price,
    pub multiplier: Quantity,
    pub leverage: Decimal,
    pub lot_size: Quantity,
    pub max_quantity: Option<Quantity>,
    pub min_quantity: Option<Quantity>,
    /// Denominated in the quote currency
    pub max_notional: Option<Money>,
    pub min_notional: Option<Money>,
    pub max_price: Option<Price>,
    pub min_price: Option<Price>,
    pub margin_init: Decimal,
    pub margin_maint: Decimal,
    pub maker_fee: Decimal,
    pub taker_fee: Decimal,
    pub financing: HashMap<String, Value>,
    /// When this record was parsed, not an exchange-reported time
    pub timestamp: Timestamp,
    /// The raw venue definition, kept for consumers needing exchange-specific fields
    pub info: Value,
}

impl Instrument {
    /// The exchange-local symbol code
    pub fn code(&self) -> &str {
        self.symbol.code()
    }

    /// Round a raw price to this instrument's price precision
    pub fn make_price(&self, value: Decimal) -> Result<Price, ValueError> {
        Price::new(value, self.price_precision)
    }

    /// Round a raw quantity to this instrument's size precision
    pub fn make_qty(&self, value: Decimal) -> Result<Quantity, ValueError> {
        Quantity::new(value, self.size_precision)
    }
}

impl InstrumentSpec for Instrument {
    fn symbol(&self) -> &str {
        self.symbol.code()
    }

    fn tick_size(&self) -> Decimal {
        self.tick_size.as_decimal()
    }

    fn lot_size(&self) -> Decimal {
        self.lot_size.as_decimal()
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
