use rust_decimal::Decimal;

/// Tick and lot arithmetic shared by every tradable contract
///
/// Implementors only provide the symbol and the two increments; validation
/// and rounding are derived from them.
pub trait InstrumentSpec {
    /// Exchange-local symbol code (e.g., "BTC/USDT")
    fn symbol(&self) -> &str;

    /// Minimum price increment (e.g., 0.01 for most USD pairs)
    fn tick_size(&self) -> Decimal;

    /// Minimum quantity increment (e.g., 0.001 for BTC)
    fn lot_size(&self) -> Decimal;

    /// Validate that a price conforms to tick size
    fn validate_price(&self, price: Decimal) -> bool {
        let tick = self.tick_size();
        if tick == Decimal::ZERO {
            return true;
        }
        (price % tick) == Decimal::ZERO
    }

    /// Validate that a quantity conforms to lot size
    fn validate_quantity(&self, quantity: Decimal) -> bool {
        let lot = self.lot_size();
        if lot == Decimal::ZERO {
            return true;
        }
        (quantity % lot) == Decimal::ZERO
    }

    /// Round a price down to the nearest valid tick
    fn round_price_down(&self, price: Decimal) -> Decimal {
        let tick = self.tick_size();
        if tick == Decimal::ZERO {
            return price;
        }
        (price / tick).floor() * tick
    }

    /// Round a price up to the nearest valid tick
    fn round_price_up(&self, price: Decimal) -> Decimal {
        let tick = self.tick_size();
        if tick == Decimal::ZERO {
            return price;
        }
        (price / tick).ceil() * tick
    }

    /// Round a quantity down to the nearest valid lot
    fn round_quantity_down(&self, quantity: Decimal) -> Decimal {
        let lot = self.lot_size();
        if lot == Decimal::ZERO {
            return quantity;
        }
        (quantity / lot).floor() * lot
    }
}
