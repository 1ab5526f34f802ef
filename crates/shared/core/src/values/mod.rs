//! Precision-carrying value objects
//!
//! Prices, quantities and money amounts are stored as `Decimal` rescaled to
//! an explicit number of fractional digits, so that rendering and downstream
//! arithmetic never go through binary floating point.

mod money;
mod price;
mod quantity;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

pub use money::Money;
pub use price::Price;
pub use quantity::Quantity;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Largest number of fractional digits a value object may carry
pub const MAX_PRECISION: u8 = 18;

/// Errors raised while constructing value objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Precision {0} exceeds maximum of {max}", max = MAX_PRECISION)]
    PrecisionOutOfRange(u8),

    #[error("Quantity must not be negative: {0}")]
    NegativeQuantity(Decimal),

    #[error("Unrecognized value: {0}")]
    Unrecognized(String),
}

pub(crate) fn check_precision(precision: u8) -> Result<(), ValueError> {
    if precision > MAX_PRECISION {
        return Err(ValueError::PrecisionOutOfRange(precision));
    }
    Ok(())
}

/// Round `value` to `precision` places and pin its scale so that it renders
/// with exactly that many fractional digits.
pub(crate) fn fixed(value: Decimal, precision: u8) -> Decimal {
    let mut fixed = value.round_dp(u32::from(precision));
    fixed.rescale(u32::from(precision));
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_pads_and_rounds() {
        assert_eq!(fixed(dec!(1), 2).to_string(), "1.00");
        assert_eq!(fixed(dec!(0.12345), 3).to_string(), "0.123");
        assert_eq!(fixed(dec!(0.0100), 2).to_string(), "0.01");
        assert_eq!(fixed(dec!(42.9), 0).to_string(), "43");
    }

    #[test]
    fn test_check_precision() {
        assert!(check_precision(MAX_PRECISION).is_ok());
        assert_eq!(
            check_precision(MAX_PRECISION + 1),
            Err(ValueError::PrecisionOutOfRange(MAX_PRECISION + 1))
        );
    }
}
