use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ValueError, check_precision, fixed};

/// Price with an explicit number of fractional digits
///
/// The stored decimal is always rescaled to `precision`, so `0.01` at
/// precision 4 renders as `0.0100`. Prices may be negative (spreads,
/// some derivative quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
pub struct Price {
    value: Decimal,
    precision: u8,
}

impl Price {
    /// Create a price, rounding `value` to `precision` places
    pub fn new(value: Decimal, precision: u8) -> Result<Self, ValueError> {
        check_precision(precision)?;
        Ok(Self {
            value: fixed(value, precision),
            precision,
        })
    }

    /// The smallest increment representable at `precision`: `1 / 10^precision`
    ///
    /// Built from an integer mantissa and a scale, never from a float division.
    pub fn increment(precision: u8) -> Result<Self, ValueError> {
        check_precision(precision)?;
        Ok(Self {
            value: Decimal::new(1, u32::from(precision)),
            precision,
        })
    }

    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
