use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ValueError, check_precision, fixed};

/// Non-negative quantity with an explicit number of fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
pub struct Quantity {
    value: Decimal,
    precision: u8,
}

impl Quantity {
    /// Create a quantity, rounding `value` to `precision` places
    pub fn new(value: Decimal, precision: u8) -> Result<Self, ValueError> {
        check_precision(precision)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValueError::NegativeQuantity(value));
        }
        Ok(Self {
            value: fixed(value, precision),
            precision,
        })
    }

    /// Whole-number quantity at precision 0
    pub fn from_int(value: u64) -> Self {
        Self {
            value: Decimal::from(value),
            precision: 0,
        }
    }

    /// Same amount re-expressed at another precision
    pub fn with_precision(self, precision: u8) -> Result<Self, ValueError> {
        Self::new(self.value, precision)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
