//! Precision resolution
//!
//! Venues report precision either as a count of decimal places (`2`) or as
//! the smallest increment (`0.01`). Both are reduced to a decimal-place count
//! here. Significant-digit precision is not supported.

use meridian_core::{MAX_PRECISION, Venue};
use meridian_ports::PrecisionMode;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ProviderError, ProviderResult};

/// Turn a raw precision value into a number of decimal places
///
/// Pure: identical inputs always give identical results. `venue` only
/// identifies the offender when the mode is unsupported.
pub fn resolve_precision(value: Decimal, mode: PrecisionMode, venue: &Venue) -> ProviderResult<u8> {
    match mode {
        PrecisionMode::DecimalPlaces => decimal_places(value),
        PrecisionMode::TickSize => tick_size_places(value),
        PrecisionMode::SignificantDigits => Err(ProviderError::UnsupportedPrecisionMode {
            venue: venue.clone(),
            mode,
        }),
    }
}

fn decimal_places(value: Decimal) -> ProviderResult<u8> {
    if value < Decimal::ZERO {
        return Err(ProviderError::InvalidPrecision { value });
    }
    value
        .trunc()
        .to_u8()
        .filter(|places| *places <= MAX_PRECISION)
        .ok_or(ProviderError::InvalidPrecision { value })
}

// Fractional digits left once trailing zeros are dropped: 0.0100 -> 2
fn tick_size_places(tick: Decimal) -> ProviderResult<u8> {
    if tick <= Decimal::ZERO {
        return Err(ProviderError::InvalidPrecision { value: tick });
    }
    let scale = tick.normalize().scale();
    u8::try_from(scale)
        .ok()
        .filter(|places| *places <= MAX_PRECISION)
        .ok_or(ProviderError::InvalidPrecision { value: tick })
}
