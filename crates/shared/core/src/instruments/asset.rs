use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::values::ValueError;

/// Broad class of the underlying asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Fx,
    Equity,
    Commodity,
    Debt,
    Index,
    Crypto,
    Alternative,
}

/// Contract form of an instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetType {
    /// Sentinel for absent or unrecognized contract types
    #[default]
    Undefined,
    Spot,
    Swap,
    Future,
    Forward,
    Cfd,
    Option,
    Warrant,
}

impl AssetType {
    /// Map an optional venue-reported type string, falling back to `Undefined`
    pub fn from_market_type(market_type: Option<&str>) -> Self {
        market_type
            .and_then(|t| t.parse().ok())
            .unwrap_or(AssetType::Undefined)
    }
}

impl FromStr for AssetType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNDEFINED" => Ok(AssetType::Undefined),
            "SPOT" => Ok(AssetType::Spot),
            "SWAP" => Ok(AssetType::Swap),
            "FUTURE" => Ok(AssetType::Future),
            "FORWARD" => Ok(AssetType::Forward),
            "CFD" => Ok(AssetType::Cfd),
            "OPTION" => Ok(AssetType::Option),
            "WARRANT" => Ok(AssetType::Warrant),
            _ => Err(ValueError::Unrecognized(s.to_string())),
        }
    }
}
