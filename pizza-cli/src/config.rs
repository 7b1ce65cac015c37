//! Pricing configuration loaded from TOML.
//!
//! ```toml
//! currency = "€"
//! ingredient_price = 1
//!
//! [sizes]
//! small = 5
//! medium = 10
//! big = 15
//! ```
//!
//! Prices may be integers or quoted decimals (`"9.50"`). A size left out of
//! `[sizes]` cannot be ordered.

use std::{collections::BTreeMap, fmt, path::Path};

use pizza_core::{PriceTable, PriceTableError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CURRENCY: &str = "€";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read price file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid price file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid price table: {0}")]
    Prices(#[from] PriceTableError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPricing {
    currency: Option<String>,
    ingredient_price: Decimal,
    sizes: BTreeMap<String, Decimal>,
}

/// Prices plus the currency symbol used when rendering them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub prices: PriceTable,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawPricing = toml::from_str(input)?;
        let prices = PriceTable::from_named(raw.sizes, raw.ingredient_price)?;

        Ok(Self {
            prices,
            currency: raw.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

impl fmt::Display for PricingConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (size, price) in self.prices.sizes() {
            writeln!(f, "{:<11} {} {}", size.as_str(), price, self.currency)?;
        }
        write!(
            f,
            "{:<11} {} {}",
            "ingredient",
            self.prices.ingredient_price(),
            self.currency
        )
    }
}
