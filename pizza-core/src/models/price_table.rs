use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::PizzaSize;

/// Errors raised while building a [`PriceTable`] from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceTableError {
    #[error("unknown pizza size '{0}'")]
    UnknownSize(String),

    #[error("negative price {price} for '{item}'")]
    NegativePrice { item: String, price: Decimal },
}

/// Base price per pizza size plus the flat price charged per ingredient.
///
/// Amounts are stored rounded to cents. A size missing from the table has no
/// price and cannot be billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    sizes: BTreeMap<PizzaSize, Decimal>,
    ingredient_price: Decimal,
}

impl PriceTable {
    pub fn new(
        sizes: impl IntoIterator<Item = (PizzaSize, Decimal)>,
        ingredient_price: Decimal,
    ) -> Result<Self, PriceTableError> {
        let ingredient_price = checked_price("ingredient", ingredient_price)?;
        let sizes = sizes
            .into_iter()
            .map(|(size, price)| Ok((size, checked_price(size.as_str(), price)?)))
            .collect::<Result<BTreeMap<_, _>, PriceTableError>>()?;

        Ok(Self {
            sizes,
            ingredient_price,
        })
    }

    /// Builds a table from size identifiers as they appear in configuration files.
    pub fn from_named<S: AsRef<str>>(
        sizes: impl IntoIterator<Item = (S, Decimal)>,
        ingredient_price: Decimal,
    ) -> Result<Self, PriceTableError> {
        let sizes = sizes
            .into_iter()
            .map(|(name, price)| {
                let name = name.as_ref();
                PizzaSize::parse(name)
                    .map(|size| (size, price))
                    .ok_or_else(|| PriceTableError::UnknownSize(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(sizes, ingredient_price)
    }

    pub fn size_price(
        &self,
        size: PizzaSize,
    ) -> Option<Decimal> {
        self.sizes.get(&size).copied()
    }

    pub fn ingredient_price(&self) -> Decimal {
        self.ingredient_price
    }

    /// Priced sizes in ascending size order.
    pub fn sizes(&self) -> impl Iterator<Item = (PizzaSize, Decimal)> + '_ {
        self.sizes.iter().map(|(size, price)| (*size, *price))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            sizes: BTreeMap::from([
                (PizzaSize::Small, Decimal::from(5)),
                (PizzaSize::Medium, Decimal::from(10)),
                (PizzaSize::Big, Decimal::from(15)),
            ]),
            ingredient_price: Decimal::ONE,
        }
    }
}

fn checked_price(
    item: &str,
    price: Decimal,
) -> Result<Decimal, PriceTableError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PriceTableError::NegativePrice {
            item: item.to_string(),
            price,
        });
    }
    Ok(round_half_up(price))
}
