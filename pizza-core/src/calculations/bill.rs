//! Bill calculation for a submitted order.
//!
//! The bill lists the selected size at its base price, then every selected
//! ingredient at the flat ingredient price in the order the ingredients were
//! picked, and closes with a total row:
//!
//! | Line | Description | Price |
//! |------|-------------|-------|
//! | 1 | Pizza size | Base price for the size |
//! | 2..n | Ingredient | Ingredient price |
//! | last | Total | Base price + ingredient price × ingredient count |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pizza_core::{BillCalculator, FormModel, PizzaSize, PriceTable};
//!
//! let mut form = FormModel::new();
//! form.set_size(PizzaSize::Medium);
//! form.toggle_ingredient("cheese", true);
//! form.toggle_ingredient("olives", true);
//!
//! let prices = PriceTable::default();
//! let bill = BillCalculator::new(&prices).calculate(&form).unwrap();
//!
//! assert_eq!(bill.items().count(), 3);
//! assert_eq!(bill.total, dec!(12));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::form::FormModel;
use crate::models::{Bill, BillLine, PizzaSize, PriceTable};

/// Precondition violations that stop a bill from being computed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillError {
    /// The form has no pizza size selected.
    #[error("no pizza size selected")]
    SizeNotSelected,

    /// The price table has no entry for the selected size.
    #[error("no price configured for pizza size '{0}'")]
    UnpricedSize(PizzaSize),
}

/// Calculator for the order summary.
#[derive(Debug, Clone)]
pub struct BillCalculator<'a> {
    prices: &'a PriceTable,
}

impl<'a> BillCalculator<'a> {
    pub fn new(prices: &'a PriceTable) -> Self {
        Self { prices }
    }

    /// Computes the bill for the current form contents.
    ///
    /// The form is only read. Callers are expected to check the form first
    /// (see [`FormModel::submit`]), but a missing or unpriced size is still
    /// reported as an error instead of producing a meaningless total.
    ///
    /// # Errors
    ///
    /// - [`BillError::SizeNotSelected`] when no size is selected
    /// - [`BillError::UnpricedSize`] when the price table lacks the size
    pub fn calculate(
        &self,
        form: &FormModel,
    ) -> Result<Bill, BillError> {
        let size = form.size().ok_or_else(|| {
            warn!("bill requested without a pizza size");
            BillError::SizeNotSelected
        })?;
        let base_price = self.base_price(size)?;
        let ingredient_price = self.prices.ingredient_price();

        let mut lines = Vec::with_capacity(form.ingredients().len() + 2);
        lines.push(BillLine::item(size.as_str(), base_price));
        lines.extend(
            form.ingredients()
                .iter()
                .map(|ingredient| BillLine::item(ingredient.as_str(), ingredient_price)),
        );

        let total = self.total(base_price, form.ingredients().len());
        lines.push(BillLine::total(total));

        debug!(%size, ingredients = form.ingredients().len(), %total, "bill computed");

        Ok(Bill { lines, total })
    }

    fn base_price(
        &self,
        size: PizzaSize,
    ) -> Result<Decimal, BillError> {
        self.prices.size_price(size).ok_or_else(|| {
            warn!(%size, "no price configured for size");
            BillError::UnpricedSize(size)
        })
    }

    fn total(
        &self,
        base_price: Decimal,
        ingredient_count: usize,
    ) -> Decimal {
        round_half_up(base_price + self.prices.ingredient_price() * Decimal::from(ingredient_count))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn form_with(
        size: Option<PizzaSize>,
        ingredients: &[&str],
    ) -> FormModel {
        let mut form = FormModel::new();
        if let Some(size) = size {
            form.set_size(size);
        }
        for ingredient in ingredients {
            form.toggle_ingredient(ingredient, true);
        }
        form
    }

    #[test]
    fn medium_with_two_ingredients() {
        let prices = PriceTable::default();
        let form = form_with(Some(PizzaSize::Medium), &["cheese", "olives"]);

        let bill = BillCalculator::new(&prices).calculate(&form).unwrap();

        let items: Vec<_> = bill
            .items()
            .map(|line| (line.description.as_str(), line.price))
            .collect();
        assert_eq!(
            items,
            vec![("medium", dec!(10)), ("cheese", dec!(1)), ("olives", dec!(1))]
        );
        assert_eq!(bill.total, dec!(12));
    }

    #[test]
    fn total_row_closes_the_bill() {
        let prices = PriceTable::default();
        let form = form_with(Some(PizzaSize::Big), &["ham"]);

        let bill = BillCalculator::new(&prices).calculate(&form).unwrap();

        assert_eq!(bill.lines.len(), 3);
        assert_eq!(bill.lines.last(), Some(&BillLine::total(dec!(16))));
        assert!(bill.lines[..2].iter().all(|line| !line.is_total));
    }

    #[test]
    fn ingredient_lines_follow_selection_order() {
        let prices = PriceTable::default();
        let form = form_with(Some(PizzaSize::Small), &["olives", "bacon", "cheese"]);

        let bill = BillCalculator::new(&prices).calculate(&form).unwrap();

        let names: Vec<_> = bill
            .items()
            .skip(1)
            .map(|line| line.description.as_str())
            .collect();
        assert_eq!(names, vec!["olives", "bacon", "cheese"]);
        assert_eq!(bill.total, dec!(8));
    }

    #[test]
    fn deselected_ingredient_is_not_billed() {
        let prices = PriceTable::default();
        let mut form = form_with(Some(PizzaSize::Small), &["olives", "bacon"]);
        form.toggle_ingredient("olives", false);

        let bill = BillCalculator::new(&prices).calculate(&form).unwrap();

        assert_eq!(bill.items().count(), 2);
        assert_eq!(bill.total, dec!(6));
    }

    #[test]
    fn missing_size_is_an_error() {
        let prices = PriceTable::default();
        let form = form_with(None, &["cheese"]);

        let result = BillCalculator::new(&prices).calculate(&form);

        assert_eq!(result, Err(BillError::SizeNotSelected));
    }

    #[test]
    fn unpriced_size_is_an_error() {
        let prices = PriceTable::new([(PizzaSize::Small, dec!(5))], dec!(1)).unwrap();
        let form = form_with(Some(PizzaSize::Big), &["cheese"]);

        let result = BillCalculator::new(&prices).calculate(&form);

        assert_eq!(result, Err(BillError::UnpricedSize(PizzaSize::Big)));
    }

    #[test]
    fn custom_ingredient_price_scales_total() {
        let prices = PriceTable::new([(PizzaSize::Medium, dec!(9.50))], dec!(1.25)).unwrap();
        let form = form_with(Some(PizzaSize::Medium), &["cheese", "olives", "ham"]);

        let bill = BillCalculator::new(&prices).calculate(&form).unwrap();

        assert_eq!(bill.total, dec!(13.25));
    }

    #[test]
    fn calculation_does_not_modify_form() {
        let prices = PriceTable::default();
        let form = form_with(Some(PizzaSize::Medium), &["cheese"]);
        let before = form.clone();

        let _ = BillCalculator::new(&prices).calculate(&form);

        assert_eq!(form, before);
    }
}
