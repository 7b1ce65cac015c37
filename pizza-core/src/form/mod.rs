//! State of one order-form session.
//!
//! [`FormModel`] holds the raw values the user has entered. It never decides
//! validity by itself: every check goes through the functions in
//! [`crate::validation`] against the current snapshot.
//!
//! Dirty flags gate *display* only. A text field's error is hidden until the
//! field has been blurred once, but [`FormModel::is_invalid`] and
//! [`FormModel::validate_for_submit`] look at the actual values, so submission
//! stays disabled for an untouched empty form.

mod event;
mod status;

pub use event::FormEvent;
pub use status::FormStatus;

use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{BillCalculator, BillError};
use crate::models::{Bill, FieldState, FormField, PizzaSize, PriceTable, TextField};
use crate::validation::{
    FieldError, ValidationError, ingredients_selection_error, size_selection_error,
    text_field_error,
};

/// Reasons a submission is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Bill(#[from] BillError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    name: FieldState,
    address: FieldState,
    phone: FieldState,
    email: FieldState,
    size: Option<PizzaSize>,
    /// Selected ingredients in the order they were picked, without duplicates.
    ingredients: Vec<String>,
}

impl FormModel {
    /// Creates an empty form: blank values, nothing dirty, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        &self,
        field: TextField,
    ) -> &FieldState {
        match field {
            TextField::Name => &self.name,
            TextField::Address => &self.address,
            TextField::Phone => &self.phone,
            TextField::Email => &self.email,
        }
    }

    fn field_mut(
        &mut self,
        field: TextField,
    ) -> &mut FieldState {
        match field {
            TextField::Name => &mut self.name,
            TextField::Address => &mut self.address,
            TextField::Phone => &mut self.phone,
            TextField::Email => &mut self.email,
        }
    }

    pub fn size(&self) -> Option<PizzaSize> {
        self.size
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Overwrites a text field's value. The dirty flag is left alone.
    pub fn set_field_value(
        &mut self,
        field: TextField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        debug!(field = field.as_str(), len = value.len(), "field value set");
        self.field_mut(field).value = value;
    }

    /// Marks a text field as touched. Idempotent.
    pub fn mark_dirty(
        &mut self,
        field: TextField,
    ) {
        let state = self.field_mut(field);
        if !state.dirty {
            debug!(field = field.as_str(), "field marked dirty");
            state.dirty = true;
        }
    }

    /// Adds or removes an ingredient, checkbox style.
    ///
    /// Selecting an ingredient that is already present is a no-op, so the
    /// selection never holds duplicates.
    pub fn toggle_ingredient(
        &mut self,
        ingredient: &str,
        selected: bool,
    ) {
        let present = self.ingredients.iter().any(|i| i == ingredient);
        match (selected, present) {
            (true, false) => {
                debug!(ingredient, "ingredient selected");
                self.ingredients.push(ingredient.to_string());
            }
            (true, true) => {
                warn!(ingredient, "ingredient already selected; ignoring");
            }
            (false, _) => {
                self.ingredients.retain(|i| i != ingredient);
                debug!(ingredient, "ingredient deselected");
            }
        }
    }

    pub fn set_size(
        &mut self,
        size: PizzaSize,
    ) {
        debug!(%size, "pizza size selected");
        self.size = Some(size);
    }

    /// Returns every field to its initial state.
    pub fn reset(&mut self) {
        for field in FormField::ALL {
            self.reset_field(field);
        }
        debug!("form reset");
    }

    fn reset_field(
        &mut self,
        field: FormField,
    ) {
        match field {
            FormField::Text(text) => *self.field_mut(text) = FieldState::default(),
            FormField::PizzaSize => self.size = None,
            FormField::Ingredients => self.ingredients.clear(),
        }
    }

    /// Applies one input event from the presentation layer.
    pub fn apply(
        &mut self,
        event: FormEvent,
    ) {
        match event {
            FormEvent::FieldChanged { field, value } => self.set_field_value(field, value),
            FormEvent::FieldBlurred(field) => self.mark_dirty(field),
            FormEvent::SizeSelected { size, checked } => {
                // Unchecking a radio never clears the stored size.
                if checked {
                    self.set_size(size);
                }
            }
            FormEvent::IngredientToggled {
                ingredient,
                selected,
            } => self.toggle_ingredient(&ingredient, selected),
            FormEvent::Reset => self.reset(),
        }
    }

    /// The field's current finding, regardless of whether it would be shown.
    pub fn error(
        &self,
        field: FormField,
    ) -> Option<ValidationError> {
        match field {
            FormField::Text(text) => text_field_error(text, &self.field(text).value),
            FormField::PizzaSize => size_selection_error(self.size),
            FormField::Ingredients => ingredients_selection_error(self.ingredients.as_slice()),
        }
    }

    /// The error the presentation layer should show for `field`.
    ///
    /// Text fields stay quiet until dirty. Size and ingredient errors are
    /// always shown.
    pub fn displayed_error(
        &self,
        field: FormField,
    ) -> Option<ValidationError> {
        match field {
            FormField::Text(text) if !self.field(text).dirty => None,
            _ => self.error(field),
        }
    }

    /// Returns `true` if any field currently fails validation.
    ///
    /// Dirty flags play no part here.
    pub fn is_invalid(&self) -> bool {
        FormField::ALL
            .iter()
            .any(|field| self.error(*field).is_some())
    }

    /// Validates that every field holds an acceptable value for submission.
    ///
    /// Errors are listed in form order.
    pub fn validate_for_submit(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<_> = FormField::ALL
            .iter()
            .filter_map(|&field| self.error(field).map(|error| FieldError { field, error }))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Displayed errors plus the submit-button state.
    pub fn status(&self) -> FormStatus {
        FormStatus {
            errors: FormField::ALL
                .iter()
                .filter_map(|&field| {
                    self.displayed_error(field)
                        .map(|error| FieldError { field, error })
                })
                .collect(),
            submit_enabled: !self.is_invalid(),
        }
    }

    /// Checks the form and computes the bill.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] when any field fails validation
    /// - [`SubmitError::Bill`] when the bill cannot be priced
    pub fn submit(
        &self,
        prices: &PriceTable,
    ) -> Result<Bill, SubmitError> {
        if let Err(errors) = self.validate_for_submit() {
            warn!(invalid = errors.len(), "submission refused");
            return Err(SubmitError::Invalid(errors));
        }

        Ok(BillCalculator::new(prices).calculate(self)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled_form() -> FormModel {
        let mut form = FormModel::new();
        form.set_field_value(TextField::Name, "Mario");
        form.set_field_value(TextField::Address, "Via Roma 1");
        form.set_field_value(TextField::Phone, "123 456 789");
        form.set_field_value(TextField::Email, "mario@example.com");
        form.set_size(PizzaSize::Medium);
        form.toggle_ingredient("cheese", true);
        form
    }

    // =========================================================================
    // field operations
    // =========================================================================

    #[test]
    fn new_form_is_empty() {
        let form = FormModel::new();

        for field in TextField::ALL {
            assert_eq!(form.field(field), &FieldState::default());
        }
        assert_eq!(form.size(), None);
        assert!(form.ingredients().is_empty());
    }

    #[test]
    fn set_field_value_keeps_dirty_flag() {
        let mut form = FormModel::new();
        form.mark_dirty(TextField::Email);

        form.set_field_value(TextField::Email, "x@y.io");

        assert_eq!(
            form.field(TextField::Email),
            &FieldState {
                value: "x@y.io".to_string(),
                dirty: true,
            }
        );
        assert!(!form.field(TextField::Name).dirty);
    }

    #[test]
    fn mark_dirty_is_idempotent() {
        let mut form = FormModel::new();

        form.mark_dirty(TextField::Phone);
        let once = form.clone();
        form.mark_dirty(TextField::Phone);

        assert_eq!(form, once);
        assert!(form.field(TextField::Phone).dirty);
    }

    #[test]
    fn toggling_same_ingredient_twice_keeps_one_entry() {
        let mut form = FormModel::new();

        form.toggle_ingredient("pepperoni", true);
        form.toggle_ingredient("pepperoni", true);

        assert_eq!(form.ingredients(), ["pepperoni".to_string()]);
    }

    #[test]
    fn deselecting_removes_ingredient_and_keeps_order() {
        let mut form = FormModel::new();
        for ingredient in ["ham", "olives", "cheese"] {
            form.toggle_ingredient(ingredient, true);
        }

        form.toggle_ingredient("olives", false);
        form.toggle_ingredient("anchovies", false);

        assert_eq!(form.ingredients(), ["ham".to_string(), "cheese".to_string()]);
    }

    // =========================================================================
    // events
    // =========================================================================

    #[test]
    fn unchecked_size_event_keeps_selection() {
        let mut form = FormModel::new();
        form.apply(FormEvent::SizeSelected {
            size: PizzaSize::Small,
            checked: true,
        });

        form.apply(FormEvent::SizeSelected {
            size: PizzaSize::Small,
            checked: false,
        });

        assert_eq!(form.size(), Some(PizzaSize::Small));
    }

    #[test]
    fn checked_size_event_replaces_selection() {
        let mut form = FormModel::new();
        form.set_size(PizzaSize::Small);

        form.apply(FormEvent::SizeSelected {
            size: PizzaSize::Big,
            checked: true,
        });

        assert_eq!(form.size(), Some(PizzaSize::Big));
    }

    #[test]
    fn apply_dispatches_text_and_ingredient_events() {
        let mut form = FormModel::new();

        form.apply(FormEvent::FieldChanged {
            field: TextField::Name,
            value: "Luigi".to_string(),
        });
        form.apply(FormEvent::FieldBlurred(TextField::Name));
        form.apply(FormEvent::IngredientToggled {
            ingredient: "basil".to_string(),
            selected: true,
        });

        assert_eq!(form.field(TextField::Name).value, "Luigi");
        assert!(form.field(TextField::Name).dirty);
        assert_eq!(form.ingredients(), ["basil".to_string()]);
    }

    // =========================================================================
    // reset
    // =========================================================================

    #[test]
    fn reset_restores_initial_state() {
        let mut form = filled_form();
        for field in TextField::ALL {
            form.mark_dirty(field);
        }

        form.reset();

        assert_eq!(form, FormModel::new());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = filled_form();

        form.apply(FormEvent::Reset);
        let once = form.clone();
        form.apply(FormEvent::Reset);

        assert_eq!(form, once);
        assert_eq!(form, FormModel::new());
    }

    // =========================================================================
    // validity
    // =========================================================================

    #[test]
    fn untouched_empty_form_is_invalid_but_shows_only_selection_errors() {
        let form = FormModel::new();

        assert!(form.is_invalid());
        assert_eq!(
            form.status(),
            FormStatus {
                errors: vec![
                    FieldError {
                        field: FormField::PizzaSize,
                        error: ValidationError::SizeRequired,
                    },
                    FieldError {
                        field: FormField::Ingredients,
                        error: ValidationError::IngredientsRequired,
                    },
                ],
                submit_enabled: false,
            }
        );
    }

    #[test]
    fn dirty_field_shows_its_error() {
        let mut form = filled_form();
        form.set_field_value(TextField::Phone, "123-456-789");

        let phone = FormField::Text(TextField::Phone);
        assert_eq!(form.displayed_error(phone), None);
        assert_eq!(form.error(phone), Some(ValidationError::PhoneFormat));

        form.mark_dirty(TextField::Phone);

        assert_eq!(
            form.displayed_error(phone),
            Some(ValidationError::PhoneFormat)
        );
    }

    #[test]
    fn any_empty_required_field_makes_form_invalid() {
        for field in TextField::ALL {
            let mut form = filled_form();
            form.set_field_value(field, "");

            assert!(form.is_invalid(), "{field:?} empty should invalidate");
            assert_eq!(
                form.validate_for_submit(),
                Err(vec![FieldError {
                    field: field.into(),
                    error: ValidationError::Required,
                }])
            );
        }
    }

    #[test]
    fn filled_form_is_valid() {
        let form = filled_form();

        assert!(!form.is_invalid());
        assert_eq!(form.validate_for_submit(), Ok(()));
        assert!(form.status().submit_enabled);
        assert!(form.status().errors.is_empty());
    }

    #[test]
    fn validate_for_submit_lists_errors_in_form_order() {
        let mut form = FormModel::new();
        form.set_field_value(TextField::Name, "mario");
        form.set_field_value(TextField::Address, "Somewhere");
        form.set_field_value(TextField::Email, "bad");

        let errors = form.validate_for_submit().unwrap_err();

        let found: Vec<_> = errors.iter().map(|e| (e.field, e.error)).collect();
        assert_eq!(
            found,
            vec![
                (FormField::Text(TextField::Name), ValidationError::NameFormat),
                (FormField::Text(TextField::Phone), ValidationError::Required),
                (FormField::Text(TextField::Email), ValidationError::EmailFormat),
                (FormField::PizzaSize, ValidationError::SizeRequired),
                (FormField::Ingredients, ValidationError::IngredientsRequired),
            ]
        );
    }

    // =========================================================================
    // submit
    // =========================================================================

    #[test]
    fn submit_valid_form_returns_bill() {
        let mut form = filled_form();
        form.toggle_ingredient("olives", true);

        let bill = form.submit(&PriceTable::default()).unwrap();

        assert_eq!(bill.total, dec!(12));
    }

    #[test]
    fn submit_invalid_form_is_refused() {
        let mut form = filled_form();
        form.toggle_ingredient("cheese", false);

        let result = form.submit(&PriceTable::default());

        assert_eq!(
            result,
            Err(SubmitError::Invalid(vec![FieldError {
                field: FormField::Ingredients,
                error: ValidationError::IngredientsRequired,
            }]))
        );
    }

    #[test]
    fn submit_with_unpriced_size_reports_bill_error() {
        let form = filled_form();
        let prices = PriceTable::new([(PizzaSize::Small, dec!(5))], dec!(1)).unwrap();

        let result = form.submit(&prices);

        assert_eq!(
            result,
            Err(SubmitError::Bill(BillError::UnpricedSize(PizzaSize::Medium)))
        );
    }
}
