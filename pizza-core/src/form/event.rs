use serde::{Deserialize, Serialize};

use crate::models::{PizzaSize, TextField};

/// Input events the presentation layer feeds into a [`super::FormModel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    /// A text field's content changed.
    FieldChanged { field: TextField, value: String },

    /// A text field lost focus.
    FieldBlurred(TextField),

    /// A size radio button changed. Only `checked == true` updates the selection.
    SizeSelected { size: PizzaSize, checked: bool },

    /// An ingredient checkbox changed.
    IngredientToggled { ingredient: String, selected: bool },

    Reset,
}
