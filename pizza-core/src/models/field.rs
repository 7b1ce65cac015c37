use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-text inputs of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Name,
    Address,
    Phone,
    Email,
}

impl TextField {
    pub const ALL: [TextField; 4] = [Self::Name, Self::Address, Self::Phone, Self::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "address" => Some(Self::Address),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

/// Every validated part of the form, in display order.
///
/// Text fields carry a dirty flag that gates error display; the size and
/// ingredient selections do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Text(TextField),
    PizzaSize,
    Ingredients,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        Self::Text(TextField::Name),
        Self::Text(TextField::Address),
        Self::Text(TextField::Phone),
        Self::Text(TextField::Email),
        Self::PizzaSize,
        Self::Ingredients,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text(field) => field.as_str(),
            Self::PizzaSize => "pizza_size",
            Self::Ingredients => "ingredients",
        }
    }
}

impl From<TextField> for FormField {
    fn from(field: TextField) -> Self {
        Self::Text(field)
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current content of one text field.
///
/// `dirty` becomes true the first time the field loses focus and only a form
/// reset clears it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub dirty: bool,
}
