//! Field validators for the order form.
//!
//! Every validator is a pure function from the current value to an optional
//! [`ValidationError`]. The composed validators for name, phone and email run
//! the required check first and only look at the format when the value is
//! non-empty, so an empty field reports "required" and nothing else.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FormField, PizzaSize, TextField};

/// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029).
const LINE_CHAR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Whitespace, as excluded from unquoted local parts: ASCII blanks, line
/// terminators, the Unicode space separators and U+FEFF. U+0085 is not in it.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Z]{LINE_CHAR}*$")).expect("name pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3} [0-9]{3} [0-9]{3}$").expect("phone pattern is valid")
});

// Local part: dot-separated atoms or a quoted string.
// Domain: bracketed IPv4 literal or labels ending in a 2+ letter label.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:{WHITESPACE}@"]+"#);
    let local = format!(r#"(({atom}(\.{atom})*)|("{LINE_CHAR}+"))"#);
    let domain = r"((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))";

    Regex::new(&format!("^{local}@{domain}$")).expect("email pattern is valid")
});

/// A user-input finding. The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("The field is required")]
    Required,

    #[error("The name must start with caplocks")]
    NameFormat,

    #[error("Wrong phone format")]
    PhoneFormat,

    #[error("Wrong email format")]
    EmailFormat,

    #[error("You must choose a pizza size")]
    SizeRequired,

    #[error("You must choose, at least, one ingredient")]
    IngredientsRequired,
}

/// A [`ValidationError`] attached to the field it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub error: ValidationError,
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

pub fn required_error(value: &str) -> Option<ValidationError> {
    value.is_empty().then_some(ValidationError::Required)
}

pub fn name_format_error(value: &str) -> Option<ValidationError> {
    (!NAME_PATTERN.is_match(value)).then_some(ValidationError::NameFormat)
}

pub fn phone_format_error(value: &str) -> Option<ValidationError> {
    (!PHONE_PATTERN.is_match(value)).then_some(ValidationError::PhoneFormat)
}

pub fn email_format_error(value: &str) -> Option<ValidationError> {
    (!EMAIL_PATTERN.is_match(value)).then_some(ValidationError::EmailFormat)
}

pub fn size_selection_error(size: Option<PizzaSize>) -> Option<ValidationError> {
    size.is_none().then_some(ValidationError::SizeRequired)
}

pub fn ingredients_selection_error<S: AsRef<str>>(ingredients: &[S]) -> Option<ValidationError> {
    ingredients
        .is_empty()
        .then_some(ValidationError::IngredientsRequired)
}

/// Required check followed by the field's format check, if it has one.
pub fn text_field_error(
    field: TextField,
    value: &str,
) -> Option<ValidationError> {
    required_error(value).or_else(|| match field {
        TextField::Name => name_format_error(value),
        TextField::Address => None,
        TextField::Phone => phone_format_error(value),
        TextField::Email => email_format_error(value),
    })
}
