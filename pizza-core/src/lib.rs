//! Validation, state and pricing for a pizza order form.
//!
//! The crate is the logic behind the form only. Rendering errors, the submit
//! button and the bill summary is left to a presentation layer, which feeds
//! [`FormEvent`]s in and reads [`FormStatus`] and [`Bill`] back out.

pub mod calculations;
pub mod form;
pub mod models;
pub mod validation;

pub use calculations::{BillCalculator, BillError};
pub use form::{FormEvent, FormModel, FormStatus, SubmitError};
pub use models::*;
pub use validation::{FieldError, ValidationError};
