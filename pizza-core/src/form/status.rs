use serde::{Deserialize, Serialize};

use crate::models::FormField;
use crate::validation::{FieldError, ValidationError};

/// What the presentation layer needs after every input event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    /// Errors to show, in form order. Hidden errors of untouched text fields are left out.
    pub errors: Vec<FieldError>,
    pub submit_enabled: bool,
}

impl FormStatus {
    pub fn error_for(
        &self,
        field: FormField,
    ) -> Option<ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.error)
    }
}
