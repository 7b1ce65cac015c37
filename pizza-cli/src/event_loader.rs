//! CSV loader for recorded form sessions.
//!
//! ## CSV Format
//!
//! Three columns, matched by header name. `target` and `value` may be left
//! empty (or omitted entirely) for events that do not use them. Header names
//! are trimmed; `event` and `target` cells are trimmed; `value` cells are
//! kept verbatim so leading or trailing spaces reach the validators.
//!
//! | `event` | `target` | `value` |
//! |--------------|------------------------------------|------------------------------------------|
//! | `change` | `name`, `address`, `phone`, `email` | New field content (empty clears it) |
//! | `blur` | `name`, `address`, `phone`, `email` | – |
//! | `size` | `small`, `medium`, `big` | `true`/`false` radio checked (default `true`) |
//! | `ingredient` | ingredient identifier | `true`/`false` selected (default `true`) |
//! | `reset` | – | – |
//! | `submit` | – | – |
//! | `dismiss` | – | – |
//!
//! ### Example
//!
//! ```csv
//! event,target,value
//! change,name,Mario
//! blur,name,
//! size,medium,
//! ingredient,cheese,true
//! submit,,
//! ```
use pizza_core::{FormEvent, PizzaSize, TextField};
use serde::Deserialize;

use crate::session::SessionEvent;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    event: String,
    target: Option<String>,
    value: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting an event file.
///
/// `row` is the 1-based data row number (the header is row 0).
#[derive(Debug, thiserror::Error)]
pub enum EventLoadError {
    #[error("cannot read event file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// `event` column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised event '{event}' on row {row}")]
    UnknownEvent { event: String, row: usize },

    #[error("event '{event}' on row {row} needs a target")]
    MissingTarget { event: String, row: usize },

    #[error("unrecognised field '{field}' on row {row}")]
    UnknownField { field: String, row: usize },

    #[error("unrecognised pizza size '{size}' on row {row}")]
    UnknownSize { size: String, row: usize },

    #[error("expected 'true' or 'false', got '{value}' on row {row}")]
    InvalidFlag { value: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn required_target(
    row: &CsvRow,
    event: &str,
    row_number: usize,
) -> Result<String, EventLoadError> {
    row.target
        .as_deref()
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .ok_or_else(|| EventLoadError::MissingTarget {
            event: event.to_string(),
            row: row_number,
        })
}

fn text_field(
    row: &CsvRow,
    event: &str,
    row_number: usize,
) -> Result<TextField, EventLoadError> {
    let target = required_target(row, event, row_number)?;
    TextField::parse(&target).ok_or(EventLoadError::UnknownField {
        field: target,
        row: row_number,
    })
}

/// Empty or missing means `true`, the common case of ticking a box.
fn flag(
    value: Option<&str>,
    row_number: usize,
) -> Result<bool, EventLoadError> {
    match value.map(str::trim) {
        None | Some("") | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(EventLoadError::InvalidFlag {
            value: other.to_string(),
            row: row_number,
        }),
    }
}

/// Convert a single CSV row into a SessionEvent.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SessionEvent, EventLoadError> {
    let event = row.event.trim();

    let converted = match event {
        "change" => SessionEvent::Form(FormEvent::FieldChanged {
            field: text_field(&row, event, row_number)?,
            value: row.value.clone().unwrap_or_default(),
        }),
        "blur" => SessionEvent::Form(FormEvent::FieldBlurred(text_field(
            &row, event, row_number,
        )?)),
        "size" => {
            let target = required_target(&row, event, row_number)?;
            let size = PizzaSize::parse(&target).ok_or(EventLoadError::UnknownSize {
                size: target,
                row: row_number,
            })?;
            SessionEvent::Form(FormEvent::SizeSelected {
                size,
                checked: flag(row.value.as_deref(), row_number)?,
            })
        }
        "ingredient" => SessionEvent::Form(FormEvent::IngredientToggled {
            ingredient: required_target(&row, event, row_number)?,
            selected: flag(row.value.as_deref(), row_number)?,
        }),
        "reset" => SessionEvent::Form(FormEvent::Reset),
        "submit" => SessionEvent::Submit,
        "dismiss" => SessionEvent::Dismiss,
        other => {
            return Err(EventLoadError::UnknownEvent {
                event: other.to_string(),
                row: row_number,
            });
        }
    };

    Ok(converted)
}

/// Parse CSV text (the full file contents as a &str) and return the events
/// in file order.
///
/// # Errors
///
/// * [EventLoadError::Parse] – if the CSV is structurally invalid.
/// * Any of the row-level variants when a row names an unknown event,
///   field, size or flag value.
pub fn load_from_str(input: &str) -> Result<Vec<SessionEvent>, EventLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<SessionEvent>, EventLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
