//! Plain-text rendering of form status and bill summaries.

use pizza_core::{Bill, FormStatus};
use rust_decimal::Decimal;

const DESCRIPTION_WIDTH: usize = 16;
const PRICE_WIDTH: usize = 10;

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_price(
    price: Decimal,
    currency: &str,
) -> String {
    format!("{price} {currency}")
}

/// One row per bill line, with a rule above the total.
pub fn render_bill(
    bill: &Bill,
    currency: &str,
) -> String {
    let rule = "-".repeat(DESCRIPTION_WIDTH + PRICE_WIDTH);

    bill.lines
        .iter()
        .flat_map(|line| {
            let row = format!(
                "{:<dw$}{:>pw$}",
                capitalize(&line.description),
                format_price(line.price, currency),
                dw = DESCRIPTION_WIDTH,
                pw = PRICE_WIDTH,
            );
            if line.is_total {
                vec![rule.clone(), row]
            } else {
                vec![row]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Visible field errors, one per line, then the submit button state.
pub fn render_status(status: &FormStatus) -> String {
    let submit = if status.submit_enabled {
        "enabled"
    } else {
        "disabled"
    };

    status
        .errors
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(format!("submit: {submit}")))
        .collect::<Vec<_>>()
        .join("\n")
}
