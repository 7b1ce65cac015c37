use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description used for the closing total row of a [`Bill`].
pub const TOTAL_DESCRIPTION: &str = "total";

/// One row of the order summary.
///
/// Descriptions are raw identifiers (`"medium"`, `"cheese"`); capitalisation
/// and currency formatting belong to whoever renders the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub description: String,
    pub price: Decimal,
    /// Marks the total row. Only affects presentation.
    pub is_total: bool,
}

impl BillLine {
    pub fn item(
        description: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            price,
            is_total: false,
        }
    }

    pub fn total(price: Decimal) -> Self {
        Self {
            description: TOTAL_DESCRIPTION.to_string(),
            price,
            is_total: true,
        }
    }
}

/// Computed order summary: size line, one line per ingredient in selection
/// order, then the total row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total: Decimal,
}

impl Bill {
    /// Line items excluding the total row.
    pub fn items(&self) -> impl Iterator<Item = &BillLine> {
        self.lines.iter().filter(|line| !line.is_total)
    }
}
