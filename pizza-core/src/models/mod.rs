mod bill;
mod field;
mod pizza_size;
mod price_table;

pub use bill::{Bill, BillLine, TOTAL_DESCRIPTION};
pub use field::{FieldState, FormField, TextField};
pub use pizza_size::PizzaSize;
pub use price_table::{PriceTable, PriceTableError};
