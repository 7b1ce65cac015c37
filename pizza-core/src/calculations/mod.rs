//! Order pricing.

pub mod bill;
pub mod common;

pub use bill::{BillCalculator, BillError};
