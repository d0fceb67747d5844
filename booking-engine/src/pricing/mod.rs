//! Pricing
//!
//! - `calculator`: order totals from a table selection and the tariff
//! - `selection`: merge rule for table-quantity edits

pub mod calculator;
pub mod selection;

pub use calculator::{compute_total, line_total, try_compute_total};
pub use selection::{apply_table_quantity, normalize_tables};
