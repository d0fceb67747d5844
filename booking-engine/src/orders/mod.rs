//! Order editing
//!
//! - **editor**: in-progress edit of one order, merge rule for table
//!   quantities, staff toggling and the save-time total

pub mod editor;

pub use editor::{ORDER_ID_PREFIX, OrderEditor, finalize_draft};
