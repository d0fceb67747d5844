//! Calendar view grouping

pub mod grouper;

pub use grouper::{CalendarMonth, MonthCursor, group_by_day};
