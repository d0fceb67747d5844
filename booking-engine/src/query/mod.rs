//! Order list queries

pub mod filter;

pub use filter::{ALL_STATUSES, OrderQuery, StatusFilter, customer_name, filter_and_sort};
