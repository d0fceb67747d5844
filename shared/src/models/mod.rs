//! Data models
//!
//! Records persisted by the booking engine and exchanged with the
//! presentation layer. Field names and enum values keep the shape of the
//! existing data files (camelCase fields, human-readable enum values).

pub mod customer;
pub mod game_table;
pub mod order;
pub mod staff;

// Re-exports
pub use customer::*;
pub use game_table::*;
pub use order::*;
pub use staff::*;
