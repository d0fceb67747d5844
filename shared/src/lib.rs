//! Shared types for the casino table rental booking workspace
//!
//! Domain records (orders, customers, staff, table price list), the
//! unified error type, and small utilities used by `booking-engine`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    Customer, CustomerCreate, GameTable, Order, OrderDraft, OrderStatus, PriceTable, StaffMember,
    TableType,
};
pub use serde::{Deserialize, Serialize};
