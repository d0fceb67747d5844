//! Application layer
//!
//! - **state**: the four persisted collections
//! - **controller**: mutations with explicit commits, view state, derived outputs
//! - **seed**: first-run demo data
//! - **report**: plain-text rendering for the terminal

pub mod controller;
pub mod report;
pub mod seed;
pub mod state;

pub use controller::{BookingController, BookingView, ViewContent, ViewMode};
pub use state::AppState;
