//! Input validation helpers
//!
//! Centralized text length constants and validation functions used at the
//! edit boundary (order, customer and staff forms). Errors carry the
//! offending field name in the `field` detail.

use chrono::NaiveTime;
use shared::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer, contact person, staff member
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Event locations / addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Highest accepted unit price (Kč per table)
pub const MAX_UNIT_PRICE: f64 = 1_000_000_000.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit (blank allowed).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Parse an `HH:MM` start time
pub fn parse_start_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        AppError::with_message(
            ErrorCode::OrderInvalidStartTime,
            format!("Invalid start time: {value} (expected HH:MM)"),
        )
        .with_detail("field", "startTime")
    })
}

/// Validate a unit price: finite, not negative, at most [`MAX_UNIT_PRICE`]
pub fn validate_price(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::PriceInvalid,
            format!("{field} must be a non-negative amount, got {value}"),
        )
        .with_detail("field", field));
    }
    if value > MAX_UNIT_PRICE {
        return Err(AppError::with_message(
            ErrorCode::PriceInvalid,
            format!("{field} exceeds the maximum unit price {MAX_UNIT_PRICE}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
