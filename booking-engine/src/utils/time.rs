//! Date helpers
//!
//! All business dates are local calendar dates without time of day.

use chrono::{Local, NaiveDate};
use shared::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's date in the local time zone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
