//! Price Calculator
//!
//! Order totals from the table selection and the tariff.
//! Uses rust_decimal for the sums, stores as f64.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{GameTable, PriceTable, TableType};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Values outside the Decimal range saturate; NaN maps to zero.
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    match Decimal::from_f64(value) {
        Some(d) => d,
        None if value.is_nan() => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    }
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Price of one line item: quantity × unit price
pub fn line_total(table: &GameTable, prices: &PriceTable) -> f64 {
    to_f64(line_decimal(table, prices))
}

fn line_decimal(table: &GameTable, prices: &PriceTable) -> Decimal {
    to_decimal(prices.price_of(table.table_type)).saturating_mul(Decimal::from(table.quantity))
}

fn checked_line(table: &GameTable, prices: &PriceTable) -> Option<Decimal> {
    Decimal::from_f64(prices.price_of(table.table_type))?
        .checked_mul(Decimal::from(table.quantity))
}

/// Total price of a table selection, for display
///
/// Sum of `quantity × unit price` over all entries. A table type missing
/// from the tariff counts as 0. Amounts beyond the Decimal range saturate;
/// use [`try_compute_total`] when the total is stored.
pub fn compute_total(tables: &[GameTable], prices: &PriceTable) -> f64 {
    let total = tables
        .iter()
        .fold(Decimal::ZERO, |acc, table| acc.saturating_add(line_decimal(table, prices)));
    to_f64(total)
}

/// Total price of a table selection, failing when it cannot be represented
///
/// Same sum as [`compute_total`], with every conversion and operation
/// checked. Errors with `PriceInvalid` naming the offending table type.
pub fn try_compute_total(tables: &[GameTable], prices: &PriceTable) -> AppResult<f64> {
    let mut total = Decimal::ZERO;
    for table in tables {
        total = checked_line(table, prices)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| total_out_of_range(table.table_type))?;
    }
    Ok(to_f64(total))
}

fn total_out_of_range(table_type: TableType) -> AppError {
    AppError::with_message(
        ErrorCode::PriceInvalid,
        format!("Total for {} is out of range", table_type.label()),
    )
    .with_detail("tableType", table_type.code())
}
