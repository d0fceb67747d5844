//! Dashboard statistics
//!
//! Recomputed from scratch over the whole order collection; nothing here is
//! maintained incrementally.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Order, OrderStatus, TableType};

use crate::pricing::calculator::{to_decimal, to_f64};

/// Shown when no order books any table
pub const NOT_APPLICABLE: &str = "N/A";

/// Summary figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of `total_price` over completed orders
    pub total_revenue: f64,
    /// Open orders (pending or confirmed) dated today or later
    pub upcoming_count: usize,
    /// Orders still waiting for confirmation
    pub pending_count: usize,
    /// Table type with the highest booked quantity; `None` when nothing is booked
    pub most_popular_table: Option<TableType>,
}

impl DashboardStats {
    /// Label of the most popular table type, or [`NOT_APPLICABLE`]
    pub fn most_popular_label(&self) -> &'static str {
        self.most_popular_table
            .map(|t| t.label())
            .unwrap_or(NOT_APPLICABLE)
    }
}

/// Compute dashboard statistics for `today`
pub fn compute_stats(orders: &[Order], today: NaiveDate) -> DashboardStats {
    let revenue = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .fold(Decimal::ZERO, |acc, o| acc.saturating_add(to_decimal(o.total_price)));

    let upcoming_count = orders
        .iter()
        .filter(|o| o.event_date >= today && o.status.is_open())
        .count();

    let pending_count = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();

    let stats = DashboardStats {
        total_revenue: to_f64(revenue),
        upcoming_count,
        pending_count,
        most_popular_table: most_popular_table(orders),
    };
    tracing::debug!(
        orders = orders.len(),
        revenue = stats.total_revenue,
        upcoming = stats.upcoming_count,
        pending = stats.pending_count,
        "Dashboard stats computed"
    );
    stats
}

/// Booked quantity per table type over all orders regardless of status
///
/// Types appear in the order they are first encountered when walking the
/// orders and their table lists.
pub fn table_demand(orders: &[Order]) -> Vec<(TableType, u64)> {
    let mut demand: Vec<(TableType, u64)> = Vec::new();
    for table in orders.iter().flat_map(|o| o.tables.iter()) {
        match demand.iter_mut().find(|(t, _)| *t == table.table_type) {
            Some((_, total)) => *total += u64::from(table.quantity),
            None => demand.push((table.table_type, u64::from(table.quantity))),
        }
    }
    demand
}

/// Table type with the largest summed quantity
///
/// Ties go to the type encountered first in [`table_demand`] order.
pub fn most_popular_table(orders: &[Order]) -> Option<TableType> {
    let mut best: Option<(TableType, u64)> = None;
    for (table_type, total) in table_demand(orders) {
        match best {
            Some((_, max)) if total <= max => {}
            _ => best = Some((table_type, total)),
        }
    }
    best.map(|(t, _)| t)
}
