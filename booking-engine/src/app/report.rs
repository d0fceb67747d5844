//! Plain-text rendering of the controller outputs (used by the binary)

use std::fmt::Write;

use shared::models::{Customer, Order};

use crate::calendar::CalendarMonth;
use crate::query::customer_name;
use crate::stats::DashboardStats;
use crate::utils::format_czk;

const WEEKDAY_HEADER: &str = " Po  Út  St  Čt  Pá  So  Ne";

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Celkové tržby:      {}", format_czk(stats.total_revenue));
    let _ = writeln!(out, "Nadcházející akce:  {}", stats.upcoming_count);
    let _ = writeln!(out, "Čekající objednávky: {}", stats.pending_count);
    let _ = writeln!(out, "Nejoblíbenější stůl: {}", stats.most_popular_label());
    out
}

/// One line per order: date, time, customer, location, status, total
pub fn render_order_list(orders: &[&Order], customers: &[Customer]) -> String {
    if orders.is_empty() {
        return "Žádné objednávky\n".to_string();
    }

    let mut out = String::new();
    for order in orders {
        let tables = order
            .tables
            .iter()
            .map(|t| format!("{}× {}", t.quantity, t.table_type))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{} {}  {:<24} {:<24} {:<10} {:>12}  [{}]",
            order.event_date.format("%d.%m.%Y"),
            order.start_time,
            customer_name(customers, &order.customer_id),
            order.event_location,
            order.status,
            format_czk(order.total_price),
            tables,
        );
    }
    out
}

/// Month grid, Monday first; a day with bookings shows its order count
pub fn render_calendar(month: &CalendarMonth<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month.month);
    let _ = writeln!(out, "{WEEKDAY_HEADER}");

    for week in month.weeks() {
        for cell in week {
            match cell {
                None => out.push_str("    "),
                Some(day) => match month.orders_on(day).len() {
                    0 => {
                        let _ = write!(out, " {day:>2} ");
                    }
                    n => {
                        let _ = write!(out, "{day:>2}*{n}");
                    }
                },
            }
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out
}
