//! Calendar month grouping
//!
//! The grid starts on Monday: day 1 falling on a Sunday gets six leading
//! blank cells, on a Monday none.

use chrono::{Datelike, Months, NaiveDate};
use shared::models::Order;
use std::collections::BTreeMap;

/// A displayed calendar month
///
/// Always valid: it is stored as the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// `None` for a month outside 1..=12 or a year chrono cannot represent
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Month before; stays put at the lower end of the date range
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Month after; stays put at the upper end of the date range
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            // December of the last representable year
            None => 31,
        }
    }

    /// Blank cells before day 1 in a Monday-first grid (0..=6)
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_monday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl std::fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Orders of one month bucketed by day of month
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub month: MonthCursor,
    pub leading_blanks: u32,
    /// Every day `1..=days_in_month` is present, possibly empty
    pub days: BTreeMap<u32, Vec<&'a Order>>,
}

impl<'a> CalendarMonth<'a> {
    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Orders on a day, in collection order (empty outside the month)
    pub fn orders_on(&self, day: u32) -> &[&'a Order] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn order_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Grid cells in reading order: `None` for leading blanks, then each day
    pub fn cells(&self) -> Vec<Option<u32>> {
        let blanks = std::iter::repeat_n(None, self.leading_blanks as usize);
        blanks.chain(self.days.keys().copied().map(Some)).collect()
    }

    /// Grid rows of seven cells; the last row is padded with `None`
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        self.cells()
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Bucket the orders dated within `month` by day of month
pub fn group_by_day(orders: &[Order], month: MonthCursor) -> CalendarMonth<'_> {
    let mut days: BTreeMap<u32, Vec<&Order>> =
        (1..=month.days_in_month()).map(|d| (d, Vec::new())).collect();

    for order in orders.iter().filter(|o| month.contains(o.event_date)) {
        days.entry(order.event_date.day()).or_default().push(order);
    }

    tracing::debug!(month = %month, orders = orders.len(), "Calendar grouped");
    CalendarMonth {
        month,
        leading_blanks: month.leading_blanks(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderStatus;

    fn order(id: &str, day: &str) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "cust_1".to_string(),
            event_location: "Praha".to_string(),
            event_date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            start_time: "19:00".to_string(),
            tables: Vec::new(),
            staff: Vec::new(),
            total_price: 0.0,
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_month_cursor_validation() {
        assert!(MonthCursor::new(2024, 0).is_none());
        assert!(MonthCursor::new(2024, 13).is_none());
        let may = MonthCursor::new(2024, 5).unwrap();
        assert_eq!((may.year(), may.month()), (2024, 5));
        assert_eq!(may.to_string(), "2024-05");
    }

    #[test]
    fn test_navigation_rolls_over_year() {
        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthCursor::new(2023, 12).unwrap());

        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2025, 1).unwrap());
        assert_eq!(dec.next().previous(), dec);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCursor::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCursor::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(MonthCursor::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_leading_blanks_monday_first() {
        // 2024-09-01 is a Sunday
        assert_eq!(MonthCursor::new(2024, 9).unwrap().leading_blanks(), 6);
        // 2024-01-01 is a Monday
        assert_eq!(MonthCursor::new(2024, 1).unwrap().leading_blanks(), 0);
        // 2024-05-01 is a Wednesday
        assert_eq!(MonthCursor::new(2024, 5).unwrap().leading_blanks(), 2);
    }

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(MonthCursor::containing(date), MonthCursor::new(2024, 5).unwrap());
    }

    #[test]
    fn test_group_by_day() {
        let orders = vec![
            order("ord_1", "2024-05-10"),
            order("ord_2", "2024-06-10"),
            order("ord_3", "2024-05-10"),
            order("ord_4", "2024-05-31"),
            order("ord_5", "2023-05-10"),
        ];
        let may = group_by_day(&orders, MonthCursor::new(2024, 5).unwrap());

        assert_eq!(may.days_in_month(), 31);
        let on_tenth: Vec<_> = may.orders_on(10).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(on_tenth, vec!["ord_1", "ord_3"]);
        assert_eq!(may.orders_on(31).len(), 1);
        assert!(may.orders_on(1).is_empty());
        assert!(may.orders_on(32).is_empty());

        // June and the previous year's May are not in any bucket
        assert_eq!(may.order_count(), 3);
    }

    #[test]
    fn test_grid_layout() {
        let orders: Vec<Order> = Vec::new();
        let sept = group_by_day(&orders, MonthCursor::new(2024, 9).unwrap());

        let cells = sept.cells();
        assert_eq!(cells.len(), 6 + 30);
        assert_eq!(cells[5], None);
        assert_eq!(cells[6], Some(1));

        let weeks = sept.weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][6], Some(1));
        assert_eq!(weeks[5][0], Some(30));
        assert_eq!(weeks[5][1], None);
    }
}
