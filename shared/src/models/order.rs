//! Order Model (活动订单)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GameTable, StaffMember, TableType};

/// Start time pre-filled for new orders
pub const DEFAULT_START_TIME: &str = "19:00";

/// Order status
///
/// Persisted as the human-readable value of existing data files; the
/// stable code (`PENDING`, …) is accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 待确认
    #[default]
    #[serde(rename = "Čekající", alias = "PENDING")]
    Pending,
    #[serde(rename = "Potvrzeno", alias = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "Dokončeno", alias = "COMPLETED")]
    Completed,
    #[serde(rename = "Zrušeno", alias = "CANCELLED")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Stable internal code, independent of the display language
    pub const fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Display label (also the persisted value)
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Čekající",
            OrderStatus::Confirmed => "Potvrzeno",
            OrderStatus::Completed => "Dokončeno",
            OrderStatus::Cancelled => "Zrušeno",
        }
    }

    /// Still expected to take place (neither finished nor called off)
    pub const fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Booked rental event
///
/// `total_price` is frozen when the order is saved; later tariff changes
/// do not re-price it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Customer reference (may dangle)
    pub customer_id: String,
    pub event_location: String,
    /// Event date (YYYY-MM-DD)
    pub event_date: NaiveDate,
    /// Start time (HH:MM)
    pub start_time: String,
    pub tables: Vec<GameTable>,
    /// Embedded copies of assigned staff
    pub staff: Vec<StaffMember>,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Quantity booked for a table type (0 when absent)
    pub fn table_quantity(&self, table_type: TableType) -> u32 {
        self.tables
            .iter()
            .find(|t| t.table_type == table_type)
            .map(|t| t.quantity)
            .unwrap_or(0)
    }

    pub fn has_staff(&self, staff_id: &str) -> bool {
        self.staff.iter().any(|s| s.id == staff_id)
    }
}

/// Order edit payload (form state before save)
///
/// `id` is `None` for a new order. The total is not part of the draft: it
/// is computed from `tables` when the order is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default)]
    pub tables: Vec<GameTable>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub status: OrderStatus,
}

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            id: None,
            customer_id: String::new(),
            event_location: String::new(),
            event_date: None,
            start_time: default_start_time(),
            tables: Vec::new(),
            staff: Vec::new(),
            status: OrderStatus::Pending,
        }
    }
}

impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        Self {
            id: Some(order.id.clone()),
            customer_id: order.customer_id.clone(),
            event_location: order.event_location.clone(),
            event_date: Some(order.event_date),
            start_time: order.start_time.clone(),
            tables: order.tables.clone(),
            staff: order.staff.clone(),
            status: order.status,
        }
    }
}
