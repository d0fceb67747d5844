//! Application state (四个数据集)

use chrono::NaiveDate;
use shared::models::{Customer, Order, PriceTable, StaffMember};

use super::seed;
use crate::store::{DatasetKey, KeyValueStore};

/// The four persisted collections of the booking manager
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub staff: Vec<StaffMember>,
    pub prices: PriceTable,
}

impl AppState {
    /// No records, standard tariff
    pub fn empty() -> Self {
        Self::default()
    }

    /// Demo customers, staff and orders around `today`, standard tariff
    pub fn demo(today: NaiveDate) -> Self {
        let prices = PriceTable::default();
        Self {
            orders: seed::demo_orders(today, &prices),
            customers: seed::demo_customers(),
            staff: seed::demo_staff(),
            prices,
        }
    }

    /// Read every dataset, each falling back to `defaults` on its own
    pub fn load<S: KeyValueStore>(store: &S, defaults: AppState) -> Self {
        let AppState {
            orders,
            customers,
            staff,
            prices,
        } = defaults;

        let state = Self {
            orders: store.read_or(DatasetKey::Orders.as_str(), orders),
            customers: store.read_or(DatasetKey::Customers.as_str(), customers),
            staff: store.read_or(DatasetKey::Staff.as_str(), staff),
            prices: store.read_or(DatasetKey::TablePrices.as_str(), prices),
        };
        tracing::info!(
            orders = state.orders.len(),
            customers = state.customers.len(),
            staff = state.staff.len(),
            "Application state loaded"
        );
        state
    }
}
