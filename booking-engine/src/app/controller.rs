//! Booking controller
//!
//! Owns the application state, the store and the view state. Every
//! mutation validates its input, updates the in-memory collections and then
//! commits the touched dataset. A failed commit is logged and the session
//! keeps working from memory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Customer, CustomerCreate, Order, OrderDraft, PriceTable, StaffMember};
use shared::util::prefixed_id;

use super::state::AppState;
use crate::calendar::{CalendarMonth, MonthCursor, group_by_day};
use crate::orders::{OrderEditor, finalize_draft};
use crate::query::{OrderQuery, StatusFilter, customer_name};
use crate::stats::{DashboardStats, compute_stats};
use crate::store::{DatasetKey, KeyValueStore, StorageResult};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_price, validate_required_text,
    validate_text_len,
};

const CUSTOMER_ID_PREFIX: &str = "cust";
const STAFF_ID_PREFIX: &str = "staff";

/// Which order view is shown next to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

/// Everything the presentation layer renders for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BookingView<'a> {
    pub stats: DashboardStats,
    pub content: ViewContent<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent<'a> {
    List(Vec<&'a Order>),
    Calendar(CalendarMonth<'a>),
}

/// Single-user controller over the booking datasets
pub struct BookingController<S: KeyValueStore> {
    store: S,
    state: AppState,
    mode: ViewMode,
    query: OrderQuery,
    month: MonthCursor,
}

impl<S: KeyValueStore> BookingController<S> {
    /// Load every dataset from the store
    ///
    /// Missing or unreadable datasets fall back to the demo data when
    /// `seed_demo_data` is set, otherwise to empty collections and the
    /// standard tariff. The calendar opens on the month of `today`.
    pub fn load(store: S, seed_demo_data: bool, today: NaiveDate) -> Self {
        let defaults = if seed_demo_data {
            AppState::demo(today)
        } else {
            AppState::empty()
        };
        let state = AppState::load(&store, defaults);
        Self::with_state(store, state, today)
    }

    /// Wrap an already built state without reading the store
    pub fn with_state(store: S, state: AppState, today: NaiveDate) -> Self {
        Self {
            store,
            state,
            mode: ViewMode::default(),
            query: OrderQuery::default(),
            month: MonthCursor::containing(today),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    pub fn customers(&self) -> &[Customer] {
        &self.state.customers
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.state.staff
    }

    pub fn prices(&self) -> &PriceTable {
        &self.state.prices
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.state.orders.iter().find(|o| o.id == id)
    }

    // ========== Orders ==========

    /// Editor for a new order, or for a saved one when `order_id` is given
    pub fn open_editor(&self, order_id: Option<&str>) -> AppResult<OrderEditor> {
        let prices = self.state.prices.clone();
        match order_id {
            None => Ok(OrderEditor::new(prices)),
            Some(id) => self
                .order(id)
                .map(|order| OrderEditor::from_order(order, prices))
                .ok_or_else(|| order_not_found(id)),
        }
    }

    /// Validate, price at the current tariff and upsert by id
    ///
    /// The stored `total_price` is frozen here; later tariff changes leave
    /// it untouched.
    pub fn save_order(&mut self, draft: OrderDraft) -> AppResult<Order> {
        let order = finalize_draft(&draft, &self.state.prices)?;

        match self.state.orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => {
                *existing = order.clone();
                tracing::info!(order_id = %order.id, total = order.total_price, "Order updated");
            }
            None => {
                self.state.orders.push(order.clone());
                tracing::info!(order_id = %order.id, total = order.total_price, "Order created");
            }
        }

        self.commit(DatasetKey::Orders);
        Ok(order)
    }

    pub fn delete_order(&mut self, id: &str) -> AppResult<Order> {
        let pos = self
            .state
            .orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| order_not_found(id))?;
        let removed = self.state.orders.remove(pos);
        tracing::info!(order_id = %id, "Order deleted");

        self.commit(DatasetKey::Orders);
        Ok(removed)
    }

    // ========== Customers ==========

    /// Register a customer; name and contact person are required
    pub fn add_customer(&mut self, payload: CustomerCreate) -> AppResult<Customer> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.contact_person, "contactPerson", MAX_NAME_LEN)?;
        validate_text_len(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_text_len(&payload.email, "email", MAX_EMAIL_LEN)?;

        let payload = CustomerCreate {
            name: payload.name.trim().to_string(),
            contact_person: payload.contact_person.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            email: payload.email.trim().to_string(),
        };
        let customer = payload.into_customer(prefixed_id(CUSTOMER_ID_PREFIX));
        self.state.customers.push(customer.clone());
        tracing::info!(customer_id = %customer.id, name = %customer.name, "Customer created");

        self.commit(DatasetKey::Customers);
        Ok(customer)
    }

    /// Display name for a customer id, with the unknown-customer fallback
    pub fn customer_name(&self, customer_id: &str) -> &str {
        customer_name(&self.state.customers, customer_id)
    }

    // ========== Staff ==========

    pub fn add_staff(&mut self, name: &str) -> AppResult<StaffMember> {
        validate_required_text(name, "name", MAX_NAME_LEN)?;

        let member = StaffMember::new(prefixed_id(STAFF_ID_PREFIX), name.trim());
        self.state.staff.push(member.clone());
        tracing::info!(staff_id = %member.id, name = %member.name, "Staff member added");

        self.commit(DatasetKey::Staff);
        Ok(member)
    }

    /// Remove a member from the roster; orders keep their embedded copies
    pub fn delete_staff(&mut self, id: &str) -> AppResult<StaffMember> {
        let pos = self
            .state
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::StaffNotFound, format!("Staff member not found: {id}"))
                    .with_detail("staffId", id)
            })?;
        let removed = self.state.staff.remove(pos);
        tracing::info!(staff_id = %id, "Staff member removed");

        self.commit(DatasetKey::Staff);
        Ok(removed)
    }

    // ========== Prices ==========

    /// Replace the tariff
    ///
    /// Every table type gets an explicit entry (missing ones at 0). Saved
    /// orders are not re-priced.
    pub fn save_prices(&mut self, prices: PriceTable) -> AppResult<()> {
        for (table_type, price) in prices.iter() {
            validate_price(price, table_type.label())
                .map_err(|e| e.with_detail("tableType", table_type.code()))?;
        }

        self.state.prices = prices.iter().collect();
        tracing::info!("Table prices updated");

        self.commit(DatasetKey::TablePrices);
        Ok(())
    }

    // ========== View state ==========

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn query(&self) -> &OrderQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn previous_month(&mut self) -> MonthCursor {
        self.month = self.month.previous();
        self.month
    }

    pub fn next_month(&mut self) -> MonthCursor {
        self.month = self.month.next();
        self.month
    }

    pub fn show_month(&mut self, month: MonthCursor) {
        self.month = month;
    }

    // ========== Derived outputs ==========

    pub fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        compute_stats(&self.state.orders, today)
    }

    /// Orders matching the current status filter and search, by date
    pub fn visible_orders(&self) -> Vec<&Order> {
        self.query.apply(&self.state.orders, &self.state.customers)
    }

    /// Orders of the displayed month grouped by day
    pub fn calendar(&self) -> CalendarMonth<'_> {
        group_by_day(&self.state.orders, self.month)
    }

    /// Dashboard plus the list or calendar, per the current view mode
    pub fn view(&self, today: NaiveDate) -> BookingView<'_> {
        let content = match self.mode {
            ViewMode::List => ViewContent::List(self.visible_orders()),
            ViewMode::Calendar => ViewContent::Calendar(self.calendar()),
        };
        BookingView {
            stats: self.dashboard(today),
            content,
        }
    }

    // ========== Persistence ==========

    /// Write all four datasets (first run, or after a failed commit)
    ///
    /// Stops at the first failed write and reports it with the dataset name.
    pub fn commit_all(&self) -> AppResult<()> {
        for key in DatasetKey::ALL {
            self.write_dataset(key)
                .map_err(|e| AppError::from(e).with_detail("dataset", key.as_str()))?;
        }
        tracing::info!("All datasets committed");
        Ok(())
    }

    fn write_dataset(&self, key: DatasetKey) -> StorageResult<()> {
        let name = key.as_str();
        match key {
            DatasetKey::Orders => self.store.write_json(name, &self.state.orders),
            DatasetKey::Customers => self.store.write_json(name, &self.state.customers),
            DatasetKey::Staff => self.store.write_json(name, &self.state.staff),
            DatasetKey::TablePrices => self.store.write_json(name, &self.state.prices),
        }
    }

    /// Write one dataset; failures are logged, never returned
    fn commit(&self, key: DatasetKey) {
        let name = key.as_str();
        match self.write_dataset(key) {
            Ok(()) => tracing::debug!(dataset = %name, "Dataset committed"),
            Err(e) => tracing::error!(
                dataset = %name,
                error = %e,
                "Failed to persist dataset, keeping in-memory state"
            ),
        }
    }
}

fn order_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {id}"))
        .with_detail("orderId", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalStore;
    use shared::models::{GameTable, OrderStatus, TableType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn controller() -> BookingController<LocalStore> {
        let store = LocalStore::open_in_memory().unwrap();
        BookingController::load(store, true, today())
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_id: "cust_1".to_string(),
            event_location: "Zámek Zbiroh".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 5, 20),
            tables: vec![GameTable::new(TableType::Roulette, 2)],
            ..OrderDraft::default()
        }
    }

    #[test]
    fn test_load_seeds_demo_data() {
        let ctl = controller();
        assert_eq!(ctl.orders().len(), 2);
        assert_eq!(ctl.customers().len(), 2);
        assert_eq!(ctl.staff().len(), 3);
        assert_eq!(ctl.month(), MonthCursor::new(2024, 5).unwrap());
    }

    #[test]
    fn test_load_without_seed_is_empty() {
        let store = LocalStore::open_in_memory().unwrap();
        let ctl = BookingController::load(store, false, today());
        assert!(ctl.orders().is_empty());
        assert!(ctl.customers().is_empty());
        assert_eq!(ctl.prices(), &PriceTable::default());
    }

    #[test]
    fn test_save_order_creates_then_updates() {
        let mut ctl = controller();
        let created = ctl.save_order(draft()).unwrap();
        assert_eq!(created.total_price, 16000.0);
        assert_eq!(ctl.orders().len(), 3);

        let mut edit = OrderDraft::from(&created);
        edit.status = OrderStatus::Confirmed;
        let updated = ctl.save_order(edit).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(ctl.orders().len(), 3);
        assert_eq!(ctl.order(&created.id).unwrap().status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_save_order_rejects_missing_location() {
        let mut ctl = controller();
        let mut bad = draft();
        bad.event_location = "  ".to_string();
        let err = ctl.save_order(bad).unwrap_err();
        assert_eq!(err.detail_str("field"), Some("eventLocation"));
        assert_eq!(ctl.orders().len(), 2);
    }

    #[test]
    fn test_delete_order() {
        let mut ctl = controller();
        let removed = ctl.delete_order("ord_1").unwrap();
        assert_eq!(removed.id, "ord_1");
        assert!(ctl.order("ord_1").is_none());

        let err = ctl.delete_order("ord_1").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_open_editor() {
        let ctl = controller();
        assert!(ctl.open_editor(None).unwrap().is_new());
        let editor = ctl.open_editor(Some("ord_2")).unwrap();
        assert_eq!(editor.draft().id.as_deref(), Some("ord_2"));
        assert_eq!(
            ctl.open_editor(Some("ord_9")).unwrap_err().code,
            ErrorCode::OrderNotFound
        );
    }

    #[test]
    fn test_add_customer_requires_contact() {
        let mut ctl = controller();
        let err = ctl
            .add_customer(CustomerCreate {
                name: "Grand Hotel".to_string(),
                ..CustomerCreate::default()
            })
            .unwrap_err();
        assert_eq!(err.detail_str("field"), Some("contactPerson"));

        let customer = ctl
            .add_customer(CustomerCreate {
                name: " Grand Hotel ".to_string(),
                contact_person: "Karel Dvořák".to_string(),
                ..CustomerCreate::default()
            })
            .unwrap();
        assert!(customer.id.starts_with("cust_"));
        assert_eq!(customer.name, "Grand Hotel");
        assert_eq!(ctl.customer_name(&customer.id), "Grand Hotel");
    }

    #[test]
    fn test_staff_roster() {
        let mut ctl = controller();
        assert!(ctl.add_staff("   ").is_err());

        let member = ctl.add_staff(" Tomáš Malý ").unwrap();
        assert!(member.id.starts_with("staff_"));
        assert_eq!(member.name, "Tomáš Malý");
        assert_eq!(ctl.staff().len(), 4);

        // removing staff_1 keeps the copy embedded in ord_1
        ctl.delete_staff("staff_1").unwrap();
        assert!(ctl.order("ord_1").unwrap().has_staff("staff_1"));
        assert_eq!(
            ctl.delete_staff("staff_1").unwrap_err().code,
            ErrorCode::StaffNotFound
        );
    }

    #[test]
    fn test_save_prices_does_not_reprice_orders() {
        let mut ctl = controller();
        let before = ctl.order("ord_1").unwrap().total_price;

        ctl.save_prices(PriceTable::empty().with_price(TableType::Blackjack, 10000.0))
            .unwrap();
        assert_eq!(ctl.order("ord_1").unwrap().total_price, before);
        assert_eq!(ctl.prices().price_of(TableType::Roulette), 0.0);
        assert_eq!(ctl.prices().iter().count(), TableType::ALL.len());

        let err = ctl
            .save_prices(PriceTable::default().with_price(TableType::Poker, -5.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PriceInvalid);
        assert_eq!(err.detail_str("tableType"), Some("POKER"));
        assert_eq!(ctl.prices().price_of(TableType::Blackjack), 10000.0);
    }

    #[test]
    fn test_save_prices_rejects_amounts_beyond_limit() {
        let mut ctl = controller();
        for too_large in [1e30, 5e28] {
            let err = ctl
                .save_prices(PriceTable::default().with_price(TableType::Poker, too_large))
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::PriceInvalid);
            assert_eq!(err.detail_str("tableType"), Some("POKER"));
        }
        assert_eq!(ctl.prices(), &PriceTable::default());
    }

    #[test]
    fn test_save_order_fails_on_unrepresentable_stored_price() {
        // a tariff read from a hand-edited file skips save_prices validation
        let store = LocalStore::open_in_memory().unwrap();
        let state = AppState {
            prices: PriceTable::default().with_price(TableType::Poker, 5e28),
            ..AppState::empty()
        };
        let mut ctl = BookingController::with_state(store, state, today());

        let mut order = draft();
        order.tables = vec![GameTable::new(TableType::Poker, 2)];
        let err = ctl.save_order(order).unwrap_err();
        assert_eq!(err.code, ErrorCode::PriceInvalid);
        assert!(ctl.orders().is_empty());
    }

    #[test]
    fn test_view_switches_content() {
        let mut ctl = controller();
        match ctl.view(today()).content {
            ViewContent::List(orders) => assert_eq!(orders.len(), 2),
            ViewContent::Calendar(_) => panic!("expected list"),
        }

        ctl.set_view_mode(ViewMode::Calendar);
        match ctl.view(today()).content {
            ViewContent::Calendar(month) => assert_eq!(month.order_count(), 2),
            ViewContent::List(_) => panic!("expected calendar"),
        }
    }

    #[test]
    fn test_month_navigation() {
        let mut ctl = controller();
        assert_eq!(ctl.previous_month(), MonthCursor::new(2024, 4).unwrap());
        assert_eq!(ctl.next_month(), MonthCursor::new(2024, 5).unwrap());
        ctl.show_month(MonthCursor::new(2025, 1).unwrap());
        assert_eq!(ctl.calendar().order_count(), 0);
    }

    #[test]
    fn test_view_mode_wire_values() {
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
        assert_eq!(serde_json::to_string(&ViewMode::Calendar).unwrap(), "\"calendar\"");
    }
}
