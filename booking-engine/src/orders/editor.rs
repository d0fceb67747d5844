//! Order editor
//!
//! Holds the in-progress edit of one order. The displayed total is
//! recomputed from the current table selection on every call; it is only
//! frozen into the record by [`OrderEditor::finish`].

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{GameTable, Order, OrderDraft, OrderStatus, PriceTable, StaffMember, TableType};
use shared::util::prefixed_id;

use crate::pricing::{apply_table_quantity, compute_total, normalize_tables, try_compute_total};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_SHORT_TEXT_LEN, parse_start_time, validate_required_text,
};

/// Id prefix of new orders
pub const ORDER_ID_PREFIX: &str = "ord";

/// Editing session for a new or existing order
#[derive(Debug, Clone)]
pub struct OrderEditor {
    draft: OrderDraft,
    prices: PriceTable,
}

impl OrderEditor {
    /// Start a blank order priced against `prices`
    pub fn new(prices: PriceTable) -> Self {
        Self {
            draft: OrderDraft::default(),
            prices,
        }
    }

    /// Start editing a saved order; the id is kept on finish
    pub fn from_order(order: &Order, prices: PriceTable) -> Self {
        Self {
            draft: OrderDraft::from(order),
            prices,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn is_new(&self) -> bool {
        self.draft.id.is_none()
    }

    pub fn set_customer(&mut self, customer_id: impl Into<String>) {
        self.draft.customer_id = customer_id.into();
    }

    pub fn set_event_location(&mut self, location: impl Into<String>) {
        self.draft.event_location = location.into();
    }

    pub fn set_event_date(&mut self, date: NaiveDate) {
        self.draft.event_date = Some(date);
    }

    pub fn set_start_time(&mut self, start_time: impl Into<String>) {
        self.draft.start_time = start_time.into();
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.draft.status = status;
    }

    /// Set how many tables of a type are booked (0 removes the type)
    pub fn set_table_quantity(&mut self, table_type: TableType, quantity: u32) {
        self.draft.tables = apply_table_quantity(&self.draft.tables, table_type, quantity);
    }

    pub fn tables(&self) -> &[GameTable] {
        &self.draft.tables
    }

    /// Assign the member if absent, unassign it (by id) if present
    ///
    /// Returns `true` when the member is assigned after the call.
    pub fn toggle_staff(&mut self, member: &StaffMember) -> bool {
        let before = self.draft.staff.len();
        self.draft.staff.retain(|s| s.id != member.id);
        if self.draft.staff.len() == before {
            self.draft.staff.push(member.clone());
            true
        } else {
            false
        }
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.draft.staff
    }

    /// Current total of the selection at the editor's tariff
    pub fn total(&self) -> f64 {
        compute_total(&self.draft.tables, &self.prices)
    }

    /// Validate and produce the order record with its total frozen
    pub fn finish(&self) -> AppResult<Order> {
        finalize_draft(&self.draft, &self.prices)
    }
}

/// Validate a draft and build the order record
///
/// The total is computed from `prices` at call time and stored; a blank
/// draft id gets a fresh `ord_` id.
pub fn finalize_draft(draft: &OrderDraft, prices: &PriceTable) -> AppResult<Order> {
    validate_required_text(&draft.customer_id, "customerId", MAX_SHORT_TEXT_LEN)?;
    let event_date = draft.event_date.ok_or_else(|| {
        AppError::new(ErrorCode::OrderDateMissing).with_detail("field", "eventDate")
    })?;
    validate_required_text(&draft.event_location, "eventLocation", MAX_ADDRESS_LEN)?;
    let start_time = parse_start_time(&draft.start_time)?;

    let tables = normalize_tables(&draft.tables);
    let total_price = try_compute_total(&tables, prices)?;

    let id = match draft.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => prefixed_id(ORDER_ID_PREFIX),
    };

    Ok(Order {
        id,
        customer_id: draft.customer_id.trim().to_string(),
        event_location: draft.event_location.trim().to_string(),
        event_date,
        start_time: start_time.format("%H:%M").to_string(),
        tables,
        staff: draft.staff.clone(),
        total_price,
        status: draft.status,
    })
}
