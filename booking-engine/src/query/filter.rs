//! Order list query: status filter, text search, date sort

use serde::de::{self, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared::models::customer::UNKNOWN_CUSTOMER;
use shared::models::{Customer, Order, OrderStatus};
use std::collections::HashMap;

/// Wire value of [`StatusFilter::All`]
pub const ALL_STATUSES: &str = "ALL";

/// Status constraint of the order list
///
/// Serialized as `"ALL"` or the status wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatusFilter::All => serializer.serialize_str(ALL_STATUSES),
            StatusFilter::Only(status) => status.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == ALL_STATUSES {
            return Ok(StatusFilter::All);
        }
        let value: de::value::StrDeserializer<'_, de::value::Error> = raw.as_str().into_deserializer();
        OrderStatus::deserialize(value)
            .map(StatusFilter::Only)
            .map_err(de::Error::custom)
    }
}

/// Current list query: status filter plus free-text search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub search: String,
}

impl OrderQuery {
    pub fn apply<'a>(&self, orders: &'a [Order], customers: &[Customer]) -> Vec<&'a Order> {
        filter_and_sort(orders, customers, self.status, &self.search)
    }
}

/// Filter orders by status and search text, then sort by event date
///
/// The search is a case-insensitive substring match against the customer's
/// name or the event location; an empty search matches everything. A
/// dangling customer id only fails the name side. The sort is stable, so
/// orders on the same date keep their collection order.
pub fn filter_and_sort<'a>(
    orders: &'a [Order],
    customers: &[Customer],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Order> {
    let needle = search.to_lowercase();
    let names = customer_index(customers);

    let mut visible: Vec<&Order> = orders
        .iter()
        .filter(|o| status.matches(o.status))
        .filter(|o| {
            if needle.is_empty() {
                return true;
            }
            let name_hit = names
                .get(o.customer_id.as_str())
                .is_some_and(|c| c.name.to_lowercase().contains(&needle));
            name_hit || o.event_location.to_lowercase().contains(&needle)
        })
        .collect();

    visible.sort_by_key(|o| o.event_date);
    visible
}

/// Display name of a customer, [`UNKNOWN_CUSTOMER`] when the id dangles
pub fn customer_name<'a>(customers: &'a [Customer], customer_id: &str) -> &'a str {
    customers
        .iter()
        .find(|c| c.id == customer_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CUSTOMER)
}

/// Id lookup; the first customer wins on duplicate ids
fn customer_index(customers: &[Customer]) -> HashMap<&str, &Customer> {
    let mut index = HashMap::with_capacity(customers.len());
    for customer in customers {
        index.entry(customer.id.as_str()).or_insert(customer);
    }
    index
}
