//! Demo data for a first run
//!
//! Event dates are relative to the day the data is created. Totals are
//! computed from the standard tariff so the seeded orders satisfy the same
//! pricing rule as saved ones.

use chrono::{Days, NaiveDate};
use shared::models::{
    Customer, GameTable, Order, OrderStatus, PriceTable, StaffMember, TableType,
};

use crate::pricing::compute_total;

pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust_1".to_string(),
            name: "Casino Royale s.r.o.".to_string(),
            contact_person: "Jan Novák".to_string(),
            phone: "+420 123 456 789".to_string(),
            email: "jan.novak@casinoroyale.cz".to_string(),
        },
        Customer {
            id: "cust_2".to_string(),
            name: "Event Agency Prague".to_string(),
            contact_person: "Eva Dvořáková".to_string(),
            phone: "+420 987 654 321".to_string(),
            email: "eva@eventprague.com".to_string(),
        },
    ]
}

pub fn demo_staff() -> Vec<StaffMember> {
    vec![
        StaffMember::new("staff_1", "Petr Král"),
        StaffMember::new("staff_2", "Lucie Černá"),
        StaffMember::new("staff_3", "Martin Bílý"),
    ]
}

/// Two bookings: tomorrow (confirmed) and in a week (pending)
pub fn demo_orders(today: NaiveDate, prices: &PriceTable) -> Vec<Order> {
    let staff = demo_staff();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let next_week = today.checked_add_days(Days::new(7)).unwrap_or(today);

    let hilton_tables = vec![
        GameTable::new(TableType::Blackjack, 2),
        GameTable::new(TableType::Poker, 1),
    ];
    let arena_tables = vec![
        GameTable::new(TableType::Roulette, 1),
        GameTable::new(TableType::Dice, 1),
    ];

    vec![
        Order {
            id: "ord_1".to_string(),
            customer_id: "cust_1".to_string(),
            event_location: "Hotel Hilton, Praha".to_string(),
            event_date: tomorrow,
            start_time: "19:00".to_string(),
            total_price: compute_total(&hilton_tables, prices),
            tables: hilton_tables,
            staff: staff[..2].to_vec(),
            status: OrderStatus::Confirmed,
        },
        Order {
            id: "ord_2".to_string(),
            customer_id: "cust_2".to_string(),
            event_location: "O2 Arena, Praha".to_string(),
            event_date: next_week,
            start_time: "20:00".to_string(),
            total_price: compute_total(&arena_tables, prices),
            tables: arena_tables,
            staff: staff[2..].to_vec(),
            status: OrderStatus::Pending,
        },
    ]
}
