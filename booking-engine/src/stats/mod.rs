//! Dashboard statistics over the order collection

pub mod aggregator;

pub use aggregator::{
    DashboardStats, NOT_APPLICABLE, compute_stats, most_popular_table, table_demand,
};
