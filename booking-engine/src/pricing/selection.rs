//! Table selection edits
//!
//! Every edit goes through [`apply_table_quantity`] so a selection never
//! holds two entries of one type or an entry with quantity 0.

use shared::models::{GameTable, TableType};

/// Set the quantity of one table type in a selection
///
/// - `quantity > 0`: updates the existing entry in place, or appends one
/// - `quantity == 0`: removes the entry
pub fn apply_table_quantity(
    tables: &[GameTable],
    table_type: TableType,
    quantity: u32,
) -> Vec<GameTable> {
    let exists = tables.iter().any(|t| t.table_type == table_type);

    if quantity == 0 {
        return tables
            .iter()
            .filter(|t| t.table_type != table_type)
            .copied()
            .collect();
    }

    if exists {
        tables
            .iter()
            .map(|t| {
                if t.table_type == table_type {
                    GameTable::new(table_type, quantity)
                } else {
                    *t
                }
            })
            .collect()
    } else {
        let mut next = tables.to_vec();
        next.push(GameTable::new(table_type, quantity));
        next
    }
}

/// Rebuild a selection that may come from outside the editor
///
/// Entries are replayed through [`apply_table_quantity`]: zero quantities
/// disappear and a repeated type keeps its last quantity at the position of
/// its first occurrence.
pub fn normalize_tables(tables: &[GameTable]) -> Vec<GameTable> {
    tables.iter().fold(Vec::new(), |acc, t| {
        apply_table_quantity(&acc, t.table_type, t.quantity)
    })
}
