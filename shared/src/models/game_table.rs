//! Game Table Model (桌台类型 / 价目表)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gaming table type offered for rent
///
/// The serialized value is the human-readable name used by existing data
/// files; the stable code (`ROULETTE`, …) is accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableType {
    #[serde(rename = "Americká Ruleta", alias = "ROULETTE")]
    Roulette,
    #[serde(rename = "Black Jack", alias = "BLACKJACK")]
    Blackjack,
    #[serde(rename = "Poker", alias = "POKER")]
    Poker,
    #[serde(rename = "Kostky", alias = "DICE")]
    Dice,
    #[serde(rename = "Partyzrcadlo", alias = "PARTYZRCADLO")]
    PartyMirror,
}

impl TableType {
    /// Every table type, in catalogue order
    pub const ALL: [TableType; 5] = [
        TableType::Roulette,
        TableType::Blackjack,
        TableType::Poker,
        TableType::Dice,
        TableType::PartyMirror,
    ];

    /// Stable internal code, independent of the display language
    pub const fn code(&self) -> &'static str {
        match self {
            TableType::Roulette => "ROULETTE",
            TableType::Blackjack => "BLACKJACK",
            TableType::Poker => "POKER",
            TableType::Dice => "DICE",
            TableType::PartyMirror => "PARTYZRCADLO",
        }
    }

    /// Display label (also the persisted value)
    pub const fn label(&self) -> &'static str {
        match self {
            TableType::Roulette => "Americká Ruleta",
            TableType::Blackjack => "Black Jack",
            TableType::Poker => "Poker",
            TableType::Dice => "Kostky",
            TableType::PartyMirror => "Partyzrcadlo",
        }
    }
}

impl std::fmt::Display for TableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line item of an order: a table type and how many of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTable {
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub quantity: u32,
}

impl GameTable {
    pub fn new(table_type: TableType, quantity: u32) -> Self {
        Self {
            table_type,
            quantity,
        }
    }
}

/// Unit price per table type (CZK)
///
/// Serialized as a JSON object keyed by the table type names. A type with
/// no entry is priced at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(BTreeMap<TableType, f64>);

/// Standard tariff used on first run
pub const DEFAULT_TABLE_PRICES: [(TableType, f64); 5] = [
    (TableType::Roulette, 8000.0),
    (TableType::Blackjack, 6000.0),
    (TableType::Poker, 7000.0),
    (TableType::Dice, 5000.0),
    (TableType::PartyMirror, 4000.0),
];

impl PriceTable {
    /// Empty price table (every type priced at 0)
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Unit price for a table type, 0 when missing
    pub fn price_of(&self, table_type: TableType) -> f64 {
        self.0.get(&table_type).copied().unwrap_or(0.0)
    }

    /// Set the unit price for a table type
    pub fn set_price(&mut self, table_type: TableType, price: f64) {
        self.0.insert(table_type, price);
    }

    /// Builder-style variant of [`PriceTable::set_price`]
    pub fn with_price(mut self, table_type: TableType, price: f64) -> Self {
        self.set_price(table_type, price);
        self
    }

    /// Walk every table type in catalogue order, including missing ones
    pub fn iter(&self) -> impl Iterator<Item = (TableType, f64)> + '_ {
        TableType::ALL.into_iter().map(|t| (t, self.price_of(t)))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self(DEFAULT_TABLE_PRICES.into_iter().collect())
    }
}

impl FromIterator<(TableType, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (TableType, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
