//! Display formatting for amounts

use rust_decimal::prelude::*;

/// Non-breaking space used by Czech number formatting
const NBSP: char = '\u{a0}';

/// Format an amount as whole Czech crowns, e.g. `25000 → "25 000 Kč"`
///
/// Thousands are grouped with a non-breaking space; the amount is rounded
/// half away from zero. Non-finite input formats as 0.
pub fn format_czk(amount: f64) -> String {
    let whole = Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or_default();

    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }
    grouped.push(NBSP);
    grouped.push_str("Kč");
    grouped
}
