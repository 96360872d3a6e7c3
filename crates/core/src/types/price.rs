//! Price display helpers.
//!
//! Prices are held as [`Decimal`] so that line totals and cart subtotals add
//! up exactly. The catalog only sells in US dollars.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as a dollar string with two decimal places (e.g. `$12.50`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}
