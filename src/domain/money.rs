//! Monetary rounding policy.
//!
//! All monetary results are rounded to 2 decimal places using
//! half-away-from-zero, so 4.645 rounds to 4.65. Tests pin exact values
//! against this policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to cents, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
