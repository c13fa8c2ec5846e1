//! Money rounding and minor-unit conversion.
//!
//! All amounts are `Decimal` in natural currency units. Decimal arithmetic is
//! exact, so rounding happens only where the pipeline says it does: at the
//! cent boundary after each multiplication or accumulation step.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, half away from zero.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a 2-dp amount to integer minor units (cents) for the payment
/// gateway. Returns `None` if the amount does not fit in an `i64`.
#[must_use]
pub fn minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
