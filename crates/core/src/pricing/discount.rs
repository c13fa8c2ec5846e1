//! Quantity-tiered discount resolution.

use rust_decimal::Decimal;

/// Discount tiers as `(minimum quantity, rate)`, scanned in descending order
/// of minimum. The 1-tier floor means every quantity matches a tier.
const TIERS: [(u32, Decimal); 5] = [
    (50, Decimal::from_parts(20, 0, 0, false, 2)),
    (25, Decimal::from_parts(15, 0, 0, false, 2)),
    (10, Decimal::from_parts(10, 0, 0, false, 2)),
    (5, Decimal::from_parts(5, 0, 0, false, 2)),
    (1, Decimal::ZERO),
];

/// Resolve the discount rate for an item quantity.
///
/// The quantity is clamped to a minimum of 1 before lookup, so the result is
/// always in `[0, 1)` and the function has no error cases.
#[must_use]
pub fn discount_for(quantity: u32) -> Decimal {
    let quantity = quantity.max(1);
    TIERS
        .iter()
        .find(|(min, _)| quantity >= *min)
        .map_or(Decimal::ZERO, |(_, rate)| *rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(discount_for(1), rate(0));
        assert_eq!(discount_for(4), rate(0));
        assert_eq!(discount_for(5), rate(5));
        assert_eq!(discount_for(9), rate(5));
        assert_eq!(discount_for(10), rate(10));
        assert_eq!(discount_for(24), rate(10));
        assert_eq!(discount_for(25), rate(15));
        assert_eq!(discount_for(49), rate(15));
        assert_eq!(discount_for(50), rate(20));
        assert_eq!(discount_for(1000), rate(20));
    }

    #[test]
    fn test_zero_quantity_clamps_to_one() {
        assert_eq!(discount_for(0), rate(0));
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let mut previous = Decimal::ZERO;
        for quantity in 1..=100 {
            let current = discount_for(quantity);
            assert!(
                current >= previous,
                "discount decreased at quantity {quantity}"
            );
            previous = current;
        }
    }
}
