//! Money conversion helpers.
//!
//! Prices are stored and totalled as [`Decimal`] in the currency's standard
//! unit (dollars). The payment processor wants amounts in the smallest unit
//! (cents), so checkout converts at the last moment.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert a decimal dollar amount to minor currency units (cents).
///
/// Rounds halves away from zero, matching the rounding the payment flow has
/// always used. Returns `None` if the result does not fit in an `i64`.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Convert a raw floating-point dollar amount to minor currency units.
///
/// Used by the raw payment-intent endpoint, where the client submits the
/// amount as a JSON number. Returns `None` for non-finite input or overflow.
#[must_use]
pub fn dollars_to_minor_units(amount: f64) -> Option<i64> {
    if !amount.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(amount).and_then(to_minor_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn whole_dollars() {
        assert_eq!(to_minor_units(dec("10.00")), Some(1000));
        assert_eq!(to_minor_units(dec("0")), Some(0));
    }

    #[test]
    fn fractional_cents_round_half_away() {
        assert_eq!(to_minor_units(dec("29.99")), Some(2999));
        assert_eq!(to_minor_units(dec("0.005")), Some(1));
        assert_eq!(to_minor_units(dec("-0.005")), Some(-1));
    }

    #[test]
    fn reference_cart_total() {
        // 29.99 * 2 + 10.00 = 69.98
        let total = dec("29.99") * Decimal::from(2) + dec("10.00");
        assert_eq!(total, dec("69.98"));
        assert_eq!(to_minor_units(total), Some(6998));
    }

    #[test]
    fn float_amounts() {
        assert_eq!(dollars_to_minor_units(69.98), Some(6998));
        assert_eq!(dollars_to_minor_units(0.1 + 0.2), Some(30));
        assert_eq!(dollars_to_minor_units(f64::NAN), None);
        assert_eq!(dollars_to_minor_units(f64::INFINITY), None);
    }
}
