//! Money helpers shared by every cost component.
//!
//! All amounts are rounded to two decimal places with half-up (away from
//! zero) rounding as soon as they are derived, so per-line figures add up
//! exactly to the aggregate totals. Arithmetic saturates at
//! `Decimal::MAX` / `Decimal::MIN` instead of overflowing.

use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds to exactly two decimal places, half away from zero.
///
/// The result always carries a scale of 2 so it prints as `1000.00`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use breakdown::breakdown::round_money;
///
/// assert_eq!(round_money(dec!(123.455)).to_string(), "123.46");
/// assert_eq!(round_money(dec!(1000)).to_string(), "1000.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Back-calculates the GST-exclusive base of a GST-inclusive amount.
///
/// `amount / (1 + percentage / 100)`, rounded. A divisor of zero (a GST
/// percentage of -100) yields zero.
pub fn gst_exclusive(amount: Decimal, percentage: Decimal) -> Decimal {
    let divisor = Decimal::ONE + percentage / HUNDRED;
    if divisor.is_zero() {
        return Decimal::ZERO;
    }
    let quotient = amount.checked_div(divisor).unwrap_or_else(|| {
        if amount.is_sign_negative() == divisor.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    });
    round_money(quotient)
}

/// `percentage` percent of `base`, rounded.
///
/// Used both for GST on a base and for the display-cost discount.
pub fn percent_of(base: Decimal, percentage: Decimal) -> Decimal {
    round_money(base.saturating_mul(percentage) / HUNDRED)
}
