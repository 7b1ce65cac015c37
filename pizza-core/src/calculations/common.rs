//! Money helpers shared by pricing and bill calculation.

use rust_decimal::Decimal;

/// Rounds an amount to cents using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(9.994)), dec!(9.99));
/// assert_eq!(round_half_up(dec!(9.995)), dec!(10.00));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
