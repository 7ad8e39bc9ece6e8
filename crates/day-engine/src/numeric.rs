//! Rounding and truncation for displaying fractional offsets.
//!
//! The two helpers deliberately disagree on non-positive `decimals`:
//! [`round`] uses `|decimals|` as the scale, [`truncate`] clamps it to zero.
//! So `round(1.99, -1)` is `2.0` while `truncate(1.99, -1)` is `1.0`.

/// Move the decimal point of `value` by `exponent` places.
///
/// Works on the shortest round-trip decimal text of `value`, so `1.555`
/// shifted by 2 is exactly `155.5` instead of `155.49999999999997`.
fn shift(value: f64, exponent: i32) -> f64 {
    format!("{value}e{exponent}")
        .parse()
        .unwrap_or_else(|_| value * 10f64.powi(exponent))
}

/// Round `value` to `decimals` places, half-up on the magnitude.
///
/// A negative `decimals` scales by its absolute value rather than rounding to
/// tens or hundreds.
///
/// # Examples
///
/// ```
/// use day_engine::numeric::round;
///
/// assert_eq!(round(1.555, 2), 1.56);
/// assert_eq!(round(1.99, -1), 2.0);
/// ```
pub fn round(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals.saturating_abs();
    shift(shift(value, places).round(), -places)
}

/// Truncate `value` toward zero at `decimals` places.
///
/// A non-positive `decimals` truncates to a whole number.
///
/// # Examples
///
/// ```
/// use day_engine::numeric::truncate;
///
/// assert_eq!(truncate(1.999, 1), 1.9);
/// assert_eq!(truncate(1.99, -1), 1.0);
/// ```
pub fn truncate(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals.max(0);
    shift(shift(value, places).trunc(), -places)
}
