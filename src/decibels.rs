//! Conversion between linear amplitude and decibels.

/// Decibel value reported for a zero (or NaN) linear amplitude.
///
/// `20 * log10(0)` would be negative infinity. Downstream consumers treat this
/// exact value as "silence", so it must not change.
pub const SILENCE_DB: f64 = -1000.0;

/// Converts a decibel value to linear amplitude.
///
/// # Examples
///
/// ```
/// use scalekit::decibels::decibels_to_linear;
///
/// assert_eq!(decibels_to_linear(0.0), 1.0);
/// assert!((decibels_to_linear(-20.0) - 0.1).abs() < 1e-12);
/// ```
pub fn decibels_to_linear(decibels: f64) -> f64 {
    10.0_f64.powf(0.05 * decibels)
}

/// Converts a linear amplitude to decibels (`20 * log10(linear)`).
///
/// Returns [`SILENCE_DB`] for `0.0`, `-0.0` and NaN. Negative amplitudes
/// produce NaN.
///
/// # Examples
///
/// ```
/// use scalekit::decibels::{linear_to_decibels, SILENCE_DB};
///
/// assert_eq!(linear_to_decibels(1.0), 0.0);
/// assert_eq!(linear_to_decibels(0.0), SILENCE_DB);
/// ```
pub fn linear_to_decibels(linear: f64) -> f64 {
    if linear == 0.0 || linear.is_nan() {
        return SILENCE_DB;
    }
    20.0 * linear.log10()
}
