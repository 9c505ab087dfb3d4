//! Scalar and buffer range mapping functions.

/// Maps `value` from the domain `[x1, y1]` onto the range `[x2, y2]`.
///
/// The transform is affine and unclamped: values outside the domain land
/// outside the range. `y1 == x1` is a precondition violation and yields NaN or
/// an infinity rather than a panic.
///
/// # Examples
///
/// ```
/// use scalekit::range::map;
///
/// assert_eq!(map(50.0, 0.0, 100.0, 0.0, 255.0), 127.5);
/// assert_eq!(map(0.0, 0.0, 1.0, 10.0, 20.0), 10.0);
/// // Unclamped
/// assert_eq!(map(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
/// ```
#[inline]
pub fn map(value: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (value - x1) * (y2 - x2) / (y1 - x1) + x2
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics. The lower bound is applied first,
/// so with `min > max` every value ends up at `max`; callers should not rely on
/// that. NaN passes through unchanged.
///
/// # Examples
///
/// ```
/// use scalekit::range::constrain;
///
/// assert_eq!(constrain(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(constrain(-5.0, 0.0, 1.0), 0.0);
/// assert_eq!(constrain(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    let value = if value < min { min } else { value };
    if value > max { max } else { value }
}

/// Clamps `val` into `[min_exp, max_exp]` and maps it onto `[map_x1, map_x2]`.
///
/// For finite input the result always lies between `map_x1` and `map_x2`.
///
/// # Examples
///
/// ```
/// use scalekit::range::range_map;
///
/// assert_eq!(range_map(1e9, 0.0, 10.0, 0.0, 1.0), 1.0);
/// assert_eq!(range_map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
/// ```
pub fn range_map(val: f64, min_exp: f64, max_exp: f64, map_x1: f64, map_x2: f64) -> f64 {
    let val = constrain(val, min_exp, max_exp);
    map(val, min_exp, max_exp, map_x1, map_x2)
}

/// Like [`range_map`], but on `log10(val)`.
///
/// `min_exp` and `max_exp` are therefore exponents: `[-2, 0]` covers linear
/// values `0.01..=1`. `val` must be positive. Zero maps to the low end of the
/// output (its logarithm is negative infinity) and negative values produce NaN.
///
/// # Examples
///
/// ```
/// use scalekit::range::log_range_map;
///
/// assert_eq!(log_range_map(1.0, 0.0, 2.0, 0.0, 100.0), 0.0);
/// assert_eq!(log_range_map(10.0, 0.0, 2.0, 0.0, 100.0), 50.0);
/// assert!(log_range_map(-1.0, 0.0, 2.0, 0.0, 100.0).is_nan());
/// ```
pub fn log_range_map(val: f64, min_exp: f64, max_exp: f64, map_x1: f64, map_x2: f64) -> f64 {
    range_map(val.log10(), min_exp, max_exp, map_x1, map_x2)
}

/// Applies [`range_map`] to every element, returning a new buffer.
pub fn range_map_buffer(
    buffer: &[f64],
    min_exp: f64,
    max_exp: f64,
    map_x1: f64,
    map_x2: f64,
) -> Vec<f64> {
    buffer
        .iter()
        .map(|&v| range_map(v, min_exp, max_exp, map_x1, map_x2))
        .collect()
}

/// Applies [`log_range_map`] to every element, returning a new buffer.
pub fn log_range_map_buffer(
    buffer: &[f64],
    min_exp: f64,
    max_exp: f64,
    map_x1: f64,
    map_x2: f64,
) -> Vec<f64> {
    buffer
        .iter()
        .map(|&v| log_range_map(v, min_exp, max_exp, map_x1, map_x2))
        .collect()
}
