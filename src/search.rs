//! Searching buffers.

/// Returns the index of the largest value, or `None` for an empty slice.
///
/// Ties resolve to the earliest index. Comparison is strict `>`: a NaN never
/// replaces the running maximum, and a leading NaN is never replaced.
///
/// # Examples
///
/// ```
/// use scalekit::search::index_of_max;
///
/// assert_eq!(index_of_max(&[3.0, 1.0, 3.0]), Some(0));
/// assert_eq!(index_of_max(&[1.0, 5.0, 2.0]), Some(1));
/// assert_eq!(index_of_max(&[]), None);
/// ```
pub fn index_of_max(values: &[f64]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;

    let mut max = first;
    let mut max_index = 0;
    for (i, &v) in rest.iter().enumerate() {
        if v > max {
            max = v;
            max_index = i + 1;
        }
    }
    Some(max_index)
}
