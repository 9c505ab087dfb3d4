//! In-place normalization of 2D buffers.
//!
//! All statistics are global over the whole buffer, not per row. Degenerate
//! input (constant values, a single element) degrades to NaN instead of
//! failing, except in [`min_max_normalize`] which guards its zero width.

use serde::{Deserialize, Serialize};

use super::Buffer2D;
use crate::decibels::linear_to_decibels;

/// Global minimum and maximum, ignoring NaN.
fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Centers the buffer on its mean and scales by its value range.
///
/// Each value becomes `(x - mean) / (max - min)`, so the output spans a width
/// of 1 somewhere inside `[-1, 1]`. A constant buffer has zero width and every
/// value becomes NaN.
///
/// # Examples
///
/// ```
/// use scalekit::{Buffer2D, buffer::mean_normalize};
///
/// let mut buffer = Buffer2D::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// mean_normalize(&mut buffer);
/// assert_eq!(buffer[(0, 0)], -0.5);
/// assert_eq!(buffer[(1, 1)], 0.5);
/// ```
pub fn mean_normalize(buffer: &mut Buffer2D) {
    let values = buffer.as_mut_slice();
    let mean = mean(values);
    let (min, max) = min_max(values);

    let width = max - min;
    if width == 0.0 {
        log::warn!("mean_normalize: buffer is constant ({}), output is NaN", min);
    }

    for v in values.iter_mut() {
        *v = (*v - mean) / width;
    }
}

/// Rescales the buffer linearly onto `[0, 1]`.
///
/// Each value becomes `(x - min) / (max - min)`. A constant buffer uses a
/// width of 1 instead of 0, so it becomes all zeros.
///
/// # Examples
///
/// ```
/// use scalekit::{Buffer2D, buffer::min_max_normalize};
///
/// let mut buffer = Buffer2D::from_rows(vec![vec![2.0, 4.0, 6.0]]).unwrap();
/// min_max_normalize(&mut buffer);
/// assert_eq!(buffer.as_slice(), &[0.0, 0.5, 1.0]);
/// ```
pub fn min_max_normalize(buffer: &mut Buffer2D) {
    let values = buffer.as_mut_slice();
    let (min, max) = min_max(values);

    let mut width = max - min;
    if width == 0.0 {
        width = 1.0;
    }

    for v in values.iter_mut() {
        *v = (*v - min) / width;
    }
}

/// Standardizes the buffer to zero mean and unit sample standard deviation.
///
/// The standard deviation uses Bessel's correction (divisor `N - 1`). A
/// single-element buffer divides by zero and becomes NaN; so does a constant
/// buffer.
///
/// # Examples
///
/// ```
/// use scalekit::{Buffer2D, buffer::standardize};
///
/// let mut buffer = Buffer2D::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0]]).unwrap();
/// standardize(&mut buffer);
/// let sum: f64 = buffer.as_slice().iter().sum();
/// assert!(sum.abs() < 1e-12);
/// ```
pub fn standardize(buffer: &mut Buffer2D) {
    let values = buffer.as_mut_slice();
    let n = values.len();
    if n == 1 {
        log::warn!("standardize: single-element buffer, output is NaN");
    }

    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    let sigma = (sum_sq / (n as f64 - 1.0)).sqrt();

    for v in values.iter_mut() {
        *v = (*v - mean) / sigma;
    }
}

/// Converts a power buffer to decibels relative to its loudest value.
///
/// Every value becomes `linear_to_decibels(x / max)`, so the maximum maps to
/// 0 dB and zeros map to [`SILENCE_DB`](crate::decibels::SILENCE_DB). With
/// `floor` set, results below it are raised to it. The maximum ignores NaN
/// entries.
///
/// # Examples
///
/// ```
/// use scalekit::{Buffer2D, buffer::power_to_decibels};
///
/// let mut buffer = Buffer2D::from_rows(vec![vec![10.0, 0.0]]).unwrap();
/// power_to_decibels(&mut buffer, Some(-80.0));
/// assert_eq!(buffer.as_slice(), &[0.0, -80.0]);
/// ```
pub fn power_to_decibels(buffer: &mut Buffer2D, floor: Option<f64>) {
    let values = buffer.as_mut_slice();
    let (_, max) = min_max(values);
    if max <= 0.0 {
        log::warn!("power_to_decibels: maximum power is {}, output is not meaningful", max);
    }

    for v in values.iter_mut() {
        let db = linear_to_decibels(*v / max);
        *v = match floor {
            Some(floor) if db < floor => floor,
            _ => db,
        };
    }
}

/// A normalization selected by configuration.
///
/// # Examples
///
/// ```
/// use scalekit::{Buffer2D, Normalization};
///
/// let norm: Normalization = serde_json::from_str(r#"{"kind":"min_max"}"#).unwrap();
/// let mut buffer = Buffer2D::from_rows(vec![vec![1.0, 3.0]]).unwrap();
/// norm.apply(&mut buffer);
/// assert_eq!(buffer.as_slice(), &[0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalization {
    /// See [`mean_normalize`].
    Mean,
    /// See [`min_max_normalize`].
    MinMax,
    /// See [`standardize`].
    Standardize,
    /// See [`power_to_decibels`].
    PowerToDecibels {
        #[serde(default)]
        floor: Option<f64>,
    },
}

impl Normalization {
    /// Normalizes `buffer` in place.
    pub fn apply(&self, buffer: &mut Buffer2D) {
        match *self {
            Normalization::Mean => mean_normalize(buffer),
            Normalization::MinMax => min_max_normalize(buffer),
            Normalization::Standardize => standardize(buffer),
            Normalization::PowerToDecibels { floor } => power_to_decibels(buffer, floor),
        }
    }
}
