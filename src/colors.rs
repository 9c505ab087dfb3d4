//! CSS color ramps for drawing scaled values.
//!
//! Both ramps have 256 entries and are built once on first use.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::range::range_map;

static GRAYSCALE: LazyLock<[String; 256]> =
    LazyLock::new(|| std::array::from_fn(|idx| format!("rgb({idx}, {idx}, {idx})")));

static RAINBOW: LazyLock<[String; 256]> =
    LazyLock::new(|| std::array::from_fn(|idx| format!("hsl({idx},100%,50%)")));

/// The grayscale ramp: entry `i` is `rgb(i, i, i)`.
pub fn grayscale_table() -> &'static [String; 256] {
    &GRAYSCALE
}

/// The rainbow ramp: entry `i` is `hsl(i,100%,50%)`, a hue sweep from red
/// through green to blue.
pub fn rainbow_table() -> &'static [String; 256] {
    &RAINBOW
}

/// A 256-step color ramp.
///
/// # Examples
///
/// ```
/// use scalekit::ColorRamp;
///
/// assert_eq!(ColorRamp::Grayscale.css(255), "rgb(255, 255, 255)");
/// assert_eq!(ColorRamp::Rainbow.css(120), "hsl(120,100%,50%)");
///
/// // -40 dB on a [-80, 0] dB scale lands mid-ramp
/// assert_eq!(ColorRamp::Grayscale.for_value(-40.0, -80.0, 0.0), "rgb(128, 128, 128)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRamp {
    #[default]
    Grayscale,
    Rainbow,
}

impl ColorRamp {
    /// All 256 entries of this ramp.
    pub fn table(&self) -> &'static [String; 256] {
        match self {
            ColorRamp::Grayscale => grayscale_table(),
            ColorRamp::Rainbow => rainbow_table(),
        }
    }

    /// The CSS color at `index`.
    pub fn css(&self, index: u8) -> &'static str {
        &self.table()[usize::from(index)]
    }

    /// Ramp index for `val` clamped into `[min, max]`.
    ///
    /// `min` maps to 0 and `max` to 255, rounding to the nearest step. NaN maps
    /// to 0.
    pub fn index_for(val: f64, min: f64, max: f64) -> u8 {
        // `as` saturates and sends NaN to 0
        range_map(val, min, max, 0.0, 255.0).round() as u8
    }

    /// The CSS color for `val` on a `[min, max]` scale.
    pub fn for_value(&self, val: f64, min: f64, max: f64) -> &'static str {
        self.css(Self::index_for(val, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert_eq!(grayscale_table().len(), 256);
        assert_eq!(grayscale_table()[0], "rgb(0, 0, 0)");
        assert_eq!(grayscale_table()[17], "rgb(17, 17, 17)");
        assert_eq!(rainbow_table()[0], "hsl(0,100%,50%)");
        assert_eq!(rainbow_table()[255], "hsl(255,100%,50%)");
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(std::ptr::eq(grayscale_table(), ColorRamp::Grayscale.table()));
        assert!(std::ptr::eq(rainbow_table(), ColorRamp::Rainbow.table()));
    }

    #[test]
    fn test_index_for() {
        assert_eq!(ColorRamp::index_for(-100.0, -80.0, 0.0), 0);
        assert_eq!(ColorRamp::index_for(-80.0, -80.0, 0.0), 0);
        assert_eq!(ColorRamp::index_for(0.0, -80.0, 0.0), 255);
        assert_eq!(ColorRamp::index_for(12.0, -80.0, 0.0), 255);
        assert_eq!(ColorRamp::index_for(0.5, 0.0, 1.0), 128);
        assert_eq!(ColorRamp::index_for(f64::NAN, 0.0, 1.0), 0);
    }

    #[test]
    fn test_for_value() {
        assert_eq!(ColorRamp::Rainbow.for_value(1.0, 0.0, 1.0), "hsl(255,100%,50%)");
        assert_eq!(ColorRamp::Grayscale.for_value(0.0, 0.0, 1.0), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_deserialize() {
        let ramp: ColorRamp = serde_json::from_str(r#""rainbow""#).unwrap();
        assert_eq!(ramp, ColorRamp::Rainbow);
        assert_eq!(ColorRamp::default(), ColorRamp::Grayscale);
    }
}
