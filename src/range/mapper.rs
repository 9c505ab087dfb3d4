//! A range mapping carried as a value.

use serde::{Deserialize, Serialize};

use super::map::{log_range_map, range_map};

/// How input values are interpreted before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Values are mapped as-is.
    #[default]
    Linear,
    /// Values are replaced by their base-10 logarithm before mapping.
    Log10,
}

/// A clamped mapping from `[min_exp, max_exp]` to `[out_min, out_max]`.
///
/// This bundles the arguments of [`range_map`] and [`log_range_map`] so a
/// front-end can keep one mapping per axis in its settings and deserialize it
/// from JSON or any other serde format.
///
/// # Examples
///
/// ```
/// use scalekit::range::{RangeMapper, Scale};
///
/// let to_pixels = RangeMapper::new(0.0, 1.0, 0.0, 255.0);
/// assert_eq!(to_pixels.apply(0.5), 127.5);
///
/// let decades = RangeMapper::new(0.0, 2.0, 0.0, 1.0).with_scale(Scale::Log10);
/// assert_eq!(decades.apply(10.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeMapper {
    pub min_exp: f64,
    pub max_exp: f64,
    pub out_min: f64,
    pub out_max: f64,
    #[serde(default)]
    pub scale: Scale,
}

impl RangeMapper {
    /// Creates a linear mapper.
    pub fn new(min_exp: f64, max_exp: f64, out_min: f64, out_max: f64) -> Self {
        Self {
            min_exp,
            max_exp,
            out_min,
            out_max,
            scale: Scale::Linear,
        }
    }

    /// Returns this mapper with a different input scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Maps a single value.
    pub fn apply(&self, val: f64) -> f64 {
        match self.scale {
            Scale::Linear => range_map(val, self.min_exp, self.max_exp, self.out_min, self.out_max),
            Scale::Log10 => {
                log_range_map(val, self.min_exp, self.max_exp, self.out_min, self.out_max)
            }
        }
    }

    /// Maps every value of `buffer` into a new buffer.
    pub fn apply_buffer(&self, buffer: &[f64]) -> Vec<f64> {
        buffer.iter().map(|&v| self.apply(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{log_range_map_buffer, range_map_buffer};

    #[test]
    fn test_linear_matches_free_functions() {
        let mapper = RangeMapper::new(-60.0, 0.0, 0.0, 1.0);
        let input = [-100.0, -60.0, -30.0, 0.0, 6.0];
        assert_eq!(
            mapper.apply_buffer(&input),
            range_map_buffer(&input, -60.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_log_matches_free_functions() {
        let mapper = RangeMapper::new(-3.0, 0.0, 0.0, 255.0).with_scale(Scale::Log10);
        let input = [0.0001, 0.001, 0.5, 1.0, 2.0];
        assert_eq!(
            mapper.apply_buffer(&input),
            log_range_map_buffer(&input, -3.0, 0.0, 0.0, 255.0)
        );
    }

    #[test]
    fn test_deserialize_defaults_to_linear() {
        let mapper: RangeMapper =
            serde_json::from_str(r#"{"min_exp":0,"max_exp":10,"out_min":0,"out_max":1}"#).unwrap();
        assert_eq!(mapper.scale, Scale::Linear);
        assert_eq!(mapper.apply(5.0), 0.5);
    }

    #[test]
    fn test_deserialize_log_scale() {
        let mapper: RangeMapper = serde_json::from_str(
            r#"{"min_exp":0,"max_exp":2,"out_min":0,"out_max":100,"scale":"log10"}"#,
        )
        .unwrap();
        assert_eq!(mapper.scale, Scale::Log10);
        assert_eq!(mapper.apply(100.0), 100.0);
    }

    #[test]
    fn test_serialize_round_trip() {
        let mapper = RangeMapper::new(1.0, 2.0, 3.0, 4.0).with_scale(Scale::Log10);
        let json = serde_json::to_string(&mapper).unwrap();
        let back: RangeMapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapper);
    }
}
