//! Linear and logarithmic range mapping.
//!
//! This module provides the scalar transforms used to move values between
//! ranges:
//! - `map` for an unclamped affine remap
//! - `constrain` for clamping that never panics
//! - `range_map` / `log_range_map` for clamp-then-remap, plus buffer forms
//! - `RangeMapper` for carrying a mapping around as configuration

mod map;
mod mapper;

pub use map::{
    constrain, log_range_map, log_range_map_buffer, map, range_map, range_map_buffer,
};
pub use mapper::{RangeMapper, Scale};
