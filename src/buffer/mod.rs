//! Rectangular 2D buffers and in-place normalization.
//!
//! A `Buffer2D` is a frames × bins matrix such as a spectrogram. Its
//! constructors reject empty and ragged input, so every normalization can
//! assume at least one element and equal-length rows.

mod buffer2d;
mod normalize;

pub use buffer2d::{Buffer2D, BufferError};
pub use normalize::{
    Normalization, mean_normalize, min_max_normalize, power_to_decibels, standardize,
};
