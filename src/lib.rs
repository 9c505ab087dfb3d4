//! Scalekit - Numeric scaling helpers for audio and visualization front-ends
//!
//! This library provides range mapping, decibel conversion, 2D buffer
//! normalization, frame geometry and color ramps.

pub mod buffer;
pub mod colors;
pub mod decibels;
pub mod frames;
pub mod range;
pub mod search;

#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use buffer::{Buffer2D, BufferError, Normalization};
pub use colors::ColorRamp;
pub use decibels::{SILENCE_DB, decibels_to_linear, linear_to_decibels};
pub use frames::{FrameError, frame_signal, number_of_frames, size_of_buffer, try_size_of_buffer};
pub use range::{RangeMapper, Scale, constrain, map, range_map};
pub use search::index_of_max;

#[cfg(feature = "macros")]
pub use scalekit_macros::db;
