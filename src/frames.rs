//! Sliding-window frame geometry.
//!
//! A signal of `total_size` samples is cut into frames of `frame_size`
//! samples whose start offsets are `frame_stride` apart. Only whole frames
//! count; trailing samples that do not fill a frame are dropped.

use thiserror::Error;

use crate::buffer::{Buffer2D, BufferError};

/// Invalid frame geometry passed to [`try_size_of_buffer`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("number of frames too low")]
    TooFewFrames { n_frames: usize },

    #[error("stride larger than frame size ...?")]
    StrideTooLarge {
        frame_size: usize,
        frame_stride: usize,
    },

    #[error("{n_frames} frames of {frame_size} (stride {frame_stride}) overflow usize")]
    Overflow {
        n_frames: usize,
        frame_size: usize,
        frame_stride: usize,
    },
}

/// Number of whole frames that fit in `total_size` samples.
///
/// Computes `1 + floor((total_size - frame_size) / frame_stride)`, or `0` when
/// the signal is shorter than one frame.
///
/// # Panics
///
/// Panics if `frame_stride` is zero.
///
/// # Examples
///
/// ```
/// use scalekit::frames::number_of_frames;
///
/// assert_eq!(number_of_frames(10, 4, 2), 4);
/// assert_eq!(number_of_frames(11, 4, 2), 4);
/// assert_eq!(number_of_frames(3, 4, 2), 0);
/// ```
pub fn number_of_frames(total_size: usize, frame_size: usize, frame_stride: usize) -> usize {
    assert!(frame_stride > 0, "frame stride must be positive");
    match total_size.checked_sub(frame_size) {
        Some(rest) => 1 + rest / frame_stride,
        None => 0,
    }
}

/// Number of samples spanned by `n_frames` overlapping frames.
///
/// This is the inverse of [`number_of_frames`]:
/// `frame_size + (n_frames - 1) * frame_stride`.
///
/// # Panics
///
/// Panics with `"number of frames too low"` if `n_frames <= 1`, and with
/// `"stride larger than frame size ...?"` if `frame_size <= frame_stride`.
/// Also panics if the size overflows `usize`. Use [`try_size_of_buffer`] to validate untrusted geometry.
///
/// # Examples
///
/// ```
/// use scalekit::frames::{number_of_frames, size_of_buffer};
///
/// assert_eq!(size_of_buffer(4, 4, 2), 10);
/// assert_eq!(number_of_frames(size_of_buffer(4, 4, 2), 4, 2), 4);
/// ```
pub fn size_of_buffer(n_frames: usize, frame_size: usize, frame_stride: usize) -> usize {
    match try_size_of_buffer(n_frames, frame_size, frame_stride) {
        Ok(size) => size,
        Err(e) => panic!("{}", e),
    }
}

/// Checked form of [`size_of_buffer`].
///
/// # Errors
///
/// * [`FrameError::TooFewFrames`] if `n_frames <= 1`
/// * [`FrameError::StrideTooLarge`] if `frame_size <= frame_stride`
/// * [`FrameError::Overflow`] if the size does not fit in `usize`
pub fn try_size_of_buffer(
    n_frames: usize,
    frame_size: usize,
    frame_stride: usize,
) -> Result<usize, FrameError> {
    if n_frames <= 1 {
        return Err(FrameError::TooFewFrames { n_frames });
    }
    if frame_size <= frame_stride {
        return Err(FrameError::StrideTooLarge {
            frame_size,
            frame_stride,
        });
    }
    (n_frames - 1)
        .checked_mul(frame_stride)
        .and_then(|span| span.checked_add(frame_size))
        .ok_or(FrameError::Overflow {
            n_frames,
            frame_size,
            frame_stride,
        })
}

/// Cuts `signal` into overlapping frames, one frame per row.
///
/// The result has [`number_of_frames`] rows of `frame_size` columns. Samples
/// after the last whole frame are dropped.
///
/// # Errors
///
/// [`BufferError::Empty`] if `frame_size` is zero or the signal is shorter
/// than one frame.
///
/// # Panics
///
/// Panics if `frame_stride` is zero.
///
/// # Examples
///
/// ```
/// use scalekit::frames::frame_signal;
///
/// let signal: Vec<f64> = (0..7).map(f64::from).collect();
/// let frames = frame_signal(&signal, 4, 2).unwrap();
/// assert_eq!(frames.rows(), 2);
/// assert_eq!(frames.row(1), &[2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn frame_signal(
    signal: &[f64],
    frame_size: usize,
    frame_stride: usize,
) -> Result<Buffer2D, BufferError> {
    let n_frames = number_of_frames(signal.len(), frame_size, frame_stride);
    if n_frames == 0 || frame_size == 0 {
        return Err(BufferError::Empty);
    }

    let mut data = Vec::with_capacity(n_frames * frame_size);
    for frame in 0..n_frames {
        let start = frame * frame_stride;
        data.extend_from_slice(&signal[start..start + frame_size]);
    }
    log::debug!(
        "framed {} samples into {} frames of {} (stride {})",
        signal.len(),
        n_frames,
        frame_size,
        frame_stride
    );

    Buffer2D::from_flat(data, frame_size)
}
