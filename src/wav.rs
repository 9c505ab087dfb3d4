//! Reading WAV files into sample buffers.

use std::path::Path;

use thiserror::Error;

/// Errors from reading a WAV file.
#[derive(Error, Debug)]
pub enum WavError {
    #[error("failed to read WAV file: {0}")]
    Read(#[from] hound::Error),

    #[error("WAV file contains no samples")]
    Empty,
}

/// Reads a WAV file as mono samples in `[-1, 1]`.
///
/// Integer samples are scaled by their bit depth; float samples are used as
/// stored. Multi-channel files are averaged down to one channel. Returns the
/// samples and the sample rate in Hz.
///
/// # Errors
///
/// * [`WavError::Read`] if the file cannot be opened or decoded
/// * [`WavError::Empty`] if it contains no samples
pub fn read_mono<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, u32), WavError> {
    let reader = hound::WavReader::open(path)?;
    from_reader(reader)
}

fn from_reader<R: std::io::Read>(
    mut reader: hound::WavReader<R>,
) -> Result<(Vec<f64>, u32), WavError> {
    let spec = reader.spec();

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_value))
                .collect::<Result<_, _>>()?
        }
    };

    if samples.is_empty() {
        return Err(WavError::Empty);
    }

    let channels = usize::from(spec.channels.max(1));
    let mono: Vec<f64> = if channels > 1 {
        samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect()
    } else {
        samples
    };

    log::debug!(
        "read {} mono samples at {} Hz ({} channels, {:?})",
        mono.len(),
        spec.sample_rate,
        spec.channels,
        spec.sample_format
    );

    Ok((mono, spec.sample_rate))
}
