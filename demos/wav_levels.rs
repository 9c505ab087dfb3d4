//! Prints a level meter for each frame of a WAV file.
//!
//! Usage: `cargo run --example wav_levels --features wav [path.wav]`
//!
//! Without a path, a decaying 440 Hz tone is written to the temp directory
//! and used instead. Each frame's power is converted to dB relative to the
//! loudest frame, floored at -60 dB, and drawn as a bar.

use anyhow::{Context, Result};
use scalekit::frames::frame_signal;
use scalekit::{Buffer2D, Normalization, RangeMapper, index_of_max, wav};

const FRAME_SIZE: usize = 2048;
const FRAME_STRIDE: usize = 1024;
const FLOOR_DB: f64 = -60.0;
const BAR_WIDTH: f64 = 50.0;

fn write_demo_tone() -> Result<std::path::PathBuf> {
    let path = std::env::temp_dir().join("scalekit-demo-tone.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;
    for i in 0..44100 * 2 {
        let t = i as f64 / 44100.0;
        let sample = (2.0 * std::f64::consts::PI * 440.0 * t).sin() * (-2.0 * t).exp();
        writer.write_sample((sample * i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;
    Ok(path)
}

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => std::path::PathBuf::from(path),
        None => write_demo_tone()?,
    };

    let (samples, sample_rate) =
        wav::read_mono(&path).with_context(|| format!("reading {}", path.display()))?;
    let frames = frame_signal(&samples, FRAME_SIZE, FRAME_STRIDE)
        .context("file is shorter than one frame")?;

    // Mean power per frame, one column
    let powers: Vec<f64> = frames
        .iter_rows()
        .map(|row| row.iter().map(|s| s * s).sum::<f64>() / row.len() as f64)
        .collect();
    let loudest = index_of_max(&powers).unwrap_or(0);

    let mut levels = Buffer2D::from_flat(powers, 1)?;
    Normalization::PowerToDecibels {
        floor: Some(FLOOR_DB),
    }
    .apply(&mut levels);

    let to_bar = RangeMapper::new(FLOOR_DB, 0.0, 0.0, BAR_WIDTH);
    println!(
        "{}: {} samples at {} Hz, {} frames",
        path.display(),
        samples.len(),
        sample_rate,
        levels.rows()
    );
    for (idx, db) in levels.as_slice().iter().enumerate() {
        let seconds = (idx * FRAME_STRIDE) as f64 / f64::from(sample_rate);
        let bar = "#".repeat(to_bar.apply(*db).round() as usize);
        let marker = if idx == loudest { " <- loudest" } else { "" };
        println!("{:7.3}s {:6.1} dB |{}{}", seconds, db, bar, marker);
    }

    Ok(())
}
