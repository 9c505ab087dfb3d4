use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalekit::buffer::{min_max_normalize, power_to_decibels, standardize};
use scalekit::{
    Buffer2D, ColorRamp, Normalization, RangeMapper, SILENCE_DB, constrain, decibels_to_linear,
    frame_signal, index_of_max, linear_to_decibels, map, number_of_frames, range_map,
    size_of_buffer,
};

fn random_buffer(rng: &mut StdRng, rows: usize, cols: usize) -> Buffer2D {
    let data = (0..rows * cols).map(|_| rng.gen_range(-50.0..50.0)).collect();
    Buffer2D::from_flat(data, cols).unwrap()
}

#[test]
fn test_map_hits_endpoints_exactly() {
    for i in 0..=12 {
        let val = f64::from(i) * 10.0;
        let out = map(val, 0.0, 100.0, 0.0, 255.0);
        assert!((out - val * 2.55).abs() < 1e-9, "{} -> {}", val, out);
    }
    assert_eq!(map(0.0, 0.0, 100.0, 0.0, 255.0), 0.0);
    assert_eq!(map(100.0, 0.0, 100.0, 0.0, 255.0), 255.0);
}

#[test]
fn test_constrain_and_range_map_bounds() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..2000 {
        let lo = rng.gen_range(-100.0..0.0);
        let hi = rng.gen_range(0.0..100.0);
        let v = rng.gen_range(-1e4..1e4);

        let c = constrain(v, lo, hi);
        assert!(c >= lo && c <= hi);

        let out = range_map(v, lo, hi, 0.0, 1.0);
        assert!((0.0..=1.0).contains(&out), "{} in [{}, {}] -> {}", v, lo, hi, out);
    }
}

#[test]
fn test_decibel_round_trip() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(1e-9..1e3);
        let back = decibels_to_linear(linear_to_decibels(x));
        assert!((back - x).abs() <= x * 1e-10, "{} -> {}", x, back);
    }
    assert_eq!(linear_to_decibels(0.0), -1000.0);
    assert_eq!(SILENCE_DB, -1000.0);
}

#[test]
fn test_index_of_max_contract() {
    assert_eq!(index_of_max(&[]), None);
    assert_eq!(index_of_max(&[3.0, 1.0, 3.0]), Some(0));
}

#[test]
fn test_min_max_normalize_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut b = random_buffer(&mut rng, 8, 16);
    min_max_normalize(&mut b);
    let values = b.as_slice();
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(values.iter().cloned().fold(f64::INFINITY, f64::min), 0.0);
    assert_eq!(values.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 1.0);
}

#[test]
fn test_min_max_normalize_constant() {
    let mut b = Buffer2D::filled(3, 5, -2.5).unwrap();
    min_max_normalize(&mut b);
    assert!(b.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_standardize_random_buffer() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut b = random_buffer(&mut rng, 10, 10);
    standardize(&mut b);

    let values = b.as_slice();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    assert!(mean.abs() < 1e-10);
    assert!((var.sqrt() - 1.0).abs() < 1e-10);
}

#[test]
fn test_frame_geometry() {
    assert_eq!(number_of_frames(10, 4, 2), 4);
    assert_eq!(size_of_buffer(4, 4, 2), 10);
}

#[test]
#[should_panic(expected = "number of frames too low")]
fn test_size_of_buffer_single_frame_is_fatal() {
    size_of_buffer(1, 4, 2);
}

#[test]
fn test_spectrogram_pipeline() {
    // Frame a decaying signal, take per-bin power, convert to dB and color it.
    let signal: Vec<f64> = (0..64).map(|i| (-(i as f64) / 16.0).exp()).collect();
    let mut frames = frame_signal(&signal, 16, 8).unwrap();
    assert_eq!(frames.rows(), number_of_frames(64, 16, 8));

    for v in frames.as_mut_slice() {
        *v *= *v;
    }
    power_to_decibels(&mut frames, Some(-80.0));

    let first = frames.row(0).to_vec();
    assert_eq!(first[0], 0.0);
    assert!(frames.as_slice().iter().all(|&db| (-80.0..=0.0).contains(&db)));

    let louder = frames.iter_rows().map(|row| row[0]).collect::<Vec<_>>();
    assert_eq!(index_of_max(&louder), Some(0));

    let to_unit = RangeMapper::new(-80.0, 0.0, 0.0, 1.0);
    let unit = to_unit.apply_buffer(frames.row(frames.rows() - 1));
    assert!(unit.iter().all(|v| (0.0..=1.0).contains(v)));

    assert_eq!(ColorRamp::Grayscale.for_value(first[0], -80.0, 0.0), "rgb(255, 255, 255)");
}

#[test]
fn test_configured_pipeline_from_json() {
    let steps: Vec<Normalization> = serde_json::from_str(
        r#"[{"kind":"power_to_decibels","floor":-60},{"kind":"min_max"}]"#,
    )
    .unwrap();

    let mut b = Buffer2D::from_rows(vec![vec![1.0, 0.1], vec![0.001, 0.0]]).unwrap();
    for step in &steps {
        step.apply(&mut b);
    }

    let expected = [1.0, 2.0 / 3.0, 0.0, 0.0];
    for (got, want) in b.as_slice().iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
    }
}
