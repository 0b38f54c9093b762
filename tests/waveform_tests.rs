// Host-side tests for the waveform polyline geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod waveform {
    include!("../src/waveform.rs");
}

use waveform::{backing_size, polyline};

const WIDTH: f64 = 256.0;
const HEIGHT: f64 = 100.0;

#[test]
fn silence_draws_a_flat_line_at_vertical_center() {
    let frame = [128u8; 128];
    let points = polyline(&frame, WIDTH, HEIGHT);

    assert_eq!(points.len(), frame.len() + 1);
    for &(_, y) in &points {
        assert!((y - HEIGHT / 2.0).abs() < 1e-9);
    }
}

#[test]
fn samples_are_spaced_uniformly_from_the_left_edge() {
    let frame = [128u8; 128];
    let points = polyline(&frame, WIDTH, HEIGHT);
    let slice = WIDTH / frame.len() as f64;

    assert_eq!(points[0].0, 0.0);
    for (i, &(x, _)) in points.iter().take(frame.len()).enumerate() {
        assert!((x - i as f64 * slice).abs() < 1e-9);
    }
}

#[test]
fn line_always_closes_at_the_right_edge_center() {
    // last sample far from center; the closing segment still lands at
    // (width, height/2)
    let mut frame = [128u8; 128];
    frame[127] = 0;
    let points = polyline(&frame, WIDTH, HEIGHT);
    let last = points[points.len() - 1];
    assert_eq!(last, (WIDTH, HEIGHT / 2.0));
}

#[test]
fn square_wave_spans_the_full_surface_height() {
    let frame: Vec<u8> = (0..128).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    let points = polyline(&frame, WIDTH, HEIGHT);

    let top = 0.0;
    let bottom = 255.0 / 128.0 * HEIGHT / 2.0;
    for (i, &(_, y)) in points.iter().take(frame.len()).enumerate() {
        if i % 2 == 0 {
            assert!((y - top).abs() < 1e-9);
        } else {
            assert!((y - bottom).abs() < 1e-9);
        }
    }
    // extremes cover the surface within one sample quantum of its height
    assert!(bottom > HEIGHT * 0.99);
}

#[test]
fn square_wave_oscillates_half_sample_count_times() {
    let frame: Vec<u8> = (0..128).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    let points = polyline(&frame, WIDTH, HEIGHT);

    // count full peak-to-trough swings over the sample walk
    let mut swings = 0usize;
    for pair in points[..frame.len()].windows(2) {
        if (pair[0].1 - pair[1].1).abs() > HEIGHT * 0.9 {
            swings += 1;
        }
    }
    assert_eq!(swings / 2, frame.len() / 2 - 1);
}

#[test]
fn empty_frame_degenerates_to_the_closing_segment() {
    let points = polyline(&[], WIDTH, HEIGHT);
    assert_eq!(
        points,
        vec![(0.0, HEIGHT / 2.0), (WIDTH, HEIGHT / 2.0)]
    );
}

#[test]
fn backing_store_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(300.0, 150.0, 2.0), (600, 300));
    assert_eq!(backing_size(100.0, 50.0, 1.5), (150, 75));
    assert_eq!(backing_size(640.0, 96.0, 1.0), (640, 96));
}

#[test]
fn backing_store_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.4, 0.4, 1.0), (1, 1));
}
