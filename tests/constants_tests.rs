// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_window_and_frame_length_agree() {
    // bin count is always half the FFT window
    assert_eq!(ANALYSER_BIN_COUNT, (ANALYSER_FFT_SIZE / 2) as usize);
    assert_eq!(ANALYSER_BIN_COUNT, 128);

    // WebAudio requires a power-of-two window
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stroke_styling_is_sane() {
    assert!(WAVEFORM_LINE_WIDTH > 0.0);
    assert!(WAVEFORM_STROKE_COLOR.starts_with('#'));
    assert_eq!(WAVEFORM_STROKE_COLOR.len(), 7);
    assert!(WAVEFORM_STROKE_COLOR[1..]
        .chars()
        .all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn dom_contract_ids_are_distinct() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!PLAY_OVERLAY_ID.is_empty());
    assert_ne!(CANVAS_ID, PLAY_OVERLAY_ID);
}

#[test]
fn teaser_asset_is_an_absolute_path() {
    assert!(TEASER_AUDIO_SRC.starts_with('/'));
    assert!(TEASER_AUDIO_SRC.ends_with(".mp3"));
}
