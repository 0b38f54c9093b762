// Host-side tests for the player error taxonomy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}

use error::PlayerError;

#[test]
fn errors_name_their_failure_stage() {
    let fetch = PlayerError::Fetch("HTTP 404".to_string());
    assert_eq!(fetch.to_string(), "audio fetch failed: HTTP 404");

    let decode = PlayerError::Decode("EncodingError".to_string());
    assert_eq!(decode.to_string(), "audio decode failed: EncodingError");

    let env = PlayerError::Environment("no window".to_string());
    assert_eq!(env.to_string(), "audio context unavailable: no window");
}

#[test]
fn errors_are_loggable_through_std_error() {
    let e: Box<dyn std::error::Error> = Box::new(PlayerError::Fetch("timeout".to_string()));
    assert!(e.to_string().contains("fetch"));
}
