use thiserror::Error;

/// Everything that can sink a load attempt. None of these are fatal to the
/// page: they park the player in `Phase::Error` and a later toggle retries
/// the whole sequence from `Loading`.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("audio fetch failed: {0}")]
    Fetch(String),

    #[error("audio decode failed: {0}")]
    Decode(String),

    #[error("audio context unavailable: {0}")]
    Environment(String),
}
