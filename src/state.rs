/// Playback phase machine for the waveform player.
///
/// Pure Rust so the transition rules are host-testable; the wasm side only
/// ever mutates state through these methods. Each load attempt is tagged
/// with a generation so completions arriving for a superseded session are
/// discarded instead of clobbering the current one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Playing,
    Stopped,
    Error,
}

#[derive(Debug)]
pub struct PlayerState {
    phase: Phase,
    generation: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Start a new load attempt. Bumps the generation so any outstanding
    /// completion from a previous attempt becomes stale, and returns the
    /// new generation as the token the attempt must present to settle.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// True if `token` belongs to the live attempt.
    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Settle the load attempt into `Playing`. Returns false (and leaves
    /// state untouched) when the token is stale or the phase moved on.
    pub fn settle_playing(&mut self, token: u64) -> bool {
        if self.generation != token || self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    /// Settle the load attempt into `Error`. Same staleness rules as
    /// `settle_playing`.
    pub fn settle_error(&mut self, token: u64) -> bool {
        if self.generation != token || self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Error;
        true
    }

    /// Manual stop or natural end-of-signal. `token` guards the natural-end
    /// path: the `onended` callback of a superseded source must not move a
    /// newer session to `Stopped`.
    pub fn stop(&mut self, token: u64) -> bool {
        if self.generation != token || self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Stopped;
        true
    }

    /// Unconditional stop, used when the caller itself owns the live
    /// session (the toggle-off path). Bumps the generation so in-flight
    /// completions for the stopped session can never land.
    pub fn force_stop(&mut self) {
        self.generation += 1;
        self.phase = Phase::Stopped;
    }

    /// Teardown: invalidate every outstanding token without pretending the
    /// player is in any usable phase.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
