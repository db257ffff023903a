use rand::Rng;
use serde::Serialize;

pub const HEART_RATE_INITIAL_BPM: i32 = 80;
pub const HEART_RATE_MIN_BPM: i32 = 60;
pub const HEART_RATE_MAX_BPM: i32 = 120;
/// Largest per-cycle change of the synthetic heart rate.
pub const HEART_RATE_MAX_STEP: i32 = 2;

/// Synthetic heart rate: a bounded random walk that pins at its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeartRate(i32);

impl HeartRate {
    pub fn new() -> Self {
        Self(HEART_RATE_INITIAL_BPM)
    }

    pub fn bpm(&self) -> i32 {
        self.0
    }

    /// Add `delta` and clamp to the allowed band.
    pub fn apply_step(&mut self, delta: i32) -> i32 {
        self.0 = (self.0 + delta).clamp(HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM);
        self.0
    }

    /// Draw a uniform step in `-2..=2` and apply it.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let delta = rng.gen_range(-HEART_RATE_MAX_STEP..=HEART_RATE_MAX_STEP);
        self.apply_step(delta)
    }
}

impl Default for HeartRate {
    fn default() -> Self {
        Self::new()
    }
}
