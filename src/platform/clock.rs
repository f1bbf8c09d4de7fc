//! Fixed timestep pacing

use crate::consts::MAX_SUBSTEPS;

/// Longest frame (seconds) counted toward the accumulator
const MAX_FRAME_SECS: f64 = 0.1;

/// Converts variable frame times into fixed simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step_secs: f64,
    max_substeps: u32,
    accumulator: f64,
}

impl FixedStepClock {
    pub fn new(step_secs: f64) -> Self {
        Self {
            step_secs,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    #[inline]
    pub fn step_secs(&self) -> f64 {
        self.step_secs
    }

    /// Add a frame's elapsed time and return how many ticks to run now
    ///
    /// Long frames are clamped and at most `max_substeps` ticks are returned,
    /// leaving any remainder in the accumulator for later frames.
    pub fn advance(&mut self, elapsed_secs: f64) -> u32 {
        self.accumulator += elapsed_secs.clamp(0.0, MAX_FRAME_SECS);

        let mut ticks = 0;
        while self.accumulator >= self.step_secs && ticks < self.max_substeps {
            self.accumulator -= self.step_secs;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.step_secs).clamp(0.0, 1.0)
    }
}
