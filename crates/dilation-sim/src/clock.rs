//! Fixed-timestep accumulator.
//!
//! Converts a monotonically increasing millisecond timestamp stream into a
//! count of fixed-size physics steps. Knows nothing about what a step does.

use tracing::warn;

use dilation_core::error::ConfigError;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    fixed_time_step: f64,
    /// Timestamp (ms) of the last processed update. `None` until the first
    /// update after construction or resume.
    anchor_ms: Option<f64>,
    /// Wall time (s) not yet converted into a step. Always in `[0, step)`.
    leftover: f64,
    paused: bool,
    total_steps: u64,
}

impl SimulationClock {
    pub fn new(fixed_time_step: f64) -> Result<Self, ConfigError> {
        if !fixed_time_step.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "fixed_time_step",
                value: fixed_time_step,
            });
        }
        if fixed_time_step <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "fixed_time_step",
                value: fixed_time_step,
            });
        }
        Ok(Self {
            fixed_time_step,
            anchor_ms: None,
            leftover: 0.0,
            paused: false,
            total_steps: 0,
        })
    }

    /// Feed the current timestamp and return how many physics steps to run.
    ///
    /// Returns 0 while paused (anchor untouched) and on the first call after
    /// construction or resume (anchor recorded). A timestamp earlier than the
    /// anchor counts as zero elapsed time.
    pub fn update(&mut self, now_ms: f64) -> u64 {
        if self.paused {
            return 0;
        }

        let Some(anchor) = self.anchor_ms.replace(now_ms) else {
            return 0;
        };

        let mut elapsed = (now_ms - anchor) / 1000.0;
        if elapsed < 0.0 {
            warn!(now_ms, anchor, "timestamp went backwards, ignoring elapsed time");
            elapsed = 0.0;
        } else if !elapsed.is_finite() {
            warn!(now_ms, anchor, "elapsed time not representable, ignoring it");
            elapsed = 0.0;
        }

        self.leftover += elapsed;
        let step = self.fixed_time_step;
        let mut steps = (self.leftover / step).floor() as u64;
        self.leftover -= steps as f64 * step;
        // The division can round across a step boundary either way
        while self.leftover >= step {
            self.leftover -= step;
            steps += 1;
        }
        while self.leftover < 0.0 && steps > 0 {
            self.leftover += step;
            steps -= 1;
        }
        self.leftover = self.leftover.max(0.0);

        self.total_steps += steps;
        steps
    }

    /// Pause or resume. Resuming drops the anchor so the paused interval is
    /// never converted into steps.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused && !paused {
            self.anchor_ms = None;
        }
        self.paused = paused;
    }

    /// Discard unconverted wall time and the step count. The anchor is kept.
    pub fn reset(&mut self) {
        self.leftover = 0.0;
        self.total_steps = 0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn fixed_time_step(&self) -> f64 {
        self.fixed_time_step
    }

    pub fn leftover(&self) -> f64 {
        self.leftover
    }

    pub fn anchor_ms(&self) -> Option<f64> {
        self.anchor_ms
    }

    /// Steps produced since construction or the last reset.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
