//! Model configuration.
//!
//! Every physical constant and presentation multiplier the model uses is a
//! named field here. Defaults come from [`crate::constants`]; a JSON document
//! may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tuning for one model instance. Validated at model construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Wall-clock seconds per physics step.
    pub fixed_time_step: f64,

    pub gravitational_constant: f64,
    pub speed_of_light: f64,
    /// Radius of the central body (receiver sits on its surface).
    pub earth_radius: f64,
    /// Radius of the satellite orbit.
    pub orbit_radius: f64,
    pub base_satellite_speed: f64,
    /// Divisor applied to `base_satellite_speed` in the velocity term.
    pub velocity_scale: f64,

    /// Coordinate-time multiplier per step.
    pub time_speed: f64,
    /// Orbit-time multiplier per step.
    pub orbit_speed: f64,
    /// Divisor shared by both per-step increments.
    pub step_time_divisor: f64,
    pub orbit_angular_rate: f64,
    pub earth_rotation_speed: f64,

    pub expansion_rate: f64,
    /// Upper bound on the expansion factor. `None` grows without bound.
    pub max_expansion_factor: Option<f64>,

    pub real_universe_age: f64,
    /// Simulation time that maps to `real_universe_age`.
    pub universe_age_duration: f64,

    /// Multiplier for the user-facing delta readout.
    pub delta_display_exaggeration: f64,
    pub well_scale: f64,
    pub well_softening: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            fixed_time_step: FIXED_TIME_STEP,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            speed_of_light: SPEED_OF_LIGHT,
            earth_radius: EARTH_RADIUS,
            orbit_radius: ORBIT_RADIUS,
            base_satellite_speed: BASE_SATELLITE_SPEED,
            velocity_scale: VELOCITY_SCALE,
            time_speed: TIME_SPEED,
            orbit_speed: ORBIT_SPEED,
            step_time_divisor: STEP_TIME_DIVISOR,
            orbit_angular_rate: ORBIT_ANGULAR_RATE,
            earth_rotation_speed: EARTH_ROTATION_SPEED,
            expansion_rate: EXPANSION_RATE,
            max_expansion_factor: None,
            real_universe_age: REAL_UNIVERSE_AGE_YEARS,
            universe_age_duration: UNIVERSE_AGE_SIM_DURATION,
            delta_display_exaggeration: DELTA_DISPLAY_EXAGGERATION,
            well_scale: WELL_SCALE,
            well_softening: WELL_SOFTENING,
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, crate::error::SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Coordinate-time increment applied per physics step.
    pub fn step_dt(&self) -> f64 {
        self.fixed_time_step * self.time_speed / self.step_time_divisor
    }

    /// Orbit-time increment applied per physics step.
    pub fn orbit_dt(&self) -> f64 {
        self.fixed_time_step * self.orbit_speed / self.step_time_divisor
    }

    /// Reject values that would produce NaN, negative radii or runaway steps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fixed_time_step", self.fixed_time_step),
            ("speed_of_light", self.speed_of_light),
            ("earth_radius", self.earth_radius),
            ("orbit_radius", self.orbit_radius),
            ("velocity_scale", self.velocity_scale),
            ("step_time_divisor", self.step_time_divisor),
            ("real_universe_age", self.real_universe_age),
            ("universe_age_duration", self.universe_age_duration),
        ];
        let non_negative = [
            ("gravitational_constant", self.gravitational_constant),
            ("base_satellite_speed", self.base_satellite_speed),
            ("time_speed", self.time_speed),
            ("orbit_speed", self.orbit_speed),
            ("expansion_rate", self.expansion_rate),
            ("delta_display_exaggeration", self.delta_display_exaggeration),
            ("well_scale", self.well_scale),
            ("well_softening", self.well_softening),
        ];
        let any_sign = [
            ("orbit_angular_rate", self.orbit_angular_rate),
            ("earth_rotation_speed", self.earth_rotation_speed),
        ];

        for &(field, value) in positive.iter().chain(&non_negative).chain(&any_sign) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if let Some(cap) = self.max_expansion_factor {
            if !cap.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: "max_expansion_factor",
                    value: cap,
                });
            }
            if cap < INITIAL_EXPANSION_FACTOR {
                return Err(ConfigError::CapBelowOne(cap));
            }
        }
        Ok(())
    }
}
