//! Simulation engine.
//!
//! `OrbitalDilationModel` owns the satellite world, the fixed-timestep clock
//! and every accumulator. An external driver calls `update(now, mass)` once
//! per frame and reads copies back. Completely headless, so the same model
//! runs in-context or inside the worker with identical results.

use hecs::World;
use tracing::{debug, trace};

use dilation_core::config::PhysicsConfig;
use dilation_core::constants::INITIAL_EXPANSION_FACTOR;
use dilation_core::error::{ConfigError, SimError, SimResult};
use dilation_core::state::SimulationSnapshot;
use dilation_core::types::{Position, SatelliteClock, SatelliteSeed, SatelliteView};

use crate::clock::SimulationClock;
use crate::components::{OrbitPosition, SatelliteSlot};
use crate::systems;
use crate::systems::snapshot::GlobalState;

pub struct OrbitalDilationModel {
    world: World,
    satellite_count: usize,
    config: PhysicsConfig,
    clock: SimulationClock,
    /// Coordinate time; the receiver clock.
    simulation_time: f64,
    /// Drives orbital angle only.
    orbit_time: f64,
    expansion_factor: f64,
    earth_rotation_angle: f64,
}

impl OrbitalDilationModel {
    /// Build a model from plain satellite seeds. Fails on invalid config.
    ///
    /// Satellites start on their orbit-time-zero slots, so positions and
    /// deltas are meaningful before the first step.
    pub fn new(satellites: &[SatelliteSeed], config: PhysicsConfig) -> SimResult<Self> {
        config.validate()?;
        let clock = SimulationClock::new(config.fixed_time_step)?;

        let mut world = World::new();
        for (index, seed) in satellites.iter().enumerate() {
            world.spawn((
                SatelliteSlot { index },
                OrbitPosition(seed.position.into()),
                SatelliteClock::default(),
            ));
        }
        systems::orbit::run(&mut world, satellites.len(), 0.0, &config);

        Ok(Self {
            world,
            satellite_count: satellites.len(),
            config,
            clock,
            simulation_time: 0.0,
            orbit_time: 0.0,
            expansion_factor: INITIAL_EXPANSION_FACTOR,
            earth_rotation_angle: 0.0,
        })
    }

    /// Build a model with the default tuning.
    pub fn with_defaults(satellites: &[SatelliteSeed]) -> SimResult<Self> {
        Self::new(satellites, PhysicsConfig::default())
    }

    /// Advance to `now_ms` under gravitating `mass`. Returns the number of
    /// physics steps executed.
    pub fn update(&mut self, now_ms: f64, mass: f64) -> SimResult<u64> {
        validate_mass(mass)?;
        if !now_ms.is_finite() {
            return Err(SimError::InvalidTimestamp(now_ms));
        }

        let steps = self.clock.update(now_ms);
        for _ in 0..steps {
            self.step(mass);
        }
        if steps > 0 {
            trace!(steps, simulation_time = self.simulation_time, "advanced");
        }
        Ok(steps)
    }

    /// Apply one fixed-size physics step.
    pub(crate) fn step(&mut self, mass: f64) {
        let dt = self.config.step_dt();

        self.simulation_time += dt;
        self.orbit_time += self.config.orbit_dt();
        self.expansion_factor = systems::expansion::advance(self.expansion_factor, dt, &self.config);

        // 1. Place satellites on the ring
        systems::orbit::run(
            &mut self.world,
            self.satellite_count,
            self.orbit_time,
            &self.config,
        );
        // 2. Integrate proper time at the new positions
        systems::proper_time::run(&mut self.world, mass, dt, &self.config);

        self.earth_rotation_angle += self.config.earth_rotation_speed * dt;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.clock.is_paused() {
            debug!(paused, simulation_time = self.simulation_time, "pause state changed");
        }
        self.clock.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Return to time zero. Keeps satellites, their clock rates and the pause
    /// flag; zeroes every accumulator and clock, and puts satellites back on
    /// their time-zero slots.
    pub fn reset(&mut self) {
        debug!(simulation_time = self.simulation_time, "reset");
        self.simulation_time = 0.0;
        self.orbit_time = 0.0;
        self.expansion_factor = INITIAL_EXPANSION_FACTOR;
        self.earth_rotation_angle = 0.0;
        self.clock.reset();

        for (_entity, clock) in self.world.query_mut::<&mut SatelliteClock>() {
            clock.clock = 0.0;
        }
        systems::orbit::run(&mut self.world, self.satellite_count, 0.0, &self.config);
    }

    pub fn set_earth_rotation_speed(&mut self, speed: f64) -> SimResult<()> {
        if !speed.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "earth_rotation_speed",
                value: speed,
            }
            .into());
        }
        self.config.earth_rotation_speed = speed;
        Ok(())
    }

    /// Set one satellite's clock-rate multiplier.
    pub fn set_clock_rate(&mut self, index: usize, rate: f64) -> SimResult<()> {
        validate_clock_rate(rate)?;
        self.check_index(index)?;
        for (_entity, (slot, clock)) in self
            .world
            .query_mut::<(&SatelliteSlot, &mut SatelliteClock)>()
        {
            if slot.index == index {
                clock.clock_rate = rate;
            }
        }
        Ok(())
    }

    /// Set every satellite's clock-rate multiplier.
    pub fn set_all_clock_rates(&mut self, rate: f64) -> SimResult<()> {
        validate_clock_rate(rate)?;
        for (_entity, clock) in self.world.query_mut::<&mut SatelliteClock>() {
            clock.clock_rate = rate;
        }
        Ok(())
    }

    /// Set each satellite's rate to `1 - delta` at its current position.
    /// Nothing is changed if any corrected rate would be invalid.
    pub fn apply_clock_correction(&mut self, mass: f64) -> SimResult<()> {
        validate_mass(mass)?;
        let config = &self.config;

        let mut corrections = Vec::with_capacity(self.satellite_count);
        for (entity, pos) in self.world.query::<&OrbitPosition>().iter() {
            let delta = systems::proper_time::calculate_delta(pos.0, mass, config);
            let rate = systems::proper_time::corrected_rate(delta);
            validate_clock_rate(rate)?;
            corrections.push((entity, rate));
        }

        for (entity, rate) in corrections {
            if let Ok(mut clock) = self.world.get::<&mut SatelliteClock>(entity) {
                clock.clock_rate = rate;
            }
        }
        debug!(mass, "clock correction applied");
        Ok(())
    }

    /// Unscaled delta of one satellite at its current position.
    pub fn delta(&self, index: usize, mass: f64) -> SimResult<f64> {
        validate_mass(mass)?;
        let view = self.satellite(index)?;
        Ok(systems::proper_time::calculate_delta(
            view.position.into(),
            mass,
            &self.config,
        ))
    }

    /// Delta scaled by the display exaggeration, for user-facing readouts.
    pub fn display_delta(&self, index: usize, mass: f64) -> SimResult<f64> {
        Ok(self.delta(index, mass)? * self.config.delta_display_exaggeration)
    }

    /// Ranging error (metres) a receiver would make trusting the satellite
    /// clocks: `c · max |clock − simulation_time|`.
    pub fn position_error_estimate(&self) -> f64 {
        let max_drift = systems::snapshot::satellite_views(&self.world)
            .iter()
            .map(|v| (v.clock - self.simulation_time).abs())
            .fold(0.0, f64::max);
        self.config.speed_of_light * max_drift
    }

    /// Displayed universe age in years, linear in simulation time and
    /// clamped to the real age.
    pub fn universe_age(&self) -> f64 {
        let age = self.simulation_time / self.config.universe_age_duration
            * self.config.real_universe_age;
        age.min(self.config.real_universe_age)
    }

    pub fn expansion_factor(&self) -> f64 {
        self.expansion_factor
    }

    /// Earth rotation angle (radians).
    pub fn earth_rotation(&self) -> f64 {
        self.earth_rotation_angle
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    pub fn orbit_time(&self) -> f64 {
        self.orbit_time
    }

    /// Copies of satellite positions, ordered by slot.
    pub fn satellite_positions(&self) -> Vec<Position> {
        systems::snapshot::satellite_views(&self.world)
            .into_iter()
            .map(|v| v.position)
            .collect()
    }

    /// Copies of every satellite, ordered by slot.
    pub fn satellites(&self) -> Vec<SatelliteView> {
        systems::snapshot::satellite_views(&self.world)
    }

    pub fn satellite(&self, index: usize) -> SimResult<SatelliteView> {
        self.check_index(index)?;
        systems::snapshot::satellite_views(&self.world)
            .into_iter()
            .find(|v| v.index == index)
            .ok_or(SimError::UnknownSatellite {
                index,
                count: self.satellite_count,
            })
    }

    pub fn satellite_count(&self) -> usize {
        self.satellite_count
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Read-only view of the fixed-timestep clock.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Build the snapshot handed to renderers and worker replies.
    pub fn snapshot(&self) -> SimulationSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            GlobalState {
                rotation: self.earth_rotation_angle,
                expansion: self.expansion_factor,
                universe_age: self.universe_age(),
                simulation_time: self.simulation_time,
            },
        )
    }

    fn check_index(&self, index: usize) -> SimResult<()> {
        if index >= self.satellite_count {
            return Err(SimError::UnknownSatellite {
                index,
                count: self.satellite_count,
            });
        }
        Ok(())
    }
}

fn validate_mass(mass: f64) -> SimResult<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(SimError::InvalidMass(mass));
    }
    Ok(())
}

fn validate_clock_rate(rate: f64) -> SimResult<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(SimError::InvalidClockRate(rate));
    }
    Ok(())
}
