//! Physical constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::PhysicsConfig`]. The model
//! never reads them directly; every value flows through the config.

/// Physics rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds of wall time per physics step.
pub const FIXED_TIME_STEP: f64 = 1.0 / TICK_RATE as f64;

// --- Physical constants ---

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Speed of light (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Earth mass (kg), the default gravitating mass.
pub const EARTH_MASS_KG: f64 = 5.972e24;

// --- Scene geometry (visual units) ---

/// Radius of the central body; the receiver clock sits on its surface.
pub const EARTH_RADIUS: f64 = 1.0;

/// Radius of the circular satellite orbit.
pub const ORBIT_RADIUS: f64 = 6.0;

/// Default number of satellites seeded by tools and tests.
pub const DEFAULT_SATELLITE_COUNT: usize = 4;

// --- Velocity term ---

/// GPS satellite orbital speed (m/s).
pub const BASE_SATELLITE_SPEED: f64 = 3870.0;

/// Divisor applied to the satellite speed before the velocity term.
pub const VELOCITY_SCALE: f64 = 1e6;

// --- Time axes ---

/// Coordinate-time multiplier per physics step.
pub const TIME_SPEED: f64 = 4132.2;

/// Orbit-time multiplier per physics step, independent of [`TIME_SPEED`].
pub const ORBIT_SPEED: f64 = 10.0;

/// Divisor shared by both per-step increments.
pub const STEP_TIME_DIVISOR: f64 = 1e3;

/// Orbital angular rate (radians per unit of orbit time).
pub const ORBIT_ANGULAR_RATE: f64 = 0.5;

/// Earth rotation rate (radians per unit of coordinate time).
pub const EARTH_ROTATION_SPEED: f64 = 0.001;

// --- Expansion ---

/// Expansion factor growth per unit of coordinate time.
pub const EXPANSION_RATE: f64 = 0.02;

/// Expansion factor at time zero.
pub const INITIAL_EXPANSION_FACTOR: f64 = 1.0;

// --- Universe age display ---

/// Age of the universe in years.
pub const REAL_UNIVERSE_AGE_YEARS: f64 = 13.8e9;

/// Simulation time that maps onto the full universe age.
pub const UNIVERSE_AGE_SIM_DURATION: f64 = 300.0;

// --- Presentation tuning ---

/// Exaggeration applied to the delta when shown to users.
pub const DELTA_DISPLAY_EXAGGERATION: f64 = 1e6;

/// Depth multiplier for the spacetime well height field.
pub const WELL_SCALE: f64 = 5e2;

/// Softening term that keeps the well finite at the center.
pub const WELL_SOFTENING: f64 = 0.5;

/// Side length of the spacetime well grid.
pub const WELL_GRID_SIZE: f64 = 10.0;

/// Vertex spacing of the spacetime well grid.
pub const WELL_GRID_STEP: f64 = 0.1;

/// Largest number of segments per side a well grid may be sampled with.
pub const WELL_MAX_SEGMENTS: usize = 4096;
