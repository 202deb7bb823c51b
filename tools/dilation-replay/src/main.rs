//! dilation-replay: drive the dilation model headlessly and print JSON.
//!
//! Usage:
//!   dilation-replay run --frames 600 --worker --pause-at 200 --resume-at 260
//!   dilation-replay delta --mass 5.972e24 --radius 6
//!   dilation-replay well --mass 5.972e24

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use dilation_core::config::PhysicsConfig;
use dilation_core::constants::{DEFAULT_SATELLITE_COUNT, EARTH_MASS_KG};
use dilation_core::types::{ring_seeds, Position};
use dilation_sim::spacetime::WellGrid;
use dilation_sim::systems::proper_time::calculate_delta;
use dilation_worker::{Driver, ExecutionMode};

#[derive(Parser)]
#[command(name = "dilation-replay")]
#[command(about = "Headless driver for the orbital time-dilation model")]
struct Cli {
    /// JSON file overriding any subset of the physics config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a synthetic frame clock and print snapshots as JSON lines
    Run {
        #[arg(long, default_value = "600")]
        frames: u32,
        /// Wall-clock milliseconds between frames
        #[arg(long, default_value = "16.6667")]
        frame_ms: f64,
        /// Gravitating mass (kg)
        #[arg(long, default_value_t = EARTH_MASS_KG)]
        mass: f64,
        #[arg(long, default_value_t = DEFAULT_SATELLITE_COUNT)]
        satellites: usize,
        /// Run the model on the physics worker thread
        #[arg(long)]
        worker: bool,
        /// Print every Nth frame
        #[arg(long, default_value = "60")]
        every: u32,
        #[arg(long)]
        pause_at: Option<u32>,
        #[arg(long)]
        resume_at: Option<u32>,
        #[arg(long)]
        reset_at: Option<u32>,
    },

    /// Print the time-dilation delta at an orbit radius
    Delta {
        #[arg(long, default_value_t = EARTH_MASS_KG)]
        mass: f64,
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Print the spacetime well height field
    Well {
        #[arg(long, default_value_t = EARTH_MASS_KG)]
        mass: f64,
        #[arg(long, default_value = "10.0")]
        size: f64,
        #[arg(long, default_value = "0.1")]
        step: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            frames,
            frame_ms,
            mass,
            satellites,
            worker,
            every,
            pause_at,
            resume_at,
            reset_at,
        } => {
            let mode = if worker {
                ExecutionMode::Worker
            } else {
                ExecutionMode::InContext
            };
            let seeds = ring_seeds(satellites, config.orbit_radius);
            let mut driver = Driver::start(mode, &seeds, config)?;
            info!(mode = ?driver.mode(), frames, "replay started");

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let every = every.max(1);
            for frame in 0..frames {
                if pause_at == Some(frame) {
                    driver.set_paused(true)?;
                }
                if resume_at == Some(frame) {
                    driver.set_paused(false)?;
                }
                if reset_at == Some(frame) {
                    driver.reset()?;
                }

                let now = f64::from(frame) * frame_ms;
                let snapshot = driver.update(now, mass)?;
                if frame % every == 0 || frame + 1 == frames {
                    let line = json!({ "frame": frame, "now": now, "state": snapshot });
                    writeln!(out, "{line}")?;
                }
            }
        }

        Commands::Delta { mass, radius } => {
            anyhow::ensure!(mass.is_finite() && mass > 0.0, "mass must be positive, got {mass}");
            let r = radius.unwrap_or(config.orbit_radius);
            let delta = calculate_delta(Position::new(r, 0.0, 0.0).into(), mass, &config);
            let line = json!({
                "mass": mass,
                "radius": r,
                "delta": delta,
                "displayDelta": delta * config.delta_display_exaggeration,
                "correctedRate": 1.0 - delta,
            });
            println!("{line}");
        }

        Commands::Well { mass, size, step } => {
            let grid = WellGrid::sample(mass, size, step, &config)?;
            info!(center_depth = grid.center_depth(), "well sampled");
            println!("{}", serde_json::to_string(&grid)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<PhysicsConfig> {
    let Some(path) = path else {
        return Ok(PhysicsConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    PhysicsConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}
