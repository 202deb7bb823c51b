use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dilation_core::config::PhysicsConfig;
use dilation_core::constants::{EARTH_MASS_KG, ORBIT_RADIUS};
use dilation_core::error::SimError;
use dilation_core::state::SimulationSnapshot;
use dilation_core::types::ring_seeds;
use dilation_worker::{Driver, ExecutionMode};

#[derive(Debug, Clone, Copy)]
enum Step {
    Update { now: f64, mass: f64 },
    Pause(bool),
    Reset,
}

fn drive(mode: ExecutionMode, script: &[Step]) -> Vec<SimulationSnapshot> {
    let seeds = ring_seeds(4, ORBIT_RADIUS);
    let mut driver = Driver::start(mode, &seeds, PhysicsConfig::default()).unwrap();
    assert_eq!(driver.mode(), mode);

    let mut snapshots = Vec::new();
    for step in script {
        match *step {
            Step::Update { now, mass } => snapshots.push(driver.update(now, mass).unwrap()),
            Step::Pause(paused) => driver.set_paused(paused).unwrap(),
            Step::Reset => driver.reset().unwrap(),
        }
    }
    snapshots
}

fn update(now: f64) -> Step {
    Step::Update {
        now,
        mass: EARTH_MASS_KG,
    }
}

#[test]
fn worker_matches_in_context_through_pause_and_resume() {
    let mut script: Vec<Step> = (0..20).map(|i| update(i as f64 * 16.7)).collect();
    script.extend([
        Step::Pause(true),
        update(2_000.0),
        Step::Pause(false),
        update(5_000.0),
        update(5_100.0),
    ]);

    let local = drive(ExecutionMode::InContext, &script);
    let remote = drive(ExecutionMode::Worker, &script);
    assert_eq!(local.len(), remote.len());
    assert_eq!(local, remote);

    let last = remote.last().unwrap();
    let paused_frame = &remote[20];
    let resumed_frame = &remote[21];
    assert_eq!(paused_frame.simulation_time, remote[19].simulation_time);
    assert_eq!(resumed_frame.simulation_time, paused_frame.simulation_time);
    assert!(last.simulation_time > paused_frame.simulation_time);
}

#[test]
fn worker_matches_in_context_on_random_script() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut now = 0.0;
    let mut paused = false;
    let mut script = Vec::new();
    for _ in 0..1_500 {
        let roll: f64 = rng.gen();
        if roll < 0.01 {
            paused = !paused;
            script.push(Step::Pause(paused));
        } else if roll < 0.013 {
            script.push(Step::Reset);
        } else {
            now += rng.gen_range(5.0..40.0);
            let mass = EARTH_MASS_KG * rng.gen_range(0.2..2.0);
            script.push(Step::Update { now, mass });
        }
    }

    let local = drive(ExecutionMode::InContext, &script);
    let remote = drive(ExecutionMode::Worker, &script);
    assert_eq!(local, remote);
}

#[test]
fn worker_reports_invalid_input_and_keeps_running() {
    let seeds = ring_seeds(4, ORBIT_RADIUS);
    let mut driver = Driver::worker(&seeds, PhysicsConfig::default()).unwrap();
    driver.update(0.0, EARTH_MASS_KG).unwrap();

    let err = driver.update(100.0, 0.0).unwrap_err();
    assert!(matches!(err, SimError::WorkerFault(_)));

    let snapshot = driver.update(100.0, EARTH_MASS_KG).unwrap();
    assert!(snapshot.simulation_time > 0.0);
}

#[test]
fn reset_through_worker_returns_to_time_zero() {
    let seeds = ring_seeds(4, ORBIT_RADIUS);
    let mut driver = Driver::worker(&seeds, PhysicsConfig::default()).unwrap();
    driver.update(0.0, EARTH_MASS_KG).unwrap();
    driver.update(400.0, EARTH_MASS_KG).unwrap();
    driver.reset().unwrap();
    driver.reset().unwrap();

    // Same timestamp as the last update: no elapsed time, no steps
    let snapshot = driver.update(400.0, EARTH_MASS_KG).unwrap();
    assert_eq!(snapshot.simulation_time, 0.0);
    assert_eq!(snapshot.expansion, 1.0);
    assert!(snapshot.clocks.iter().all(|c| c.clock == 0.0));
}
