use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dilation_core::constants::{EARTH_MASS_KG, FIXED_TIME_STEP, ORBIT_RADIUS};
use dilation_core::types::ring_seeds;
use dilation_sim::OrbitalDilationModel;

/// Frame timestamps with jittered intervals, occasional stalls and one
/// backwards step.
fn jittered_frames(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut now = 1_000.0;
    let mut frames = Vec::with_capacity(count);
    for i in 0..count {
        let interval = if i % 97 == 96 {
            rng.gen_range(200.0..800.0)
        } else {
            rng.gen_range(8.0..34.0)
        };
        now += interval;
        if i == count / 2 {
            frames.push(now - 50.0);
        }
        frames.push(now);
    }
    frames
}

fn run(frames: &[f64], mass: impl Fn(usize) -> f64) -> String {
    let mut model = OrbitalDilationModel::with_defaults(&ring_seeds(6, ORBIT_RADIUS)).unwrap();
    for (i, &t) in frames.iter().enumerate() {
        model.update(t, mass(i)).unwrap();
    }
    serde_json::to_string(&model.snapshot()).unwrap()
}

#[test]
fn identical_inputs_produce_identical_snapshots() {
    let frames = jittered_frames(7, 2_000);
    let varying_mass = |i: usize| EARTH_MASS_KG * (1.0 + (i % 50) as f64 / 100.0);

    let run1 = run(&frames, varying_mass);
    let run2 = run(&frames, varying_mass);
    assert_eq!(run1, run2, "same inputs must give the same final state");
}

#[test]
fn different_mass_histories_diverge() {
    let frames = jittered_frames(7, 500);
    let light = run(&frames, |_| EARTH_MASS_KG);
    let heavy = run(&frames, |_| EARTH_MASS_KG * 4.0);
    assert_ne!(light, heavy);
}

#[test]
fn step_count_tracks_total_elapsed_time() {
    let frames = jittered_frames(42, 3_000);
    let mut model = OrbitalDilationModel::with_defaults(&ring_seeds(4, ORBIT_RADIUS)).unwrap();
    let mut steps = 0u64;
    for &t in &frames {
        steps += model.update(t, EARTH_MASS_KG).unwrap();
        let leftover = model.clock().leftover();
        assert!((0.0..FIXED_TIME_STEP).contains(&leftover));
    }

    // Backwards frames contribute nothing; everything else counts in full.
    let elapsed: f64 = frames
        .windows(2)
        .map(|w| ((w[1] - w[0]) / 1000.0).max(0.0))
        .sum();
    let expected = (elapsed / FIXED_TIME_STEP).floor() as i64;
    assert!(
        (steps as i64 - expected).abs() <= 1,
        "ran {steps} steps, expected about {expected}"
    );
    assert_eq!(steps, model.clock().total_steps());
}
