//! gridrace: headless driver for the GRIDRACE simulation.
//!
//! Runs a fleet of baseline policies over one or more generations on a
//! .tmsk track (or a synthetic ring circuit when no track is given) and
//! prints per-generation summaries. External optimizers embed
//! `gridrace-sim` directly; this binary exists for smoke runs and demos.
//!
//! Usage:
//!   gridrace --track circuit.tmsk --generations 5
//!   gridrace --vehicles 8 --seed 42 --json

use std::path::PathBuf;
use std::process;

use gridrace_core::constants::{DEFAULT_TRACK_HEIGHT, DEFAULT_TRACK_WIDTH};
use gridrace_core::enums::Action;
use gridrace_core::events::SimEvent;
use gridrace_sim::engine::{SimConfig, SimulationEngine};
use gridrace_sim::policy::{FullThrottle, Policy, SeededWander, WallAvoider};
use gridrace_track::builder::ring_circuit;
use gridrace_track::tmsk::load_tmsk;

struct Options {
    track: Option<PathBuf>,
    generations: u32,
    vehicles: usize,
    seed: u64,
    json: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let opts = parse_options(&args[1..]);

    let track = match &opts.track {
        Some(path) => match load_tmsk(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => ring_circuit(DEFAULT_TRACK_WIDTH, DEFAULT_TRACK_HEIGHT, 40, 260),
    };

    eprintln!(
        "Track: {}×{}, start ({}, {})",
        track.header.width, track.header.height, track.header.start_x, track.header.start_y
    );

    let mut engine = SimulationEngine::new(
        track,
        SimConfig {
            vehicle_count: opts.vehicles,
            ..Default::default()
        },
    );

    for generation in 1..=opts.generations {
        let mut policies = build_roster(opts.vehicles, opts.seed + generation as u64);
        let fitness = run_generation(&mut engine, &mut policies, opts.json);

        let best = fitness
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, f)| (i, *f))
            .unwrap_or((0, 0.0));

        eprintln!(
            "Generation {generation}: {} ticks, best fitness {:.1} ({}), fastest lap {}",
            engine.time().tick,
            best.1,
            policies[best.0].name(),
            match engine.session().fastest_lap_ticks {
                Some(t) => format!("{t} ticks"),
                None => "none".to_string(),
            }
        );

        if generation < opts.generations {
            engine.next_generation();
        }
    }

    let session = engine.session();
    eprintln!(
        "Session: {} laps, {} crashes over {} generation(s)",
        session.laps_completed, session.crashes, session.generation
    );
}

/// Observe, decide, step, accumulate per-vehicle fitness until the run ends.
fn run_generation(
    engine: &mut SimulationEngine,
    policies: &mut [Box<dyn Policy>],
    json: bool,
) -> Vec<f64> {
    let mut fitness = vec![0.0f64; policies.len()];
    // Reward accrues only for vehicles that entered the tick alive, so the
    // crash penalty is counted exactly once per vehicle.
    let mut alive_before = vec![true; policies.len()];

    loop {
        let observations = engine.observations();
        let actions: Vec<Action> = policies
            .iter_mut()
            .zip(&observations)
            .map(|(policy, obs)| policy.act(obs))
            .collect();

        let snapshot = engine.tick(&actions);

        for view in &snapshot.vehicles {
            if alive_before[view.id] {
                fitness[view.id] += view.reward;
            }
            alive_before[view.id] = view.alive;
        }

        for event in &snapshot.events {
            match event {
                SimEvent::LapCompleted {
                    vehicle,
                    lap_ticks,
                    record,
                } => {
                    let tag = if *record { " (record)" } else { "" };
                    eprintln!(
                        "  tick {}: {} completed a lap in {lap_ticks} ticks{tag}",
                        snapshot.time.tick,
                        policies[*vehicle].name()
                    );
                }
                SimEvent::VehicleCrashed { vehicle, tick } => {
                    eprintln!("  tick {tick}: {} crashed", policies[*vehicle].name());
                }
                SimEvent::RunEnded { reason } => {
                    eprintln!("  run ended: {reason:?}");
                }
            }
        }

        if json {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error serializing snapshot: {e}");
                    process::exit(1);
                }
            }
        }

        if snapshot.phase == gridrace_core::enums::RunPhase::Complete {
            return fitness;
        }
    }
}

/// One wall-avoider and one full-throttle baseline, padded out with seeded
/// wanderers so every fleet slot has a driver.
fn build_roster(vehicles: usize, seed: u64) -> Vec<Box<dyn Policy>> {
    let mut roster: Vec<Box<dyn Policy>> = Vec::with_capacity(vehicles);
    for slot in 0..vehicles {
        match slot {
            0 => roster.push(Box::new(WallAvoider::default())),
            1 => roster.push(Box::new(FullThrottle)),
            n => roster.push(Box::new(SeededWander::new(seed.wrapping_add(n as u64)))),
        }
    }
    roster
}

fn parse_options(args: &[String]) -> Options {
    let mut opts = Options {
        track: None,
        generations: 1,
        vehicles: 8,
        seed: 0,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--track" if i + 1 < args.len() => {
                opts.track = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--generations" if i + 1 < args.len() => {
                opts.generations = parse_or_exit(&args[i + 1], "--generations");
                i += 2;
            }
            "--vehicles" if i + 1 < args.len() => {
                opts.vehicles = parse_or_exit(&args[i + 1], "--vehicles");
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                opts.seed = parse_or_exit(&args[i + 1], "--seed");
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    if opts.vehicles == 0 {
        eprintln!("Error: --vehicles must be at least 1");
        process::exit(1);
    }

    opts
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: invalid value for {flag}: {value}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrace_core::constants::{CRASH_PENALTY, HALF_DIAGONAL, RADAR_COUNT};
    use gridrace_track::{TrackHeader, TrackMask};

    /// Steers left every tick, circling away from the wall patch below.
    struct LeftCircler;

    impl Policy for LeftCircler {
        fn name(&self) -> &str {
            "left-circler"
        }

        fn act(&mut self, _observation: &[i32; RADAR_COUNT]) -> Action {
            Action::SteerLeft
        }
    }

    #[test]
    fn test_fitness_counts_crash_penalty_once() {
        let mut track = TrackMask::open(TrackHeader {
            width: 2000,
            height: 2000,
            start_x: 1000.0,
            start_y: 1000.0,
            lap_start_x: 1900.0,
            lap_finish_x: 50.0,
        });
        // Wall patch straight ahead of the spawn; the circler turns off
        // the collision line before reaching it.
        for x in 1040..1100 {
            for y in 1000..1010 {
                track.set_boundary(x, y);
            }
        }

        let mut engine = SimulationEngine::new(
            track,
            SimConfig {
                vehicle_count: 2,
                max_ticks: 20,
            },
        );
        let mut policies: Vec<Box<dyn Policy>> =
            vec![Box::new(FullThrottle), Box::new(LeftCircler)];

        let fitness = run_generation(&mut engine, &mut policies, false);

        // Vehicle 0 survives tick 1 (speed 22) and crashes on tick 2; its
        // fitness is one alive-tick reward plus a single crash penalty,
        // regardless of how long the run continues afterwards.
        let expected = (22.0 / HALF_DIAGONAL + 1.0) + CRASH_PENALTY;
        assert!((fitness[0] - expected).abs() < 1e-9, "fitness {}", fitness[0]);
        assert!(fitness[1] > 0.0);
    }
}

fn print_usage() {
    eprintln!(
        "gridrace: headless driving simulation runner\n\
         \n\
         Options:\n\
         \n\
           --track <path>      .tmsk track file (default: synthetic ring circuit)\n\
           --generations <N>   Generations to run (default: 1)\n\
           --vehicles <N>      Fleet size (default: 8)\n\
           --seed <N>          Base seed for the wanderer baselines (default: 0)\n\
           --json              Print one snapshot JSON line per tick to stdout\n\
         \n\
         Examples:\n\
         \n\
           gridrace --track circuit.tmsk --generations 5\n\
           gridrace --vehicles 4 --seed 42 --json > run.jsonl\n"
    );
}
