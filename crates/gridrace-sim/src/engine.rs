//! Simulation engine — the core of the evaluator.
//!
//! `SimulationEngine` owns the hecs ECS world, the track mask, and the
//! session state. It advances the whole fleet in lock-step each tick and
//! produces `SessionSnapshot`s. Completely headless, enabling
//! deterministic testing: identical track + action sequences yield
//! bit-identical snapshots.

use hecs::World;

use gridrace_core::components::{LifeState, RadarArray, VehicleId};
use gridrace_core::constants::{MAX_TICKS, RADAR_COUNT};
use gridrace_core::enums::{Action, EndReason, RunPhase};
use gridrace_core::events::SimEvent;
use gridrace_core::state::SessionSnapshot;
use gridrace_core::types::SimTime;
use gridrace_track::TrackMask;

use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation session.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Number of vehicles in the fleet (one per policy slot).
    pub vehicle_count: usize,
    /// Tick budget per run; the run terminates when it is exhausted.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            vehicle_count: 8,
            max_ticks: MAX_TICKS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    track: TrackMask,
    time: SimTime,
    phase: RunPhase,
    config: SimConfig,
    session: SessionState,
    end_reason: Option<EndReason>,
}

impl SimulationEngine {
    /// Create a new engine and spawn the first fleet at the track start.
    pub fn new(track: TrackMask, config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_fleet(&mut world, &track.header, config.vehicle_count);
        Self {
            world,
            track,
            time: SimTime::default(),
            phase: RunPhase::Running,
            config,
            session: SessionState {
                generation: 1,
                ..SessionState::default()
            },
            end_reason: None,
        }
    }

    /// Discretized radar observations per vehicle, in fleet order.
    /// These are the PREVIOUS tick's readings (all zeros before the first
    /// tick), matching the decide-then-step control flow.
    pub fn observations(&self) -> Vec<[i32; RADAR_COUNT]> {
        let mut obs: Vec<(usize, [i32; RADAR_COUNT])> = self
            .world
            .query::<(&VehicleId, &RadarArray)>()
            .iter()
            .map(|(_, (id, radar))| (id.0, radar.observation()))
            .collect();
        obs.sort_by_key(|(id, _)| *id);
        obs.into_iter().map(|(_, o)| o).collect()
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. All vehicles advance within the tick before the
    /// termination conditions are evaluated, never mid-tick.
    ///
    /// Once the run is complete, further calls are frozen no-ops that
    /// return the final state with no new events.
    ///
    /// # Panics
    /// Panics unless exactly one action per vehicle is supplied.
    pub fn tick(&mut self, actions: &[Action]) -> SessionSnapshot {
        assert_eq!(
            actions.len(),
            self.config.vehicle_count,
            "expected {} actions, got {}",
            self.config.vehicle_count,
            actions.len()
        );

        if self.phase == RunPhase::Complete {
            return self.snapshot(Vec::new());
        }

        let mut events = Vec::new();

        systems::control::run(&mut self.world, actions);
        systems::movement::run(&mut self.world, &self.track.header);

        // Events carry the tick the snapshot will report, i.e. the clock
        // value after this tick's advance.
        let crashes = systems::collision::run(&mut self.world, &self.track, self.time.tick + 1);
        self.session.crashes += crashes.len() as u32;
        events.extend(crashes);

        systems::radar::run(&mut self.world, &self.track);

        events.extend(systems::lap_gate::run(
            &mut self.world,
            &self.track.header,
            &mut self.session,
        ));

        self.time.advance();

        if self.still_alive() == 0 {
            self.finish(EndReason::AllCrashed, &mut events);
        } else if self.time.tick >= self.config.max_ticks {
            self.finish(EndReason::TickBudget, &mut events);
        }

        self.snapshot(events)
    }

    /// Respawn the fleet for the next generation. The lap record and
    /// session tallies survive; the clock and vehicles do not.
    pub fn next_generation(&mut self) {
        self.world.clear();
        world_setup::spawn_fleet(&mut self.world, &self.track.header, self.config.vehicle_count);
        self.time = SimTime::default();
        self.phase = RunPhase::Running;
        self.end_reason = None;
        self.session.generation += 1;
    }

    /// Get the current run phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Why the run ended, if it has.
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Get a read-only reference to the track.
    pub fn track(&self) -> &TrackMask {
        &self.track
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Teleport a vehicle (for tests that need a specific pose).
    #[cfg(test)]
    pub fn place_vehicle(&mut self, id: usize, x: f64, y: f64, heading_deg: f64) {
        use gridrace_core::components::Pose;
        use gridrace_core::types::Position;

        for (_entity, (vid, pose)) in self.world.query_mut::<(&VehicleId, &mut Pose)>() {
            if vid.0 == id {
                pose.position = Position::new(x, y);
                pose.heading_deg = heading_deg;
            }
        }
    }

    fn still_alive(&self) -> usize {
        self.world
            .query::<&LifeState>()
            .iter()
            .filter(|(_, life)| life.alive)
            .count()
    }

    fn finish(&mut self, reason: EndReason, events: &mut Vec<SimEvent>) {
        self.phase = RunPhase::Complete;
        self.end_reason = Some(reason);
        events.push(SimEvent::RunEnded { reason });
    }

    fn snapshot(&self, events: Vec<SimEvent>) -> SessionSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.session, events)
    }
}
