//! Snapshot system: queries the ECS world and builds a complete
//! SessionSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use gridrace_core::components::*;
use gridrace_core::enums::RunPhase;
use gridrace_core::events::SimEvent;
use gridrace_core::state::{SessionSnapshot, VehicleView};
use gridrace_core::types::SimTime;

use crate::session::SessionState;
use crate::systems::reward;

/// Build a complete SessionSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: RunPhase,
    session: &SessionState,
    events: Vec<SimEvent>,
) -> SessionSnapshot {
    let mut vehicles: Vec<VehicleView> = world
        .query::<(
            &VehicleId,
            &Pose,
            &Motion,
            &LifeState,
            &Odometer,
            &Corners,
            &RadarArray,
            &LapClock,
        )>()
        .iter()
        .map(
            |(_, (id, pose, motion, life, odometer, corners, radar, clock))| VehicleView {
                id: id.0,
                position: pose.position,
                heading_deg: pose.heading_deg,
                speed: motion.speed,
                alive: life.alive,
                distance: odometer.distance,
                corners: corners.points,
                radar_distances: radar.readings.map(|r| r.distance),
                observation: radar.observation(),
                reward: reward::reward(life.alive, odometer.distance),
                lap_ticks_completed: clock.just_completed.unwrap_or(0),
            },
        )
        .collect();
    vehicles.sort_by_key(|v| v.id);

    let still_alive = vehicles.iter().filter(|v| v.alive).count() as u32;

    SessionSnapshot {
        time: *time,
        phase,
        generation: session.generation,
        still_alive,
        fastest_lap_ticks: session.fastest_lap_ticks,
        vehicles,
        events,
    }
}
