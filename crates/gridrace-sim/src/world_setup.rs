//! Entity spawn factories for setting up the simulation world.
//!
//! Creates vehicle entities with their full component bundles at the
//! track's start pose.

use hecs::World;

use gridrace_core::components::*;
use gridrace_core::types::Position;
use gridrace_track::TrackHeader;

/// Spawn a fleet of `count` vehicles at the track start, one per policy
/// slot, ids in spawn order.
pub fn spawn_fleet(world: &mut World, header: &TrackHeader, count: usize) {
    for id in 0..count {
        spawn_vehicle(world, header.start_position(), id);
    }
}

/// Spawn a single vehicle: heading 0, speed 0 (primed on the first tick),
/// alive, all accumulators zero, lap clock disarmed.
pub fn spawn_vehicle(world: &mut World, start: Position, id: usize) -> hecs::Entity {
    world.spawn((
        Vehicle,
        VehicleId(id),
        Pose {
            position: start,
            heading_deg: 0.0,
        },
        Motion {
            speed: 0.0,
            primed: false,
        },
        LifeState { alive: true },
        Odometer::default(),
        Corners::default(),
        RadarArray::default(),
        LapClock::default(),
    ))
}
