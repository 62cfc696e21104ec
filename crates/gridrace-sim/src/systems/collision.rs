//! Corner collision detection.
//!
//! Tests the current tick's four corners against the boundary mask.
//! Any corner on a boundary cell kills the vehicle; the check
//! short-circuits on the first hit. No swept check between ticks — a
//! sufficiently fast vehicle can tunnel through a thin boundary, which is
//! an accepted approximation of this model.

use hecs::World;

use gridrace_core::components::{Corners, LifeState, VehicleId};
use gridrace_core::events::SimEvent;
use gridrace_track::TrackMask;

/// Check all alive vehicles. Returns a crash event per new death.
pub fn run(world: &mut World, mask: &TrackMask, tick: u64) -> Vec<SimEvent> {
    let mut events = Vec::new();

    for (_entity, (id, corners, life)) in
        world.query_mut::<(&VehicleId, &Corners, &mut LifeState)>()
    {
        if !life.alive {
            continue;
        }

        let hit = corners
            .points
            .iter()
            .any(|p| mask.is_boundary(p.x as i32, p.y as i32));
        if hit {
            life.alive = false;
            events.push(SimEvent::VehicleCrashed {
                vehicle: id.0,
                tick,
            });
        }
    }

    events
}
