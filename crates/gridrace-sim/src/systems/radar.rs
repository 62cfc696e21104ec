//! Radar distance probing.
//!
//! Marches five fixed-angle rays outward from the vehicle center in unit
//! steps until a boundary cell is hit or the march cap is reached. This is
//! a fixed-resolution linear search, kept deliberately: the integer sample
//! grid is the determinism baseline for sensor readings.

use hecs::World;

use gridrace_core::components::{LifeState, Pose, RadarArray, RadarReading};
use gridrace_core::constants::{RADAR_MAX_LENGTH, RADAR_OFFSETS_DEG};
use gridrace_core::types::{heading_vector, Position};
use gridrace_track::TrackMask;

/// Recompute all five readings for every alive vehicle. The fresh readings
/// feed the NEXT tick's control decision.
pub fn run(world: &mut World, mask: &TrackMask) {
    for (_entity, (pose, radar, life)) in
        world.query_mut::<(&Pose, &mut RadarArray, &LifeState)>()
    {
        if !life.alive {
            continue;
        }

        let center = pose.center();
        for (reading, offset) in radar.readings.iter_mut().zip(RADAR_OFFSETS_DEG) {
            *reading = march_ray(mask, center, pose.heading_deg, offset);
        }
    }
}

/// March a single ray from `center` along `heading + offset`.
///
/// Sample coordinates are truncated to the integer cell grid each step,
/// and the reported distance is the truncated Euclidean distance from the
/// center to the final sample point (hit or cap).
pub fn march_ray(
    mask: &TrackMask,
    center: Position,
    heading_deg: f64,
    offset_deg: f64,
) -> RadarReading {
    let dir = heading_vector(heading_deg, offset_deg);

    let mut length = 0i32;
    let mut x = center.x as i32;
    let mut y = center.y as i32;

    while !mask.is_boundary(x, y) && length < RADAR_MAX_LENGTH {
        length += 1;
        x = (center.x + dir.x * length as f64) as i32;
        y = (center.y + dir.y * length as f64) as i32;
    }

    let hit = Position::new(x as f64, y as f64);
    RadarReading {
        hit,
        distance: center.distance_to(&hit) as i32,
    }
}
