//! Kinematic integration system.
//!
//! Advances each alive vehicle's pose along its heading, clamps the
//! position to the on-screen margins, updates the odometer, and recomputes
//! the bounding corners. Corners are always fresh before the same tick's
//! collision and lap checks run.

use hecs::World;

use gridrace_core::components::{Corners, LifeState, Motion, Odometer, Pose};
use gridrace_core::constants::{
    CORNER_OFFSETS_DEG, EDGE_MARGIN_HI, EDGE_MARGIN_LO, HALF_DIAGONAL,
};
use gridrace_core::types::heading_vector;
use gridrace_track::TrackHeader;

/// Integrate pose and odometer for every alive vehicle.
pub fn run(world: &mut World, header: &TrackHeader) {
    let max_x = header.width as f64 - EDGE_MARGIN_HI;
    let max_y = header.height as f64 - EDGE_MARGIN_HI;

    for (_entity, (pose, motion, odometer, corners, life)) in world.query_mut::<(
        &mut Pose,
        &Motion,
        &mut Odometer,
        &mut Corners,
        &LifeState,
    )>() {
        if !life.alive {
            continue;
        }

        // Saturating clamp: a vehicle pinned against the margin keeps
        // attempting movement every tick. Only the boundary mask kills.
        let dir = heading_vector(pose.heading_deg, 0.0);
        pose.position.x = (pose.position.x + dir.x * motion.speed).clamp(EDGE_MARGIN_LO, max_x);
        pose.position.y = (pose.position.y + dir.y * motion.speed).clamp(EDGE_MARGIN_LO, max_y);

        odometer.distance += motion.speed;
        odometer.lap_ticks += 1;

        let center = pose.center();
        for (point, offset) in corners.points.iter_mut().zip(CORNER_OFFSETS_DEG) {
            *point = center.offset(heading_vector(pose.heading_deg, offset) * HALF_DIAGONAL);
        }
    }
}
