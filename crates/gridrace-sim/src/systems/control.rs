//! Control application system.
//!
//! Primes the one-time initial speed, then applies each vehicle's steering
//! or throttle decision. Dead vehicles are skipped entirely.

use hecs::World;

use gridrace_core::components::{LifeState, Motion, Pose, VehicleId};
use gridrace_core::constants::{
    INITIAL_SPEED, MAX_SPEED, MIN_SPEED, SPEED_STEP, STEER_STEP_DEG,
};
use gridrace_core::enums::Action;

/// Apply one action per vehicle, indexed by `VehicleId`.
pub fn run(world: &mut World, actions: &[Action]) {
    for (_entity, (id, pose, motion, life)) in
        world.query_mut::<(&VehicleId, &mut Pose, &mut Motion, &LifeState)>()
    {
        if !life.alive {
            continue;
        }

        // One-time priming happens before the first decision is applied,
        // so a first-tick Accelerate lands on top of the initial speed.
        if !motion.primed {
            motion.speed = INITIAL_SPEED;
            motion.primed = true;
        }

        match actions[id.0] {
            Action::SteerLeft => pose.heading_deg += STEER_STEP_DEG,
            Action::SteerRight => pose.heading_deg -= STEER_STEP_DEG,
            Action::Decelerate => motion.speed = (motion.speed - SPEED_STEP).max(MIN_SPEED),
            Action::Accelerate => motion.speed = (motion.speed + SPEED_STEP).min(MAX_SPEED),
        }
    }
}
