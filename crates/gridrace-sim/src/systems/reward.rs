//! Per-tick reward signal.
//!
//! A pure function of vehicle state. The engine writes it into each tick's
//! snapshot; summation into a total fitness score belongs to the external
//! optimizer driving the run.

use gridrace_core::constants::{CRASH_PENALTY, HALF_DIAGONAL};

/// Reward contribution for one vehicle on one tick.
///
/// Crashed vehicles get a flat penalty. Alive vehicles are rewarded for
/// distance covered, plus a small constant so standing still still scores
/// above zero and movement is always worth attempting.
pub fn reward(alive: bool, distance: f64) -> f64 {
    if !alive {
        return CRASH_PENALTY;
    }
    distance / HALF_DIAGONAL + 1.0
}
