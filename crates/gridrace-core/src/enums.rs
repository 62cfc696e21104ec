//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// A control decision, one per vehicle per tick.
///
/// This is a closed set: a policy cannot produce an action outside it,
/// which eliminates the invalid-decision error class at the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn heading counter-clockwise by the steer step.
    SteerLeft,
    /// Turn heading clockwise by the steer step.
    SteerRight,
    /// Reduce speed by the speed step, never below the floor.
    Decelerate,
    /// Increase speed by the speed step, never above the cap.
    Accelerate,
}

impl Action {
    /// All actions in network-output order.
    pub const ALL: [Action; 4] = [
        Action::SteerLeft,
        Action::SteerRight,
        Action::Decelerate,
        Action::Accelerate,
    ];

    /// Map a four-element network output to an action by argmax.
    /// Ties break toward the first (lowest) index.
    ///
    /// # Panics
    /// Panics if `outputs` is not exactly four elements — a wrong-sized
    /// output is an integration bug that must not be silently defaulted.
    pub fn from_outputs(outputs: &[f64]) -> Action {
        assert_eq!(
            outputs.len(),
            4,
            "policy produced {} outputs, expected 4",
            outputs.len()
        );
        let mut best = 0;
        for (i, &v) in outputs.iter().enumerate().skip(1) {
            if v > outputs[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }
}

/// Run phase (top-level engine state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Vehicles are being stepped each tick.
    #[default]
    Running,
    /// The run has terminated; further ticks are frozen no-ops.
    Complete,
}

/// Why a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every vehicle in the fleet crashed.
    AllCrashed,
    /// The tick budget was exhausted.
    TickBudget,
}
