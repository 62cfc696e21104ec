//! Events emitted by the simulation for drivers and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EndReason;

/// Events surfaced in each tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A vehicle completed a lap through the one-way corridor.
    LapCompleted {
        vehicle: usize,
        lap_ticks: u64,
        /// True if this lap set a new session record.
        record: bool,
    },
    /// A vehicle's corner touched a boundary cell.
    VehicleCrashed { vehicle: usize, tick: u64 },
    /// The run terminated this tick.
    RunEnded { reason: EndReason },
}
