//! Session snapshot — the complete visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::constants::RADAR_COUNT;
use crate::enums::RunPhase;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete session state built after each tick. Drivers accumulate
/// fitness from it; a renderer may read poses, corners, and radars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: RunPhase,
    /// Generation counter, incremented by each fleet respawn.
    pub generation: u32,
    /// Vehicles still alive this tick.
    pub still_alive: u32,
    /// Best lap observed this session, in ticks. `None` until the first
    /// completed lap; only ever decreases.
    pub fastest_lap_ticks: Option<u64>,
    pub vehicles: Vec<VehicleView>,
    pub events: Vec<SimEvent>,
}

/// Per-vehicle visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: usize,
    pub position: Position,
    pub heading_deg: f64,
    pub speed: f64,
    pub alive: bool,
    /// Total distance travelled.
    pub distance: f64,
    /// Bounding corners as of this tick.
    pub corners: [Position; 4],
    /// Raw radar distances (track units, capped at the march limit).
    pub radar_distances: [i32; RADAR_COUNT],
    /// Discretized observation the policy will see next tick.
    pub observation: [i32; RADAR_COUNT],
    /// This tick's reward contribution.
    pub reward: f64,
    /// Duration of a lap completed this tick, or 0.
    pub lap_ticks_completed: u64,
}
