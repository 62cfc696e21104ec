//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Per-tick behavior lives in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::constants::{CAR_SIZE, RADAR_COUNT};
use crate::types::Position;

/// Marks an entity as a simulated vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vehicle;

/// Stable index of a vehicle within its fleet. Actions and observations
/// are addressed by this index, in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleId(pub usize);

/// Vehicle pose: clamped sprite position plus heading in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    /// Heading in degrees, unconstrained range; normalized only inside
    /// trigonometric use sites.
    pub heading_deg: f64,
}

impl Pose {
    /// Geometric center of the vehicle. The position is truncated to whole
    /// track units before the half-size offset, matching the sprite raster.
    pub fn center(&self) -> Position {
        Position::new(
            self.position.x.trunc() + CAR_SIZE / 2.0,
            self.position.y.trunc() + CAR_SIZE / 2.0,
        )
    }
}

/// Vehicle speed state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    /// Current speed in track units per tick.
    pub speed: f64,
    /// Whether the one-time initial speed has been primed.
    pub primed: bool,
}

/// Crash state. Once false, the vehicle is frozen for the rest of the run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifeState {
    pub alive: bool,
}

/// Distance and lap-clock accumulators.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Odometer {
    /// Total distance travelled, monotone over the run.
    pub distance: f64,
    /// Ticks elapsed on the current lap clock; reset on lap completion.
    pub lap_ticks: u64,
}

/// The four bounding corners, recomputed from the pose every tick before
/// any collision or lap check.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Corners {
    pub points: [Position; 4],
}

/// A single radar probe result.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RadarReading {
    /// Point where the ray hit a boundary (or the cap point).
    pub hit: Position,
    /// Euclidean distance from center to the hit point, truncated.
    pub distance: i32,
}

/// The five fixed-angle radar probes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RadarArray {
    pub readings: [RadarReading; RADAR_COUNT],
}

impl RadarArray {
    /// Discretized observation handed to policies: each distance divided by
    /// the radar scale, so values are always in [0, 10].
    pub fn observation(&self) -> [i32; RADAR_COUNT] {
        let mut obs = [0i32; RADAR_COUNT];
        for (o, r) in obs.iter_mut().zip(self.readings.iter()) {
            *o = r.distance / crate::constants::RADAR_SCALE;
        }
        obs
    }
}

/// Lap-gate state machine: `start_tick` is `Some` while timing a lap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LapClock {
    /// Lap-clock value at the moment the start gate was crossed.
    pub start_tick: Option<u64>,
    /// Duration of a lap completed on the current tick, cleared next tick.
    pub just_completed: Option<u64>,
}
