//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Tick budget per run (~20 seconds at 60 ticks/sec).
pub const MAX_TICKS: u64 = 1200;

// --- Vehicle geometry ---

/// Vehicle sprite size in track units (square).
pub const CAR_SIZE: f64 = 10.0;

/// Half-diagonal used for corner offsets from the vehicle center.
pub const HALF_DIAGONAL: f64 = CAR_SIZE / 2.0;

/// Corner angular offsets from heading, in degrees.
pub const CORNER_OFFSETS_DEG: [f64; 4] = [30.0, 150.0, 210.0, 330.0];

// --- Vehicle kinematics ---

/// Maximum speed (track units per tick).
pub const MAX_SPEED: f64 = 30.0;

/// Deceleration floor — vehicles cannot stall below this.
pub const MIN_SPEED: f64 = 12.0;

/// Speed primed on the very first tick of a run.
pub const INITIAL_SPEED: f64 = 20.0;

/// Speed change per accelerate/decelerate decision.
pub const SPEED_STEP: f64 = 2.0;

/// Heading change per steer decision (degrees).
pub const STEER_STEP_DEG: f64 = 10.0;

// --- Position clamping ---

/// Low clamp margin on both axes.
pub const EDGE_MARGIN_LO: f64 = 20.0;

/// High clamp margin: position is clamped to dimension minus this.
pub const EDGE_MARGIN_HI: f64 = 120.0;

// --- Radar ---

/// Number of radar probes per vehicle.
pub const RADAR_COUNT: usize = 5;

/// Radar probe angular offsets from heading, in degrees.
pub const RADAR_OFFSETS_DEG: [f64; RADAR_COUNT] = [-90.0, -45.0, 0.0, 45.0, 90.0];

/// Maximum march length per probe (track units).
pub const RADAR_MAX_LENGTH: i32 = 300;

/// Divisor applied to raw radar distances before a policy sees them.
/// Discretized readings are therefore always in [0, 10].
pub const RADAR_SCALE: i32 = 30;

// --- Reward ---

/// Reward for a crashed vehicle.
pub const CRASH_PENALTY: f64 = -100.0;

// --- Default circuit (classic layout) ---

/// Default circuit width in track units.
pub const DEFAULT_TRACK_WIDTH: u32 = 1869;

/// Default circuit height in track units.
pub const DEFAULT_TRACK_HEIGHT: u32 = 1080;

/// Default start x-coordinate.
pub const DEFAULT_START_X: f64 = 1196.0;

/// Default start y-coordinate.
pub const DEFAULT_START_Y: f64 = 530.0;

/// Crossing above this x arms the lap timer.
pub const DEFAULT_LAP_START_X: f64 = 1196.0;

/// Crossing below this x completes a lap (one-way corridor,
/// deliberately distinct from the start threshold).
pub const DEFAULT_LAP_FINISH_X: f64 = 50.0;
