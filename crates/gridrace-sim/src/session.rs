//! Session data model — state that outlives a single run.
//!
//! Owned by `SimulationEngine`, NOT process-wide globals: the fastest-lap
//! record and generation counter survive fleet respawns but belong to one
//! session.

/// Running session state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Best lap observed this session, in ticks. `None` until the first
    /// completed lap; only ever decreases afterwards.
    pub fastest_lap_ticks: Option<u64>,
    /// Fleet respawn counter.
    pub generation: u32,
    /// Total laps completed across the session.
    pub laps_completed: u32,
    /// Total crashes across the session.
    pub crashes: u32,
}

impl SessionState {
    /// Record a completed lap. Returns true if it set a new record.
    /// Non-positive laps are ignored (a gate glitch, not a lap).
    pub fn record_lap(&mut self, lap_ticks: u64) -> bool {
        if lap_ticks == 0 {
            return false;
        }
        self.laps_completed += 1;
        match self.fastest_lap_ticks {
            Some(best) if lap_ticks >= best => false,
            _ => {
                self.fastest_lap_ticks = Some(lap_ticks);
                true
            }
        }
    }
}
