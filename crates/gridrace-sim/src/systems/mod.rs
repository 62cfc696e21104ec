//! Per-tick systems that operate on the simulation world.
//!
//! Systems are free functions taking `&mut World` (or `&World` for the
//! read-only snapshot builder). They do not own state — all vehicle state
//! lives in components, all session state in `SessionState`.

pub mod collision;
pub mod control;
pub mod lap_gate;
pub mod movement;
pub mod radar;
pub mod reward;
pub mod snapshot;
