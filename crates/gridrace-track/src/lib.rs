//! Track system for GRIDRACE.
//!
//! Boundary mask loading, the .tmsk binary format,
//! and synthetic circuit generation.

pub use gridrace_core as core;

pub mod builder;
pub mod mask;
pub mod tmsk;

// Re-export key types for convenience.
pub use builder::ring_circuit;
pub use mask::{TrackHeader, TrackMask};
