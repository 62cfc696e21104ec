//! Simulation engine for GRIDRACE.
//!
//! Owns the hecs ECS world, advances the vehicle fleet in lock-step at a
//! fixed tick rate, and produces SessionSnapshots for drivers and renderers.

pub mod engine;
pub mod policy;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use gridrace_core as core;
pub use engine::SimulationEngine;
