//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in track space (track units).
/// x grows rightward, y grows downward (bitmap convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offset by a vector.
    pub fn offset(&self, v: DVec2) -> Position {
        Position::new(self.x + v.x, self.y + v.y)
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> DVec2 {
        DVec2::new(p.x, p.y)
    }
}

/// Unit vector for a heading plus angular offset, both in degrees.
///
/// Headings follow the y-down bitmap convention: a vehicle at heading h
/// moves along `(cos(360 - h), sin(360 - h))`, so positive headings turn
/// counter-clockwise on screen (y-down).
pub fn heading_vector(heading_deg: f64, offset_deg: f64) -> DVec2 {
    let theta = (360.0 - (heading_deg + offset_deg)).to_radians();
    DVec2::new(theta.cos(), theta.sin())
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
