//! TrackMask: loaded boundary bitmap with crash queries.

use gridrace_core::constants::{
    DEFAULT_LAP_FINISH_X, DEFAULT_LAP_START_X, DEFAULT_START_X, DEFAULT_START_Y,
};
use gridrace_core::types::Position;

/// Track header metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackHeader {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Vehicle spawn x-coordinate.
    pub start_x: f64,
    /// Vehicle spawn y-coordinate.
    pub start_y: f64,
    /// Crossing above this x arms the lap timer.
    pub lap_start_x: f64,
    /// Crossing below this x completes a lap.
    pub lap_finish_x: f64,
}

impl TrackHeader {
    /// Header with the classic circuit's start pose and lap corridor.
    pub fn with_defaults(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            lap_start_x: DEFAULT_LAP_START_X,
            lap_finish_x: DEFAULT_LAP_FINISH_X,
        }
    }

    /// Spawn position from the header.
    pub fn start_position(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }
}

/// Immutable 2D boundary mask: one bit per cell, row-major, bit 1 = boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMask {
    pub header: TrackHeader,
    /// Packed boundary bits. One bit per cell, `width * height` cells.
    cells: Vec<u8>,
}

impl TrackMask {
    /// Create a TrackMask from pre-packed bits.
    ///
    /// # Panics
    /// Panics if `cells` is too small for `width * height` bits.
    pub fn new(header: TrackHeader, cells: Vec<u8>) -> Self {
        let needed = (header.width as usize * header.height as usize).div_ceil(8);
        assert!(
            cells.len() >= needed,
            "mask has {} bytes, needs {needed} for {}x{}",
            cells.len(),
            header.width,
            header.height
        );
        Self { header, cells }
    }

    /// An all-free mask (no boundary anywhere inside the grid).
    pub fn open(header: TrackHeader) -> Self {
        let bytes = (header.width as usize * header.height as usize).div_ceil(8);
        Self {
            header,
            cells: vec![0u8; bytes],
        }
    }

    /// Whether the cell at (x, y) is boundary. Out-of-bounds coordinates
    /// are boundary by policy, so ray marching and collision checks need
    /// no separate bounds tests.
    pub fn is_boundary(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.header.width as i32 || y >= self.header.height as i32 {
            return true;
        }
        let idx = y as usize * self.header.width as usize + x as usize;
        self.cells[idx / 8] & (1 << (idx % 8)) != 0
    }

    /// Raw packed bits (for serialization).
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Mark a single cell as boundary. Used by builders and tools; the mask
    /// is immutable once handed to the simulation.
    pub fn set_boundary(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.header.width && y < self.header.height);
        let idx = y as usize * self.header.width as usize + x as usize;
        self.cells[idx / 8] |= 1 << (idx % 8);
    }
}
