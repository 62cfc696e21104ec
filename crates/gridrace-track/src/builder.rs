//! Synthetic circuit generation for tests and demos.
//!
//! Deterministic builders only — no RNG, so fixtures are reproducible
//! byte-for-byte.

use crate::mask::{TrackHeader, TrackMask};

/// Build a rectangular ring circuit: boundary everywhere except a closed
/// corridor band running around the grid edge.
///
/// The corridor band sits `margin` cells in from the grid edge and is
/// `corridor` cells wide. The start pose is placed in the middle of the
/// right-hand band; the lap corridor arms on the right band and completes
/// on entry into the left band.
///
/// # Panics
/// Panics if the grid is too small to hold the ring.
pub fn ring_circuit(width: u32, height: u32, margin: u32, corridor: u32) -> TrackMask {
    assert!(
        2 * (margin + corridor) < width && 2 * (margin + corridor) < height,
        "ring does not fit in a {width}x{height} grid"
    );

    let outer_lo = margin;
    let outer_hi_x = width - margin;
    let outer_hi_y = height - margin;
    let inner_lo = margin + corridor;
    let inner_hi_x = width - margin - corridor;
    let inner_hi_y = height - margin - corridor;

    let header = TrackHeader {
        width,
        height,
        start_x: (width - margin - corridor / 2) as f64,
        start_y: (height / 2) as f64,
        lap_start_x: (width - margin - corridor) as f64,
        lap_finish_x: inner_lo as f64,
    };

    let mut mask = TrackMask::open(header);
    for y in 0..height {
        for x in 0..width {
            let in_outer = x >= outer_lo && x < outer_hi_x && y >= outer_lo && y < outer_hi_y;
            let in_inner = x >= inner_lo && x < inner_hi_x && y >= inner_lo && y < inner_hi_y;
            // Drivable surface is the band between the two rectangles.
            if !(in_outer && !in_inner) {
                mask.set_boundary(x, y);
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_band_is_free() {
        let mask = ring_circuit(400, 300, 10, 60);

        // Middle of the right band, at the start pose.
        let sx = mask.header.start_x as i32;
        let sy = mask.header.start_y as i32;
        assert!(!mask.is_boundary(sx, sy));

        // Middle of the left band.
        assert!(!mask.is_boundary(40, 150));

        // Grid center (inside the inner island) is boundary.
        assert!(mask.is_boundary(200, 150));

        // Outside the outer rectangle is boundary.
        assert!(mask.is_boundary(5, 150));
    }

    #[test]
    fn test_ring_gates_bracket_the_corridor() {
        let mask = ring_circuit(400, 300, 10, 60);
        let h = &mask.header;
        assert!(h.lap_finish_x < h.lap_start_x);
        // Start pose sits past the start gate so the first crossing arms
        // the lap timer immediately.
        assert!(h.start_x > h.lap_start_x);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_ring_too_small_panics() {
        ring_circuit(50, 50, 10, 20);
    }
}
