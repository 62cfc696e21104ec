//! .tmsk binary format loader and writer.
//!
//! Compact track-mask format: a 64-byte header followed by the packed
//! boundary bits. Loading failure is fatal to a run — the simulation
//! cannot start without a track.

use std::io::{self, Write};
use std::path::Path;

use crate::mask::{TrackHeader, TrackMask};

/// .tmsk magic bytes.
const TMSK_MAGIC: [u8; 4] = *b"TMSK";

/// Current format version.
const TMSK_VERSION: u16 = 1;

/// Total header size in bytes.
const HEADER_SIZE: usize = 64;

/// Load a TrackMask from a .tmsk file.
pub fn load_tmsk(path: &Path) -> io::Result<TrackMask> {
    let data = std::fs::read(path)?;
    parse_tmsk(&data)
}

/// Parse a .tmsk from a byte buffer.
pub fn parse_tmsk(data: &[u8]) -> io::Result<TrackMask> {
    if data.len() < HEADER_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "File too small for .tmsk header",
        ));
    }

    let magic = &data[0..4];
    if magic != TMSK_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Invalid .tmsk magic bytes",
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version != TMSK_VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unsupported .tmsk version: {version}"),
        ));
    }

    // Bytes 6..8 are reserved flags.
    let width = u32::from_le_bytes(data[8..12].try_into().unwrap());
    let height = u32::from_le_bytes(data[12..16].try_into().unwrap());
    let start_x = f64::from_le_bytes(data[16..24].try_into().unwrap());
    let start_y = f64::from_le_bytes(data[24..32].try_into().unwrap());
    let lap_start_x = f64::from_le_bytes(data[32..40].try_into().unwrap());
    let lap_finish_x = f64::from_le_bytes(data[40..48].try_into().unwrap());
    // Bytes 48..64 are reserved.

    if width == 0 || height == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Zero-sized track grid",
        ));
    }
    if lap_finish_x >= lap_start_x {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Lap finish threshold must be below the start threshold",
        ));
    }

    let cell_count = width as usize * height as usize;
    let mask_bytes = cell_count.div_ceil(8);
    let mask_end = HEADER_SIZE + mask_bytes;

    if data.len() < mask_end {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "File too small for mask data",
        ));
    }

    let header = TrackHeader {
        width,
        height,
        start_x,
        start_y,
        lap_start_x,
        lap_finish_x,
    };

    Ok(TrackMask::new(
        header,
        data[HEADER_SIZE..mask_end].to_vec(),
    ))
}

/// Write a TrackMask to a .tmsk file.
pub fn write_tmsk(mask: &TrackMask, path: &Path) -> io::Result<()> {
    let data = serialize_tmsk(mask);
    std::fs::write(path, data)
}

/// Serialize a TrackMask to .tmsk bytes.
pub fn serialize_tmsk(mask: &TrackMask) -> Vec<u8> {
    let h = &mask.header;
    let mut buf = Vec::with_capacity(HEADER_SIZE + mask.cells().len());

    // Header (64 bytes)
    buf.write_all(&TMSK_MAGIC).unwrap();
    buf.write_all(&TMSK_VERSION.to_le_bytes()).unwrap();
    buf.write_all(&0u16.to_le_bytes()).unwrap(); // flags, reserved
    buf.write_all(&h.width.to_le_bytes()).unwrap();
    buf.write_all(&h.height.to_le_bytes()).unwrap();
    buf.write_all(&h.start_x.to_le_bytes()).unwrap();
    buf.write_all(&h.start_y.to_le_bytes()).unwrap();
    buf.write_all(&h.lap_start_x.to_le_bytes()).unwrap();
    buf.write_all(&h.lap_finish_x.to_le_bytes()).unwrap();
    // Reserved bytes (pad to 64)
    let written = 4 + 2 + 2 + 4 + 4 + 8 + 8 + 8 + 8; // = 48
    buf.write_all(&vec![0u8; HEADER_SIZE - written]).unwrap();

    // Packed mask bits
    buf.write_all(mask.cells()).unwrap();

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mask() -> TrackMask {
        let header = TrackHeader {
            width: 12,
            height: 9,
            start_x: 8.0,
            start_y: 4.0,
            lap_start_x: 9.0,
            lap_finish_x: 2.0,
        };
        let mut mask = TrackMask::open(header);
        mask.set_boundary(0, 0);
        mask.set_boundary(11, 8);
        mask.set_boundary(5, 5);
        mask
    }

    #[test]
    fn test_tmsk_roundtrip() {
        let mask = sample_mask();
        let bytes = serialize_tmsk(&mask);
        let mask2 = parse_tmsk(&bytes).expect("Failed to parse .tmsk");

        assert_eq!(mask2.header, mask.header);
        assert_eq!(mask2.cells(), mask.cells());
        assert!(mask2.is_boundary(0, 0));
        assert!(mask2.is_boundary(5, 5));
        assert!(!mask2.is_boundary(1, 1));
    }

    #[test]
    fn test_tmsk_invalid_magic() {
        let data = vec![0u8; 128];
        assert!(parse_tmsk(&data).is_err());
    }

    #[test]
    fn test_tmsk_truncated_payload() {
        let mask = sample_mask();
        let bytes = serialize_tmsk(&mask);
        assert!(parse_tmsk(&bytes[..HEADER_SIZE + 2]).is_err());
    }

    #[test]
    fn test_tmsk_rejects_inverted_gates() {
        let mask = sample_mask();
        let mut bytes = serialize_tmsk(&mask);
        // Overwrite lap_finish_x with a value above lap_start_x.
        bytes[40..48].copy_from_slice(&100.0f64.to_le_bytes());
        assert!(parse_tmsk(&bytes).is_err());
    }
}
