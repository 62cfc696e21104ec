//! track-prep: PNG → .tmsk conversion tool and synthetic circuit generator.
//!
//! Usage:
//!   track-prep convert --png circuit.png --start 1196,530 --output circuit.tmsk
//!   track-prep synthetic --size 1869x1080 --output ring.tmsk

use std::path::PathBuf;
use std::process;

use gridrace_core::constants::{DEFAULT_LAP_FINISH_X, DEFAULT_LAP_START_X};
use gridrace_track::builder::ring_circuit;
use gridrace_track::mask::{TrackHeader, TrackMask};
use gridrace_track::tmsk::write_tmsk;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "convert" => cmd_convert(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "track-prep: GRIDRACE track preprocessing tool\n\
         \n\
         Commands:\n\
         \n\
         convert   Convert a circuit PNG to .tmsk format\n\
         \n\
           --png <path>        Circuit image; pure white pixels become boundary\n\
           --start <x,y>       Vehicle spawn position\n\
           --gates <arm,fin>   Lap gate x-thresholds (default: 1196,50)\n\
           --output <path>     Output .tmsk file path\n\
         \n\
         synthetic Generate a rectangular ring circuit for testing/demo\n\
         \n\
           --size <WxH>        Grid size (default: 1869x1080)\n\
           --margin <N>        Cells between grid edge and corridor (default: 40)\n\
           --corridor <N>      Corridor width in cells (default: 260)\n\
           --output <path>     Output .tmsk file path\n\
         \n\
         Examples:\n\
         \n\
           track-prep convert --png map.png --start 1196,530 --output map.tmsk\n\
           track-prep synthetic --size 1869x1080 --output demos/ring.tmsk\n"
    );
}

fn parse_pair(args: &[String], flag: &str) -> Option<(f64, f64)> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            let parts: Vec<&str> = args[i + 1].split(',').collect();
            if parts.len() == 2 {
                let a: f64 = parts[0].parse().ok()?;
                let b: f64 = parts[1].parse().ok()?;
                return Some((a, b));
            }
        }
    }
    None
}

fn parse_output(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_png(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--png" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_size(args: &[String], default: (u32, u32)) -> (u32, u32) {
    for i in 0..args.len() {
        if args[i] == "--size" && i + 1 < args.len() {
            let parts: Vec<&str> = args[i + 1].split('x').collect();
            if parts.len() == 2 {
                if let (Ok(w), Ok(h)) = (parts[0].parse(), parts[1].parse()) {
                    return (w, h);
                }
            }
        }
    }
    default
}

fn parse_u32(args: &[String], flag: &str, default: u32) -> u32 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u32>() {
                return n;
            }
        }
    }
    default
}

// --- Convert command ---

fn cmd_convert(args: &[String]) {
    let png = match parse_png(args) {
        Some(p) => p,
        None => {
            eprintln!("Error: --png <path> is required");
            process::exit(1);
        }
    };

    let (start_x, start_y) = match parse_pair(args, "--start") {
        Some(s) => s,
        None => {
            eprintln!("Error: --start <x,y> is required");
            process::exit(1);
        }
    };

    let output = match parse_output(args) {
        Some(p) => p,
        None => {
            eprintln!("Error: --output <path> is required");
            process::exit(1);
        }
    };

    let (lap_start_x, lap_finish_x) =
        parse_pair(args, "--gates").unwrap_or((DEFAULT_LAP_START_X, DEFAULT_LAP_FINISH_X));

    eprintln!("Loading {}...", png.display());
    let img = match image::open(&png) {
        Ok(i) => i.to_rgba8(),
        Err(e) => {
            eprintln!("Error loading PNG: {e}");
            process::exit(1);
        }
    };

    let (width, height) = img.dimensions();
    eprintln!("Loaded: {width}×{height} image");

    let header = TrackHeader {
        width,
        height,
        start_x,
        start_y,
        lap_start_x,
        lap_finish_x,
    };
    let mut mask = TrackMask::open(header);

    // Pure white marks the boundary; everything else is drivable.
    let mut boundary_cells = 0u64;
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, _a] = pixel.0;
        if r == 255 && g == 255 && b == 255 {
            mask.set_boundary(x, y);
            boundary_cells += 1;
        }
    }

    let total = width as u64 * height as u64;
    eprintln!(
        "Boundary cells: {boundary_cells}/{total} ({:.1}%)",
        100.0 * boundary_cells as f64 / total as f64
    );

    write_output(&mask, &output);
}

// --- Synthetic circuit command ---

fn cmd_synthetic(args: &[String]) {
    let (width, height) = parse_size(args, (1869, 1080));
    let margin = parse_u32(args, "--margin", 40);
    let corridor = parse_u32(args, "--corridor", 260);

    let output = match parse_output(args) {
        Some(p) => p,
        None => PathBuf::from("ring.tmsk"),
    };

    eprintln!("Generating {width}×{height} ring circuit (margin {margin}, corridor {corridor})...");
    let mask = ring_circuit(width, height, margin, corridor);
    eprintln!(
        "Start pose: ({}, {}), lap gates at x={} / x={}",
        mask.header.start_x, mask.header.start_y, mask.header.lap_start_x, mask.header.lap_finish_x
    );

    write_output(&mask, &output);
}

fn write_output(mask: &TrackMask, output: &PathBuf) {
    eprintln!("Writing .tmsk to {}...", output.display());
    match write_tmsk(mask, output) {
        Ok(()) => {
            let file_size = std::fs::metadata(output).map(|m| m.len()).unwrap_or(0);
            eprintln!("Done! Output: {} ({} bytes)", output.display(), file_size);
        }
        Err(e) => {
            eprintln!("Error writing .tmsk: {e}");
            process::exit(1);
        }
    }
}
