//! Print the upper envelope of a few random click-style line sets.
//!
//! Usage:
//!   cargo run -p envelope --example random_envelope -- [count] [seed]
//!
//! Prints, per sample, the hull (input indices) and the breakpoints from the
//! right screen edge to the left one.

use envelope::api::{compute_envelope, draw_lines, EnvelopeCfg, LinesReplay, RandomLinesCfg, View};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(8usize);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2017u64);
    let cfg = RandomLinesCfg {
        count,
        ..RandomLinesCfg::default()
    };
    let view = match View::new(0.0, 1000.0) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    for index in 0..3 {
        let lines = match draw_lines(cfg, LinesReplay { seed, index }) {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("sample {index}: {e}");
                continue;
            }
        };
        match compute_envelope(&lines, view, EnvelopeCfg::default()) {
            Ok(env) => {
                println!("sample {index}: n={}, hull={:?}", lines.len(), env.hull());
                for p in env.breakpoints() {
                    println!("  ({:.2}, {:.2})", p.x, p.y);
                }
            }
            Err(e) => eprintln!("sample {index}: {e}"),
        }
    }
}
