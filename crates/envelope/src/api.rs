//! Curated API surface.
//!
//! Prefer these re-exports in callers (CLI, benches, crate examples) so
//! internal module moves stay local to this file.

// Line model and dual points
pub use crate::dual::{DualPoint, Line, View};
// Hull and reconstruction
pub use crate::dual::{
    compute_envelope, intersection, lower_hull, right_turn, upper_envelope, Envelope,
    EnvelopeCfg,
};
pub use crate::error::EnvelopeError;
// Random line sets
pub use crate::rand::{
    draw_lines, nudge_vertical, LineSampler, RandomLinesCfg, ReplayToken as LinesReplay,
};
