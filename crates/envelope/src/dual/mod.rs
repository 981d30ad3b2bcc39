//! Upper envelope of lines via point-line duality.
//!
//! Purpose
//! - Map each line `y = slope·x − intercept` to its dual point `(slope, intercept)`.
//! - The upper envelope of the lines is the lower convex hull of the duals:
//!   for fixed x, `slope·x − intercept` is maximal where the supporting line of
//!   slope x touches the point set from below.
//! - Reconstruct the envelope as clipped breakpoints from the ordered hull.
//!
//! Pipeline
//! - `Line` (types) → `lower_hull` (hull) → `upper_envelope` (reconstruct).
//! - Every step is a pure function of its input; nothing is cached.
//!
//! Code cross-refs: `types::{Line, DualPoint, View, EnvelopeCfg}`,
//! `hull::{lower_hull, right_turn}`, `reconstruct::{upper_envelope, Envelope}`.

mod hull;
mod reconstruct;
mod types;

pub use hull::{lower_hull, right_turn};
pub use reconstruct::{compute_envelope, intersection, upper_envelope, Envelope};
pub use types::{DualPoint, EnvelopeCfg, Line, View};
