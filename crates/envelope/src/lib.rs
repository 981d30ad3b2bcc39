//! Upper envelope of lines in the plane via point-line duality.
//!
//! Lines `y = slope·x − intercept` map to dual points `(slope, intercept)`;
//! the lower convex hull of the duals (monotone chain) lists the lines of the
//! upper envelope from right to left, and the envelope is rebuilt as clipped
//! breakpoints from consecutive hull intersections.
//!
//! API Policy
//! - The curated surface lives in `api`; `prelude` holds the common imports.
//! - Everything is a pure function of caller-owned input; no global state.

pub mod api;
pub mod dual;
pub mod error;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dual::{compute_envelope, lower_hull, upper_envelope, Envelope, EnvelopeCfg, Line, View};
pub use error::EnvelopeError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dual::{
        compute_envelope, lower_hull, upper_envelope, DualPoint, Envelope, EnvelopeCfg, Line,
        View,
    };
    pub use crate::error::EnvelopeError;
    pub use crate::rand::{draw_lines, LineSampler, RandomLinesCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
