//! Error kinds surfaced by the envelope pipeline.
//!
//! All errors are terminal for the call that raised them; the computation is
//! pure, so there is nothing to retry.

use std::fmt;

/// Errors surfaced by line construction, hull building, and reconstruction.
#[derive(Clone, Debug, PartialEq)]
pub enum EnvelopeError {
    /// The two defining points share an x-coordinate, or a coordinate (or the
    /// derived slope/intercept) is not finite.
    InvalidLine { x1: f64, x2: f64 },
    /// Hull or envelope requested over zero lines.
    EmptyInput,
    /// Adjacent hull lines are parallel, so their intersection is undefined.
    /// Indices refer to the caller's line slice.
    DegenerateHull { left: usize, right: usize },
    /// Viewing interval is empty, reversed, or not finite.
    InvalidView { min_x: f64, max_x: f64 },
    /// A hull index does not point into the line slice.
    UnknownLine { index: usize },
    /// Arithmetic overflowed into a non-finite breakpoint.
    NonFinite,
    /// Random line sampler parameters cannot produce valid lines.
    InvalidSampler { reason: String },
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::InvalidLine { x1, x2 } => write!(
                f,
                "invalid line: points at x1={x1}, x2={x2} do not define a finite slope"
            ),
            EnvelopeError::EmptyInput => write!(f, "no lines given"),
            EnvelopeError::DegenerateHull { left, right } => write!(
                f,
                "adjacent hull lines {left} and {right} are parallel (no intersection)"
            ),
            EnvelopeError::InvalidView { min_x, max_x } => {
                write!(f, "invalid view [{min_x}, {max_x}] (needs finite min < max)")
            }
            EnvelopeError::UnknownLine { index } => {
                write!(f, "hull refers to line {index}, which is not in the input")
            }
            EnvelopeError::NonFinite => write!(f, "envelope breakpoint is not finite"),
            EnvelopeError::InvalidSampler { reason } => {
                write!(f, "invalid line sampler: {reason}")
            }
        }
    }
}

impl std::error::Error for EnvelopeError {}
