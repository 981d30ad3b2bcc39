//! Value types of the dual construction.
//!
//! - `Line`: `y = slope·x − intercept`, kept together with its two defining points.
//! - `DualPoint`: the `(slope, intercept)` pair the hull is computed on.
//! - `View`: finite horizontal interval that clips the outermost envelope rays.
//! - `EnvelopeCfg`: tolerances used by the reconstructor.

use nalgebra::Vector2;

use crate::error::EnvelopeError;

/// Reconstruction tolerances.
#[derive(Clone, Copy, Debug)]
pub struct EnvelopeCfg {
    /// Adjacent hull lines with `|Δslope| <= eps_parallel` are reported as parallel.
    pub eps_parallel: f64,
}

impl Default for EnvelopeCfg {
    fn default() -> Self {
        Self { eps_parallel: 0.0 }
    }
}

/// Dual point `(slope, intercept)` of a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualPoint {
    pub slope: f64,
    pub intercept: f64,
}

/// Line `y = slope·x − intercept` through two points with distinct x.
///
/// Immutable once built; slope and intercept are derived exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Line through `p1` and `p2`. Fails with `InvalidLine` when `p1.x == p2.x`
    /// or when any coordinate is not finite.
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Result<Self, EnvelopeError> {
        let invalid = EnvelopeError::InvalidLine { x1: p1.x, x2: p2.x };
        if !(p1.iter().all(|v| v.is_finite()) && p2.iter().all(|v| v.is_finite())) {
            return Err(invalid);
        }
        if p1.x == p2.x {
            return Err(invalid);
        }
        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        let intercept = slope * p1.x - p1.y;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(invalid);
        }
        Ok(Self {
            p1,
            p2,
            slope,
            intercept,
        })
    }

    /// Line from its dual pair, defined by its points at `x = 0` and `x = 1`.
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Result<Self, EnvelopeError> {
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(EnvelopeError::InvalidLine { x1: 0.0, x2: 1.0 });
        }
        Ok(Self {
            p1: Vector2::new(0.0, -intercept),
            p2: Vector2::new(1.0, slope - intercept),
            slope,
            intercept,
        })
    }

    #[inline]
    pub fn p1(&self) -> Vector2<f64> {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Vector2<f64> {
        self.p2
    }
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn dual(&self) -> DualPoint {
        DualPoint {
            slope: self.slope,
            intercept: self.intercept,
        }
    }

    /// `slope·x − intercept`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x - self.intercept
    }
}

/// Closed horizontal viewing interval `[min_x, max_x]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    min_x: f64,
    max_x: f64,
}

impl View {
    /// Requires finite bounds with `min_x < max_x`.
    pub fn new(min_x: f64, max_x: f64) -> Result<Self, EnvelopeError> {
        if min_x.is_finite() && max_x.is_finite() && min_x < max_x {
            Ok(Self { min_x, max_x })
        } else {
            Err(EnvelopeError::InvalidView { min_x, max_x })
        }
    }
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }
}
