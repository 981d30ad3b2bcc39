//! Upper envelope reconstruction from the ordered lower hull.
//!
//! The hull lists lines in right-to-left dominance order, so consecutive hull
//! lines meet exactly where the maximum switches between them. The walk starts
//! at the right view bound, emits every switch strictly inside the view, and
//! ends at the left view bound.

use nalgebra::Vector2;

use super::hull::lower_hull;
use super::types::{EnvelopeCfg, Line, View};
use crate::error::EnvelopeError;

/// Piecewise-linear upper envelope clipped to a view.
///
/// Invariants:
/// - `breakpoints` have strictly decreasing x, from `view.max_x` to `view.min_x`.
/// - `active[k]` is the input index of the line maximal between breakpoints
///   `k` and `k + 1`; `active.len() + 1 == breakpoints.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    hull: Vec<usize>,
    breakpoints: Vec<Vector2<f64>>,
    active: Vec<usize>,
}

impl Envelope {
    /// Hull the envelope was reconstructed from (input indices, greatest slope first).
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }
    pub fn breakpoints(&self) -> &[Vector2<f64>] {
        &self.breakpoints
    }
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// `(right, left, line)` per segment, right to left.
    pub fn segments(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>, usize)> + '_ {
        self.breakpoints
            .windows(2)
            .zip(&self.active)
            .map(|(w, &k)| (w[0], w[1], k))
    }

    /// Envelope value at `x`; None outside the view.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let (right, left, _) = self
            .segments()
            .find(|(right, left, _)| left.x <= x && x <= right.x)?;
        let t = (x - right.x) / (left.x - right.x);
        Some(right.y + t * (left.y - right.y))
    }
}

/// Intersection of two non-parallel lines.
///
/// `x* = (b1 − b2) / (a1 − a2)`, `y* = a1·x* − b1`. None when
/// `|a1 − a2| <= eps_parallel`.
#[inline]
pub fn intersection(l1: &Line, l2: &Line, eps_parallel: f64) -> Option<Vector2<f64>> {
    let da = l1.slope() - l2.slope();
    if da.abs() <= eps_parallel {
        return None;
    }
    let x = (l1.intercept() - l2.intercept()) / da;
    Some(Vector2::new(x, l1.eval(x)))
}

/// Reconstruct the upper envelope over `view` from a hull produced by `lower_hull`.
///
/// Errors: `EmptyInput` for an empty hull, `UnknownLine` for an index outside
/// `lines`, `DegenerateHull` if two adjacent hull lines are parallel, and
/// `NonFinite` if a breakpoint overflows.
pub fn upper_envelope(
    lines: &[Line],
    hull: &[usize],
    view: View,
    cfg: EnvelopeCfg,
) -> Result<Envelope, EnvelopeError> {
    if hull.is_empty() {
        return Err(EnvelopeError::EmptyInput);
    }
    let hull_lines = hull
        .iter()
        .map(|&k| lines.get(k).ok_or(EnvelopeError::UnknownLine { index: k }))
        .collect::<Result<Vec<_>, _>>()?;

    // switches[i]: x where dominance passes from hull[i] to hull[i + 1]
    let mut switches = Vec::with_capacity(hull.len() - 1);
    for (i, pair) in hull_lines.windows(2).enumerate() {
        let p = intersection(pair[0], pair[1], cfg.eps_parallel).ok_or(
            EnvelopeError::DegenerateHull {
                left: hull[i],
                right: hull[i + 1],
            },
        )?;
        if !p.x.is_finite() {
            return Err(EnvelopeError::NonFinite);
        }
        switches.push(p.x);
    }

    let (x_lo, x_hi) = (view.min_x(), view.max_x());
    // lines whose range ends at or right of the view are never visible
    let mut cur = switches.iter().take_while(|&&x| x >= x_hi).count();

    let mut breakpoints = Vec::with_capacity(hull.len() + 1);
    let mut active = Vec::with_capacity(hull.len());
    breakpoints.push(Vector2::new(x_hi, hull_lines[cur].eval(x_hi)));
    let mut prev_x = x_hi;
    while cur < switches.len() && switches[cur] > x_lo {
        let x = switches[cur];
        // rounding can leave a hull line with an empty range; skip it
        if x < prev_x {
            active.push(hull[cur]);
            breakpoints.push(Vector2::new(x, hull_lines[cur].eval(x)));
            prev_x = x;
        }
        cur += 1;
    }
    active.push(hull[cur]);
    breakpoints.push(Vector2::new(x_lo, hull_lines[cur].eval(x_lo)));

    if !breakpoints
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite())
    {
        return Err(EnvelopeError::NonFinite);
    }
    tracing::debug!(
        hull = hull.len(),
        breakpoints = breakpoints.len(),
        "upper_envelope"
    );
    Ok(Envelope {
        hull: hull.to_vec(),
        breakpoints,
        active,
    })
}

/// `lower_hull` followed by `upper_envelope`.
pub fn compute_envelope(
    lines: &[Line],
    view: View,
    cfg: EnvelopeCfg,
) -> Result<Envelope, EnvelopeError> {
    let hull = lower_hull(lines)?;
    upper_envelope(lines, &hull, view, cfg)
}
