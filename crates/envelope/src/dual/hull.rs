use std::cmp::Ordering;

use super::types::{DualPoint, Line};
use crate::error::EnvelopeError;

/// Cross-product turn test in the dual plane.
///
/// True iff `p1 → p2 → p3` turns clockwise. Collinear triples are not right
/// turns, so the sweep pops them and keeps only the extreme point.
#[inline]
pub fn right_turn(p1: DualPoint, p2: DualPoint, p3: DualPoint) -> bool {
    (p3.slope - p1.slope) * (p2.intercept - p1.intercept)
        - (p3.intercept - p1.intercept) * (p2.slope - p1.slope)
        > 0.0
}

/// Slope ascending, then intercept ascending.
#[inline]
fn cmp_dual(a: DualPoint, b: DualPoint) -> Ordering {
    match a.slope.partial_cmp(&b.slope).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a
            .intercept
            .partial_cmp(&b.intercept)
            .unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Lower convex hull of the dual points (Andrew's monotone chain, swept from
/// the greatest slope down).
///
/// Returns indices into `lines`, greatest slope first. This is the order in
/// which the lines realize the upper envelope from right to left.
///
/// Small inputs: zero lines is `EmptyInput`; a single line (or a set whose
/// duals collapse to one) yields a one-element hull.
///
/// Ties: among lines with equal slope only the smallest intercept can reach
/// the upper envelope, so the others are dropped before the sweep. Identical
/// dual points collapse to the lowest input index (the sort is stable).
pub fn lower_hull(lines: &[Line]) -> Result<Vec<usize>, EnvelopeError> {
    if lines.is_empty() {
        return Err(EnvelopeError::EmptyInput);
    }
    let dual = |k: usize| lines[k].dual();

    let mut order: Vec<usize> = (0..lines.len()).collect();
    order.sort_by(|&a, &b| cmp_dual(dual(a), dual(b)));
    // first of each equal-slope run has the smallest intercept
    order.dedup_by(|later, kept| dual(*later).slope == dual(*kept).slope);

    let n = order.len();
    if n == 1 {
        tracing::debug!(lines = lines.len(), hull = 1, "lower_hull");
        return Ok(order);
    }

    let mut hull: Vec<usize> = Vec::with_capacity(n);
    hull.push(order[n - 1]);
    hull.push(order[n - 2]);
    for &cand in order[..n - 2].iter().rev() {
        while hull.len() > 1
            && !right_turn(
                dual(hull[hull.len() - 2]),
                dual(hull[hull.len() - 1]),
                dual(cand),
            )
        {
            hull.pop();
        }
        hull.push(cand);
    }
    tracing::debug!(lines = lines.len(), hull = hull.len(), "lower_hull");
    Ok(hull)
}
