//! One-dimensional linear interpolation over anchor points.
//!
//! Between anchors the result is the straight line through the two
//! neighbouring points. Outside the anchors the first or last segment is
//! extended linearly; callers that need a bounded domain must check it
//! themselves (see [`crate::age`]).

/// Interpolate `x` over the anchors `(xs[i], ys[i])`.
///
/// `xs` must be strictly ascending. Returns `None` when fewer than two
/// anchors are given, the slices differ in length, `xs` is not strictly
/// ascending, or `x` is not finite.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    if xs.len() < 2 || xs.len() != ys.len() || !x.is_finite() {
        return None;
    }
    if xs.windows(2).any(|w| w[0] >= w[1]) {
        return None;
    }

    // Index of the segment [xs[i], xs[i + 1]] used for x. Points left of the
    // first anchor use segment 0, points right of the last use the final one.
    let upper = xs.partition_point(|&anchor| anchor < x);
    let i = upper.saturating_sub(1).min(xs.len() - 2);

    let (x0, x1) = (xs[i], xs[i + 1]);
    let (y0, y1) = (ys[i], ys[i + 1]);
    let t = (x - x0) / (x1 - x0);
    Some(t.mul_add(y1 - y0, y0))
}
