//! Vector helpers for circle-vs-segment testing

use glam::DVec2;

/// Standard 2D dot product
#[inline]
pub fn dot(v1: DVec2, v2: DVec2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Unit vector in the direction of `v`
///
/// Returns `None` for a zero-length vector so callers skip the degenerate
/// case instead of dividing by zero.
#[inline]
pub fn normalize(v: DVec2) -> Option<DVec2> {
    let mag = dot(v, v).sqrt();
    if mag == 0.0 {
        return None;
    }
    Some(v / mag)
}

/// Projection of a point onto a line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Closest point on the segment
    pub point: DVec2,
    /// Projection parameter along the segment, clamped to [0, 1]
    pub t: f64,
}

/// Find the point on segment `a`-`b` closest to `p`
///
/// The projection parameter is clamped so the result always lies on the
/// segment, never on its infinite extension. Returns `None` when the segment
/// has zero length.
pub fn closest_point_on_segment(p: DVec2, a: DVec2, b: DVec2) -> Option<SegmentProjection> {
    let edge = b - a;
    let edge_len_sq = dot(edge, edge);
    if edge_len_sq == 0.0 {
        return None; // Degenerate segment
    }

    let t = (dot(p - a, edge) / edge_len_sq).clamp(0.0, 1.0);
    Some(SegmentProjection {
        point: a + edge * t,
        t,
    })
}
