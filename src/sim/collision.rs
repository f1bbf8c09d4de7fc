//! Collision detection and response between the ball and hexagon edges
//!
//! Each edge is tested as a line segment: the ball penetrates when its center
//! lies closer to the segment than its radius. Response reflects the velocity
//! about the edge normal, damps it, and pushes the ball back out along the
//! normal by the overlap.

use glam::DVec2;

use super::body::Ball;
use super::geometry::{closest_point_on_segment, dot, normalize};
use super::polygon::{Edge, RotatingPolygon};
use crate::consts::BOUNCE_DAMPING;

/// A detected penetration of one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Edge index (0..6)
    pub edge: usize,
    /// Closest point on the edge to the ball center
    pub point: DVec2,
    /// Unit normal of the edge, pointing into the container
    pub normal: DVec2,
    /// Overlap depth (radius - distance)
    pub penetration: f64,
}

/// A contact after it has been applied to the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub contact: Contact,
    pub speed_before: f64,
    pub speed_after: f64,
}

/// Check the ball against a single edge
///
/// Returns `None` for a miss or a zero-length edge.
pub fn ball_edge_collision(ball_pos: DVec2, ball_radius: f64, edge: &Edge) -> Option<Contact> {
    let proj = closest_point_on_segment(ball_pos, edge.start, edge.end)?;
    let dist = (ball_pos - proj.point).length();

    if dist >= ball_radius {
        return None;
    }

    // Left-hand perpendicular; with increasing-angle winding it faces inward
    let e = edge.vector();
    let normal = normalize(DVec2::new(-e.y, e.x))?;

    Some(Contact {
        edge: edge.index,
        point: proj.point,
        normal,
        penetration: ball_radius - dist,
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * dot(velocity, normal) * normal
}

/// Apply a contact to the ball: reflect, damp, and separate
pub fn apply_contact(ball: &mut Ball, contact: &Contact) -> Bounce {
    let speed_before = ball.speed();

    ball.vel = reflect_velocity(ball.vel, contact.normal) * BOUNCE_DAMPING;
    ball.pos += contact.normal * contact.penetration;

    Bounce {
        contact: *contact,
        speed_before,
        speed_after: ball.speed(),
    }
}

/// Resolve the ball against every edge of the polygon, in edge order
///
/// Each contact is applied immediately, so edge i+1 sees the position and
/// velocity already corrected by edge i. Near a vertex two edges may both
/// respond in the same tick.
pub fn resolve_collisions(ball: &mut Ball, polygon: &RotatingPolygon) -> Vec<Bounce> {
    let mut bounces = Vec::new();

    for edge in polygon.edges() {
        if let Some(contact) = ball_edge_collision(ball.pos, ball.radius, &edge) {
            let bounce = apply_contact(ball, &contact);
            log::debug!(
                "bounce edge={} depth={:.3} speed {:.3} -> {:.3}",
                contact.edge,
                contact.penetration,
                bounce.speed_before,
                bounce.speed_after
            );
            bounces.push(bounce);
        }
    }

    bounces
}
