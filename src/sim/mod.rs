//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only (no wall clock)
//! - Stable edge order (0..6)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod polygon;
pub mod state;
pub mod tick;

pub use body::Ball;
pub use collision::{
    Bounce, Contact, apply_contact, ball_edge_collision, reflect_velocity, resolve_collisions,
};
pub use geometry::{SegmentProjection, closest_point_on_segment, dot, normalize};
pub use polygon::{Edge, HEXAGON_SIDES, RotatingPolygon};
pub use state::{SimEvent, SimState};
pub use tick::tick;
