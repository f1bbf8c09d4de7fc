//! Simulation state and events
//!
//! The host owns a `SimState` and passes it by `&mut` into `tick`.

use glam::DVec2;

use super::body::Ball;
use super::collision::Bounce;
use super::polygon::{HEXAGON_SIDES, RotatingPolygon};

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// The ball was resolved against an edge
    Bounce(Bounce),
    /// The ball center left the hexagon's circumcircle (reported once)
    Escaped { distance: f64 },
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct SimState {
    pub ball: Ball,
    pub hexagon: RotatingPolygon,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Edge contacts resolved since start
    pub bounce_count: u64,
    /// Whether the ball has been seen outside the container
    pub escaped: bool,
    /// Events from the most recent tick
    pub events: Vec<SimEvent>,
}

impl SimState {
    pub fn new(ball: Ball, hexagon: RotatingPolygon) -> Self {
        Self {
            ball,
            hexagon,
            time_ticks: 0,
            bounce_count: 0,
            escaped: false,
            events: Vec::new(),
        }
    }

    /// Ball center, for drawing
    #[inline]
    pub fn ball_position(&self) -> DVec2 {
        self.ball.pos
    }

    #[inline]
    pub fn ball_radius(&self) -> f64 {
        self.ball.radius
    }

    /// Hexagon vertices in winding order, for drawing a closed outline
    #[inline]
    pub fn hexagon_vertices(&self) -> &[DVec2; HEXAGON_SIDES] {
        self.hexagon.vertices()
    }

    /// Bounces recorded during the most recent tick
    pub fn bounces(&self) -> impl Iterator<Item = &Bounce> {
        self.events.iter().filter_map(|e| match e {
            SimEvent::Bounce(b) => Some(b),
            SimEvent::Escaped { .. } => None,
        })
    }
}
