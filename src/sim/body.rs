//! The ball: a single dynamic circular body

use glam::DVec2;

/// A ball under gravity and friction
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    /// Added to `vel.y` every tick
    pub gravity: f64,
    /// Multiplicative damping per tick, in (0, 1]
    pub friction: f64,
}

impl Ball {
    /// Create a ball at rest
    pub fn new(pos: DVec2, radius: f64, gravity: f64, friction: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
            gravity,
            friction,
        }
    }

    /// Start the ball with an initial velocity
    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Advance one tick: gravity, then friction on both axes, then move
    ///
    /// Friction is applied after gravity so it also damps this tick's gravity
    /// contribution. Speed is not clamped.
    pub fn integrate(&mut self) {
        self.vel.y += self.gravity;
        self.vel *= self.friction;
        self.pos += self.vel;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}
