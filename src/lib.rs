//! Hex Bounce - a ball bouncing inside a spinning hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, rotation, collisions)
//! - `renderer`: Frame geometry for a WebGPU host
//! - `platform`: Host-side pacing
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, SimConfig};

use glam::DVec2;

/// Default configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 800;
    /// Target tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 15.0;
    /// Added to vertical velocity every tick (pixels/tick², y down)
    pub const GRAVITY: f64 = 0.5;
    /// Multiplicative velocity damping per tick
    pub const FRICTION: f64 = 0.995;

    /// Hexagon defaults
    pub const HEXAGON_RADIUS: f64 = 300.0;
    /// Degrees per tick
    pub const ROTATION_SPEED: f64 = 0.5;
    pub const OUTLINE_WIDTH: f32 = 5.0;

    /// Velocity kept after a wall bounce
    pub const BOUNCE_DAMPING: f64 = 0.95;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Rotate `point` about `center` by `theta` radians
#[inline]
pub fn rotate_about(point: DVec2, center: DVec2, theta: f64) -> DVec2 {
    center + DVec2::from_angle(theta).rotate(point - center)
}
