//! Simulation configuration
//!
//! Loaded from JSON by the host. The simulation core takes whatever values it
//! is handed; defaults and validation live here.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Ball, RotatingPolygon, SimState};

/// Why a configuration was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Malformed JSON or wrong field types
    Parse(serde_json::Error),
    /// A numeric field is NaN or infinite
    NotFinite(&'static str),
    /// Ball radius must be positive
    BallRadius(f64),
    /// Friction must lie in (0, 1]
    Friction(f64),
    /// Circumradius must not be negative
    Circumradius(f64),
    /// Window size and tick rate must be non-zero
    Zero(&'static str),
    OutlineWidth(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {e}"),
            ConfigError::NotFinite(field) => write!(f, "{field} must be a finite number"),
            ConfigError::BallRadius(r) => write!(f, "ball radius must be positive (got {r})"),
            ConfigError::Friction(v) => write!(f, "friction must be in (0, 1] (got {v})"),
            ConfigError::Circumradius(r) => {
                write!(f, "hexagon circumradius must not be negative (got {r})")
            }
            ConfigError::Zero(field) => write!(f, "{field} must be greater than zero"),
            ConfigError::OutlineWidth(w) => {
                write!(f, "outline width must not be negative (got {w})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Ticks per second
    pub tick_rate: u32,

    // === Ball ===
    pub ball_position: DVec2,
    pub ball_velocity: DVec2,
    pub ball_radius: f64,
    pub gravity: f64,
    pub friction: f64,

    // === Hexagon ===
    pub hexagon_center: DVec2,
    pub hexagon_radius: f64,
    /// Degrees per tick
    pub rotation_speed: f64,
    /// Outline thickness (pixels)
    pub outline_width: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let window_center = DVec2::new(WINDOW_WIDTH as f64 / 2.0, WINDOW_HEIGHT as f64 / 2.0);
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tick_rate: TICK_RATE,

            ball_position: window_center,
            ball_velocity: DVec2::ZERO,
            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            friction: FRICTION,

            hexagon_center: window_center,
            hexagon_radius: HEXAGON_RADIUS,
            rotation_speed: ROTATION_SPEED,
            outline_width: OUTLINE_WIDTH,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("ball_position.x", self.ball_position.x),
            ("ball_position.y", self.ball_position.y),
            ("ball_velocity.x", self.ball_velocity.x),
            ("ball_velocity.y", self.ball_velocity.y),
            ("ball_radius", self.ball_radius),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("hexagon_center.x", self.hexagon_center.x),
            ("hexagon_center.y", self.hexagon_center.y),
            ("hexagon_radius", self.hexagon_radius),
            ("rotation_speed", self.rotation_speed),
            ("outline_width", self.outline_width as f64),
        ];
        if let Some(&(field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite(field));
        }

        if self.window_width == 0 {
            return Err(ConfigError::Zero("window_width"));
        }
        if self.window_height == 0 {
            return Err(ConfigError::Zero("window_height"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Zero("tick_rate"));
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if self.friction <= 0.0 || self.friction > 1.0 {
            return Err(ConfigError::Friction(self.friction));
        }
        if self.hexagon_radius < 0.0 {
            return Err(ConfigError::Circumradius(self.hexagon_radius));
        }
        if self.outline_width < 0.0 {
            return Err(ConfigError::OutlineWidth(self.outline_width));
        }

        if self.hexagon_radius == 0.0 {
            log::warn!("hexagon radius is 0, every edge is degenerate and the ball will fall freely");
        } else if (self.ball_position - self.hexagon_center).length() + self.ball_radius
            > self.hexagon_radius
        {
            log::warn!("ball starts outside the hexagon");
        }

        Ok(())
    }

    /// Fixed tick length (seconds) for host pacing
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Build the initial simulation state
    pub fn build_state(&self) -> SimState {
        let ball = Ball::new(self.ball_position, self.ball_radius, self.gravity, self.friction)
            .with_velocity(self.ball_velocity);
        let hexagon = RotatingPolygon::new(self.hexagon_center, self.hexagon_radius);
        SimState::new(ball, hexagon)
    }
}
