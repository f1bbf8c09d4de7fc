//! Per-frame geometry extraction

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::SimConfig;
use crate::sim::SimState;

/// Triangle fan segments used for the ball
pub const BALL_SEGMENTS: u32 = 32;

/// Maps y-down pixel coordinates to clip space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Pixel position to clip space ([-1, 1], y up)
    #[inline]
    pub fn to_clip(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            pixel.x / self.width * 2.0 - 1.0,
            1.0 - pixel.y / self.height * 2.0,
        )
    }

    fn map_vertices(&self, vertices: &mut [Vertex]) {
        for v in vertices {
            v.position = self.to_clip(Vec2::from(v.position)).to_array();
        }
    }
}

/// Build the vertex list for one frame: hexagon outline, then the ball
///
/// Clear the target to `colors::BACKGROUND` before drawing.
pub fn build_frame(state: &SimState, config: &SimConfig) -> Vec<Vertex> {
    let viewport = Viewport::new(config.window_width, config.window_height);

    let outline: Vec<Vec2> = state
        .hexagon_vertices()
        .iter()
        .map(|v| v.as_vec2())
        .collect();
    let mut vertices = shapes::polygon_outline(&outline, config.outline_width, colors::HEXAGON);

    vertices.extend(shapes::circle(
        state.ball_position().as_vec2(),
        state.ball_radius() as f32,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    viewport.map_vertices(&mut vertices);
    vertices
}
