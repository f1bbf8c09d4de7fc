//! Regular hexagon rotating about a fixed center
//!
//! The polygon keeps its unrotated base vertices and recomputes the
//! world-space vertices from the accumulated angle on every rotation, so
//! rounding error never compounds from tick to tick.

use glam::DVec2;

use crate::{polar_to_cartesian, rotate_about};

/// Number of vertices (and edges) of the container
pub const HEXAGON_SIDES: usize = 6;

/// A line segment between two consecutive polygon vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Edge index (0..6), edge i runs from vertex i to vertex i+1
    pub index: usize,
    pub start: DVec2,
    pub end: DVec2,
}

impl Edge {
    /// Edge direction vector (end - start)
    #[inline]
    pub fn vector(&self) -> DVec2 {
        self.end - self.start
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vector().length_squared() == 0.0
    }
}

/// A regular hexagon spinning about its center
#[derive(Debug, Clone)]
pub struct RotatingPolygon {
    center: DVec2,
    circumradius: f64,
    /// Accumulated rotation (degrees, unbounded)
    angle: f64,
    /// Vertices at angle 0
    base_vertices: [DVec2; HEXAGON_SIDES],
    /// Vertices at the current angle
    vertices: [DVec2; HEXAGON_SIDES],
}

impl RotatingPolygon {
    /// Build a hexagon with vertex i at i * 60° from the positive x-axis
    pub fn new(center: DVec2, circumradius: f64) -> Self {
        let step = std::f64::consts::TAU / HEXAGON_SIDES as f64;
        let base_vertices: [DVec2; HEXAGON_SIDES] =
            std::array::from_fn(|i| center + polar_to_cartesian(circumradius, step * i as f64));

        Self {
            center,
            circumradius,
            angle: 0.0,
            base_vertices,
            vertices: base_vertices,
        }
    }

    /// Advance the rotation and recompute world-space vertices
    ///
    /// Positive deltas turn counterclockwise in math coordinates, which is
    /// clockwise on a y-down screen.
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.angle += delta_degrees;
        let theta = self.angle.to_radians();
        for (vertex, base) in self.vertices.iter_mut().zip(&self.base_vertices) {
            *vertex = rotate_about(*base, self.center, theta);
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Total rotation applied so far (degrees)
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle
    }

    /// Current world-space vertices, in winding order
    #[inline]
    pub fn vertices(&self) -> &[DVec2; HEXAGON_SIDES] {
        &self.vertices
    }

    /// Edges in fixed order 0..6
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..HEXAGON_SIDES).map(move |i| Edge {
            index: i,
            start: self.vertices[i],
            end: self.vertices[(i + 1) % HEXAGON_SIDES],
        })
    }

    /// Distance from the center to each edge midpoint
    pub fn apothem(&self) -> f64 {
        self.circumradius * (std::f64::consts::PI / HEXAGON_SIDES as f64).cos()
    }
}
