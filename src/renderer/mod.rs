//! Frame geometry for a WebGPU host
//!
//! The host owns the window, surface and pipeline. This module turns a
//! `SimState` into clip-space triangles it can upload as-is.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Viewport, build_frame};
pub use vertex::{Vertex, colors};
