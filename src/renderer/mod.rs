//! WebGPU rendering module
//!
//! A single vertex-color pipeline; the whole scene is a handful of quads
//! regenerated each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::frame_vertices;
