//! WebGPU rendering module
//!
//! Flat-colored quads built on the CPU each frame and drawn in one pass.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::frame_vertices;
pub use vertex::Vertex;
