//! wgpu rendering module
//!
//! Every entity is a flat-coloured rectangle; the whole world is one draw call.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::world_vertices;
pub use vertex::Vertex;
