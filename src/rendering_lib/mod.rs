// src/rendering_lib/mod.rs

pub mod renderer;
pub mod sink;
pub mod vertex;

pub use renderer::FrameBatch;
pub use sink::{palette, Color, DrawSink};
pub use vertex::Vertex;
