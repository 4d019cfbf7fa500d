// src/rendering_lib/vertex.rs

use bytemuck::{Pod, Zeroable};

use crate::geometry::Point2;
use super::sink::Color;

/// Device-space vertex laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 2], color: Color) -> Self {
        Self { position, color }
    }

    pub fn from_point(point: Point2, color: Color) -> Self {
        Self::new([point.x as f32, point.y as f32], color)
    }
}
