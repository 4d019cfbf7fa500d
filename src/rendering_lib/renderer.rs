// src/rendering_lib/renderer.rs

use super::sink::{Color, DrawSink};
use super::vertex::Vertex;
use crate::geometry::Point2;

/// A [`DrawSink`] that accumulates one frame of draw calls as GPU-ready buffers.
///
/// Filled polygons are fanned into a triangle list (`vertices` + `indices`),
/// lines go into a separate line list. Submission order is preserved, so
/// drawing the triangle list in index order reproduces the painter's order.
#[derive(Debug, Default)]
pub struct FrameBatch {
    frame_vertices: Vec<Vertex>,
    frame_indices: Vec<u32>,
    line_vertices: Vec<Vertex>,
    polygon_count: usize,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            frame_vertices: Vec::with_capacity(vertices),
            frame_indices: Vec::with_capacity(vertices.saturating_sub(2) * 3),
            line_vertices: Vec::new(),
            polygon_count: 0,
        }
    }

    /// Empties the batch but keeps its allocations for the next frame.
    pub fn clear(&mut self) {
        self.frame_vertices.clear();
        self.frame_indices.clear();
        self.line_vertices.clear();
        self.polygon_count = 0;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.frame_vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.frame_indices
    }

    /// Pairs of vertices, one pair per line segment.
    pub fn line_vertices(&self) -> &[Vertex] {
        &self.line_vertices
    }

    pub fn polygon_count(&self) -> usize {
        self.polygon_count
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame_vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame_indices)
    }

    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_vertices)
    }

    fn add_polygon_to_frame(&mut self, points: &[Point2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let start_vertex_index = self.frame_vertices.len() as u32;
        for point in points {
            self.frame_vertices.push(Vertex::from_point(*point, color));
        }
        for i in 1..(points.len() as u32 - 1) {
            self.frame_indices.push(start_vertex_index);
            self.frame_indices.push(start_vertex_index + i);
            self.frame_indices.push(start_vertex_index + i + 1);
        }
        self.polygon_count += 1;
    }
}

impl DrawSink for FrameBatch {
    fn fill_polygon(&mut self, points: &[Point2], color: Color) {
        self.add_polygon_to_frame(points, color);
    }

    fn draw_line(&mut self, from: Point2, to: Point2, color: Color) {
        self.line_vertices.push(Vertex::from_point(from, color));
        self.line_vertices.push(Vertex::from_point(to, color));
    }
}
