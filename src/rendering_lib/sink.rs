// src/rendering_lib/sink.rs

use crate::geometry::Point2;

/// Linear RGBA, each channel in `0.0..=1.0`.
pub type Color = [f32; 4];

pub mod palette {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: Color = [0.0, 0.5, 0.0, 1.0];
    pub const DARK_GREEN: Color = [0.0, 0.39, 0.0, 1.0];
    pub const RED: Color = [0.8, 0.2, 0.2, 1.0];
    pub const BLUE: Color = [0.2, 0.2, 0.8, 1.0];
    pub const YELLOW: Color = [0.8, 0.8, 0.2, 1.0];
    pub const GREY: Color = [0.5, 0.5, 0.5, 1.0];
    pub const ORANGE: Color = [0.9, 0.5, 0.2, 1.0];
}

/// The 2D drawing primitive the camera renders into.
///
/// Calls arrive in painter's order, farthest face first. Drawing is assumed
/// to always succeed.
pub trait DrawSink {
    /// Fills the polygon with the given device-space vertices, in winding order.
    fn fill_polygon(&mut self, points: &[Point2], color: Color);

    /// Sinks without a line primitive draw nothing in wireframe mode.
    fn draw_line(&mut self, _from: Point2, _to: Point2, _color: Color) {}
}
