// src/geometry.rs

use bitflags::bitflags;
use glam::DVec3;

/// World-space point. The world is z-up: at zero yaw the camera looks along +x,
/// `y` is the lateral axis and `z` is vertical.
pub type Point3 = DVec3;

/// Device-space point, in pixels from the top-left corner of the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn sub(&self, other: &Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    /// z component of the 3D cross product of the two vectors.
    pub fn cross(&self, other: &Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        Point2::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

bitflags! {
    /// Why a projected point is not usable as-is.
    ///
    /// An empty set means the point is on screen and in front of the camera.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Offscreen: u8 {
        const LEFT   = 0b0000_0001;
        const RIGHT  = 0b0000_0010;
        const TOP    = 0b0000_0100;
        const BOTTOM = 0b0000_1000;
        // Naive projection is mirrored through the camera.
        const BEHIND = 0b0001_0000;
    }
}

/// A vertex after perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub position: Point2,
    pub offscreen: Offscreen,
    /// Forward offset from the camera before the perspective divide.
    pub depth: f64,
}

impl ProjectedPoint {
    pub fn is_on_screen(&self) -> bool {
        self.offscreen.is_empty()
    }
}

/// Arithmetic mean of the points, or the origin for an empty slice.
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::ZERO;
    }
    let sum = points.iter().fold(Point3::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

pub fn polygon_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area.abs() / 2.0
}
