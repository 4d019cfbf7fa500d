// src/engine_lib/collider.rs

//! Bounding volumes for spatial queries. Independent of rendering.

use crate::geometry::Point3;

/// Axis-aligned box with `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    min: Point3,
    max: Point3,
}

impl BoxCollider {
    /// The caller guarantees `min <= max` per axis; use
    /// [`BoxCollider::from_points`] when that is not known.
    pub fn new(min: Point3, max: Point3) -> Self {
        debug_assert!(min.cmple(max).all(), "box min {min} exceeds max {max}");
        Self { min, max }
    }

    /// The smallest box containing every point, or `None` for no points.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    pub fn min(&self) -> Point3 {
        self.min
    }

    pub fn max(&self) -> Point3 {
        self.max
    }

    /// The point of the box nearest to `point`; `point` itself when inside.
    pub fn closest_point(&self, point: Point3) -> Point3 {
        point.min(self.max).max(self.min)
    }

    pub fn distance_to_point(&self, point: Point3) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// Closed intervals: boxes touching along a face do intersect.
    pub fn intersects_box(&self, other: &BoxCollider) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    pub fn intersects_sphere(&self, sphere: &SphereCollider) -> bool {
        self.distance_to_point(sphere.center) < sphere.radius
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCollider {
    pub center: Point3,
    pub radius: f64,
}

impl SphereCollider {
    pub fn new(center: Point3, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative sphere radius {radius}");
        Self { center, radius }
    }

    pub fn intersects_sphere(&self, other: &SphereCollider) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    pub fn intersects_box(&self, aabb: &BoxCollider) -> bool {
        aabb.intersects_sphere(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Box(BoxCollider),
    Sphere(SphereCollider),
}

impl Collider {
    pub fn intersects(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Box(a), Collider::Box(b)) => a.intersects_box(b),
            (Collider::Box(a), Collider::Sphere(s)) | (Collider::Sphere(s), Collider::Box(a)) => {
                a.intersects_sphere(s)
            }
            (Collider::Sphere(a), Collider::Sphere(b)) => a.intersects_sphere(b),
        }
    }
}

impl From<BoxCollider> for Collider {
    fn from(value: BoxCollider) -> Self {
        Collider::Box(value)
    }
}

impl From<SphereCollider> for Collider {
    fn from(value: SphereCollider) -> Self {
        Collider::Sphere(value)
    }
}
