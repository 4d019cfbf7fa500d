// src/engine_lib/solid.rs

use crate::engine_lib::collider::BoxCollider;
use crate::geometry::{centroid, Point3};
use crate::rendering_lib::sink::Color;

/// A flat polygon in world space. Vertex order is the winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    vertices: Vec<Point3>,
    color: Color,
}

impl Face {
    /// Faces with fewer than three vertices are accepted; they have no
    /// normal and clip to a padded, zero-area polygon.
    pub fn new(vertices: Vec<Point3>, color: Color) -> Self {
        Self { vertices, color }
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn centroid(&self) -> Point3 {
        centroid(&self.vertices)
    }

    /// Unit normal from the first three vertices, or zero if they are
    /// collinear or missing.
    pub fn normal(&self) -> Point3 {
        let &[v0, v1, v2, ..] = self.vertices.as_slice() else {
            return Point3::ZERO;
        };
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }
}

/// The six sides of a cuboid, named by the axis they are perpendicular to and
/// whether they sit at the first (`N`) or second (`P`) corner's coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    NZ,
    PZ,
    PY,
    NY,
    NX,
    PX,
}

impl CubeFace {
    /// In the order [`Cuboid::faces`] lists them.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::NZ,
        CubeFace::PZ,
        CubeFace::PY,
        CubeFace::NY,
        CubeFace::NX,
        CubeFace::PX,
    ];

    pub fn index(self) -> usize {
        match self {
            CubeFace::NZ => 0,
            CubeFace::PZ => 1,
            CubeFace::PY => 2,
            CubeFace::NY => 3,
            CubeFace::NX => 4,
            CubeFace::PX => 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaceColors {
    Uniform(Color),
    /// Indexed by [`CubeFace::index`].
    PerFace([Color; 6]),
}

impl FaceColors {
    pub fn color_for(&self, face: CubeFace) -> Color {
        match self {
            FaceColors::Uniform(color) => *color,
            FaceColors::PerFace(colors) => colors[face.index()],
        }
    }
}

/// An axis-aligned box given by two opposite corners.
///
/// The corners need not be sorted. With `corner1` the low corner on every
/// axis the faces wind consistently; otherwise some windings flip, which the
/// renderer does not care about since it never culls.
#[derive(Clone, Debug)]
pub struct Cuboid {
    corner1: Point3,
    corner2: Point3,
    faces: Vec<Face>,
}

impl Cuboid {
    pub fn new(corner1: Point3, corner2: Point3, colors: FaceColors) -> Self {
        let (x1, y1, z1) = (corner1.x, corner1.y, corner1.z);
        let (x2, y2, z2) = (corner2.x, corner2.y, corner2.z);
        let p = Point3::new;

        let faces = CubeFace::ALL
            .iter()
            .map(|&side| {
                let vertices = match side {
                    CubeFace::NZ => vec![p(x1, y1, z1), p(x1, y2, z1), p(x2, y2, z1), p(x2, y1, z1)],
                    CubeFace::PZ => vec![p(x1, y1, z2), p(x1, y2, z2), p(x2, y2, z2), p(x2, y1, z2)],
                    CubeFace::PY => vec![p(x1, y2, z1), p(x1, y2, z2), p(x2, y2, z2), p(x2, y2, z1)],
                    CubeFace::NY => vec![p(x1, y1, z1), p(x1, y1, z2), p(x2, y1, z2), p(x2, y1, z1)],
                    CubeFace::NX => vec![p(x1, y1, z1), p(x1, y1, z2), p(x1, y2, z2), p(x1, y2, z1)],
                    CubeFace::PX => vec![p(x2, y1, z1), p(x2, y1, z2), p(x2, y2, z2), p(x2, y2, z1)],
                };
                Face::new(vertices, colors.color_for(side))
            })
            .collect();

        Self {
            corner1,
            corner2,
            faces,
        }
    }

    pub fn corner1(&self) -> Point3 {
        self.corner1
    }

    pub fn corner2(&self) -> Point3 {
        self.corner2
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, side: CubeFace) -> &Face {
        &self.faces[side.index()]
    }

    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.corner1, self.corner2);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    /// The box collider fitted around this cuboid, whatever its corner order.
    pub fn bounding_box(&self) -> BoxCollider {
        BoxCollider::new(
            self.corner1.min(self.corner2),
            self.corner1.max(self.corner2),
        )
    }
}
