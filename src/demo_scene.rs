// src/demo_scene.rs

use crate::engine_lib::collider::SphereCollider;
use crate::engine_lib::solid::{Cuboid, FaceColors};
use crate::geometry::Point3;
use crate::rendering_lib::sink::palette;

/// Standing eye height of the demo player.
pub const PLAYER_EYE_HEIGHT: f64 = 1.5;
pub const PLAYER_RADIUS: f64 = 0.3;

const CUBE_COLORS: FaceColors = FaceColors::PerFace([
    palette::GREEN,
    palette::DARK_GREEN,
    palette::YELLOW,
    palette::RED,
    palette::BLUE,
    palette::GREY,
]);
const BLOCK_COLORS: FaceColors = FaceColors::Uniform(palette::ORANGE);

pub struct DemoScene {
    pub solids: Vec<Cuboid>,
    pub camera_start: Point3,
}

impl DemoScene {
    /// Whether `player` overlaps any solid's bounding box.
    pub fn blocked(&self, player: &SphereCollider) -> bool {
        self.solids
            .iter()
            .any(|solid| solid.bounding_box().intersects_sphere(player))
    }
}

/// A small cube with a larger block behind it, seen from in front of both.
pub fn create_demo_scene() -> DemoScene {
    let solids = vec![
        Cuboid::new(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0), CUBE_COLORS),
        Cuboid::new(Point3::new(2.0, 1.0, 2.0), Point3::new(4.0, 4.0, 4.0), BLOCK_COLORS),
    ];
    DemoScene {
        solids,
        camera_start: Point3::new(-2.0, 1.5, PLAYER_EYE_HEIGHT),
    }
}
