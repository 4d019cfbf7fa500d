// tests/pipeline.rs

use approx::assert_abs_diff_eq;

use painter3d::engine_lib::{
    Camera, CameraConfig, CubeFace, Cuboid, FaceColors, FocalLength, MovementIntent,
    PlayerController, MovementConfig,
};
use painter3d::geometry::{centroid, Point2};
use painter3d::rendering_lib::{palette, Color, DrawSink, FrameBatch};
use painter3d::Point3;

#[derive(Default)]
struct Recorder {
    polygons: Vec<(Vec<Point2>, Color)>,
}

impl DrawSink for Recorder {
    fn fill_polygon(&mut self, points: &[Point2], color: Color) {
        self.polygons.push((points.to_vec(), color));
    }
}

const FACE_COLORS: [Color; 6] = [
    palette::RED,
    palette::GREEN,
    palette::BLUE,
    palette::YELLOW,
    palette::GREY,
    palette::ORANGE,
];

fn scenario_config() -> CameraConfig {
    CameraConfig {
        width: 1280,
        height: 720,
        focal: FocalLength::ScreenDistance(800.0),
        ..CameraConfig::default()
    }
}

#[test]
fn nearest_face_of_cube_is_drawn_last_and_on_screen() {
    let cube = Cuboid::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        FaceColors::PerFace(FACE_COLORS),
    );
    let mut camera = Camera::new(Point3::new(-2.0, 0.0, 1.0), &scenario_config()).unwrap();
    assert_eq!(camera.screen_distance(), 800.0);
    camera.queue_solid(&cube);

    let mut sink = Recorder::default();
    let stats = camera.render(&mut sink);
    assert_eq!(stats.queued, 6);
    assert_eq!(stats.drawn, 6);
    assert_eq!(stats.skipped, 0);

    // The x = 1 face is nearest the camera, so it is painted over everything else.
    let nearest = cube.face(CubeFace::NX);
    let (polygon, color) = sink.polygons.last().unwrap();
    assert_eq!(*color, nearest.color());
    assert_eq!(polygon.len(), 4);

    let projected = camera.project(nearest.centroid());
    assert!(projected.is_on_screen());
    assert!((0.0..=1280.0).contains(&projected.position.x));
    assert!((0.0..=720.0).contains(&projected.position.y));
    assert_abs_diff_eq!(projected.position.x, 640.0 - 1.5 * 800.0 / 3.001, epsilon = 1e-9);
    assert_abs_diff_eq!(projected.position.y, 360.0 - 0.5 * 800.0 / 3.001, epsilon = 1e-9);

    // Farthest face first.
    let distances: Vec<f64> = camera
        .queue()
        .iter()
        .map(|face| centroid(face.vertices()).distance(camera.position))
        .collect();
    assert!(distances.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn turning_away_drops_the_cube() {
    let cube = Cuboid::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        FaceColors::Uniform(palette::GREEN),
    );
    let mut camera = Camera::new(Point3::new(-2.0, 0.0, 1.0), &scenario_config()).unwrap();
    camera.queue_solid(&cube);
    camera.set_rotation(180.0, 0.0);

    let mut sink = Recorder::default();
    let stats = camera.render(&mut sink);
    assert_eq!(stats.skipped, 6);
    assert!(sink.polygons.is_empty());
}

#[test]
fn walking_frames_feed_a_vertex_batch() {
    let cube = Cuboid::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        FaceColors::Uniform(palette::GREEN),
    );
    let mut camera = Camera::new(Point3::new(-4.0, 1.5, 1.5), &scenario_config()).unwrap();
    camera.queue_solid(&cube);
    let controller = PlayerController::new(MovementConfig::default(), 1.5);
    let intent = MovementIntent {
        forward: true,
        ..MovementIntent::default()
    };

    let mut batch = FrameBatch::new();
    for _ in 0..10 {
        controller.update(&mut camera, &intent, 1.0 / 60.0);
        batch.clear();
        let stats = camera.render(&mut batch);
        assert_eq!(stats.drawn + stats.skipped, stats.queued);
        assert_eq!(batch.polygon_count(), stats.drawn);
    }
    assert_abs_diff_eq!(camera.position.x, -4.0 + 10.0 * 10.0 / 60.0, epsilon = 1e-9);
    assert!(batch.polygon_count() > 0);
    assert_eq!(batch.indices().len() % 3, 0);
}
