// src/engine_lib/camera.rs

use log::{debug, trace};

use crate::engine_lib::config::{CameraConfig, ConfigError, RenderMode};
use crate::engine_lib::solid::{Cuboid, Face};
use crate::geometry::{polygon_area, Offscreen, Point2, Point3, ProjectedPoint};
use crate::intersection::{ClipMode, ScreenClipper, ScreenRect};
use crate::rendering_lib::sink::DrawSink;

/// Added to the forward offset before the perspective divide so a point level
/// with the camera does not divide by zero.
pub const PROJECTION_EPSILON: f64 = 0.001;

/// Pitch is kept inside this many degrees of level.
pub const PITCH_LIMIT: f64 = 89.0;

/// Clipped polygons below this area, in square pixels, count as degenerate.
const DEGENERATE_AREA: f64 = 1e-6;

/// What one call to [`Camera::render`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub queued: usize,
    pub drawn: usize,
    /// Faces with no vertex on screen.
    pub skipped: usize,
    /// Drawn faces whose clipped polygon has zero area.
    pub degenerate: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceOutcome {
    Drawn { degenerate: bool },
    Skipped,
}

/// A pinhole camera with yaw/pitch rotation and a painter's-algorithm render queue.
///
/// The queue borrows faces from the solids that own them, so solids must
/// outlive the camera they are queued on.
#[derive(Debug)]
pub struct Camera<'a> {
    pub position: Point3,
    yaw: f64,
    pitch: f64,
    screen: ScreenRect,
    screen_distance: f64,
    sensitivity: f64,
    render_mode: RenderMode,
    clip_mode: ClipMode,
    queue: Vec<&'a Face>,
}

impl<'a> Camera<'a> {
    /// A camera at `position` looking along +x with zero yaw and pitch.
    pub fn new(position: Point3, config: &CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        Ok(Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            screen: ScreenRect::new(width, height),
            screen_distance: config.focal.screen_distance(width),
            sensitivity: config.sensitivity,
            render_mode: config.render_mode,
            clip_mode: config.clip_mode,
            queue: Vec::new(),
        })
    }

    /// Yaw in degrees, in `[0, 360)`.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Pitch in degrees, positive looking up.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    pub fn screen_distance(&self) -> f64 {
        self.screen_distance
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn set_rotation(&mut self, yaw_deg: f64, pitch_deg: f64) {
        let mut yaw = yaw_deg.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360.
        if yaw >= 360.0 {
            yaw = 0.0;
        }
        self.yaw = yaw;
        self.pitch = pitch_deg.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn rotate_by(&mut self, yaw_delta: f64, pitch_delta: f64) {
        self.set_rotation(self.yaw + yaw_delta, self.pitch + pitch_delta);
    }

    /// Horizontal unit vector the camera faces.
    pub fn forward(&self) -> Point3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Point3::new(cos, sin, 0.0)
    }

    /// Horizontal unit vector to the camera's right.
    pub fn right(&self) -> Point3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Point3::new(sin, -cos, 0.0)
    }

    /// Rotates `point` about the camera position into the camera's frame.
    ///
    /// Yaw is undone first (in the x/y plane), then pitch (in the resulting
    /// x/z plane). The result is still expressed relative to the world origin,
    /// so the camera position itself is a fixed point of this map.
    pub fn rotate_point(&self, point: Point3) -> Point3 {
        let offset = point - self.position;

        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let x_yawed = offset.x * cos_yaw + offset.y * sin_yaw;
        let y_yawed = -offset.x * sin_yaw + offset.y * cos_yaw;

        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        let x_pitched = x_yawed * cos_pitch + offset.z * sin_pitch;
        let z_pitched = -x_yawed * sin_pitch + offset.z * cos_pitch;

        Point3::new(x_pitched, y_yawed, z_pitched) + self.position
    }

    /// Projects a world point to device space and classifies it.
    pub fn project(&self, point: Point3) -> ProjectedPoint {
        let dist = self.rotate_point(point) - self.position;

        let y_mid = dist.y * self.screen_distance / (dist.x + PROJECTION_EPSILON);
        let z_mid = dist.z * self.screen_distance / (dist.x + PROJECTION_EPSILON);

        let center = self.screen.center();
        let position = Point2::new(center.x - y_mid, center.y - z_mid);

        let mut offscreen = self.screen.classify(position);
        if dist.x < 0.0 {
            offscreen |= Offscreen::BEHIND;
        }

        ProjectedPoint {
            position,
            offscreen,
            depth: dist.x,
        }
    }

    pub fn queue_face(&mut self, face: &'a Face) {
        self.queue.push(face);
    }

    pub fn queue_solid(&mut self, solid: &'a Cuboid) {
        self.queue.extend(solid.faces());
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn queue(&self) -> &[&'a Face] {
        &self.queue
    }

    /// Orders the queue farthest first by distance from the camera to each
    /// face's centroid.
    ///
    /// Centroid distance only approximates depth. Convex solids that do not
    /// interpenetrate come out right; large or interpenetrating faces can
    /// still overdraw in the wrong order.
    pub fn face_sort(&mut self) {
        let position = self.position;
        let mut keyed: Vec<(f64, &'a Face)> = self
            .queue
            .iter()
            .map(|face| (face.centroid().distance(position), *face))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        self.queue.clear();
        self.queue.extend(keyed.into_iter().map(|(_, face)| face));
    }

    /// Projects, clips and draws a single face.
    pub fn render_face(&self, face: &Face, sink: &mut dyn DrawSink) -> FaceOutcome {
        let projected: Vec<ProjectedPoint> =
            face.vertices().iter().map(|v| self.project(*v)).collect();

        let clipper = ScreenClipper::new(self.screen, self.clip_mode);
        let Some(polygon) = clipper.clip_polygon(&projected) else {
            return FaceOutcome::Skipped;
        };

        match self.render_mode {
            RenderMode::Filled => sink.fill_polygon(&polygon, face.color()),
            RenderMode::Wireframe => {
                for (i, from) in polygon.iter().enumerate() {
                    let to = polygon[(i + 1) % polygon.len()];
                    sink.draw_line(*from, to, face.color());
                }
            }
        }

        FaceOutcome::Drawn {
            degenerate: polygon_area(&polygon) < DEGENERATE_AREA,
        }
    }

    /// Sorts the queue and draws every face into `sink`, farthest first.
    pub fn render(&mut self, sink: &mut dyn DrawSink) -> FrameStats {
        self.face_sort();

        let mut stats = FrameStats {
            queued: self.queue.len(),
            ..FrameStats::default()
        };
        for face in &self.queue {
            match self.render_face(face, sink) {
                FaceOutcome::Drawn { degenerate } => {
                    stats.drawn += 1;
                    if degenerate {
                        stats.degenerate += 1;
                    }
                }
                FaceOutcome::Skipped => {
                    trace!("face at {} has no vertex on screen", face.centroid());
                    stats.skipped += 1;
                }
            }
        }

        debug!(
            "frame: {} queued, {} drawn, {} skipped, {} degenerate",
            stats.queued, stats.drawn, stats.skipped, stats.degenerate
        );
        stats
    }
}
