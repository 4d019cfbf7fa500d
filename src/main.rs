// src/main.rs

//! Headless demo: flies a scripted camera around the demo scene and renders
//! each frame into a vertex batch.

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use painter3d::demo_scene::{create_demo_scene, PLAYER_EYE_HEIGHT, PLAYER_RADIUS};
use painter3d::engine_lib::{
    Camera, CameraConfig, FocalLength, MovementConfig, MovementIntent, PlayerController,
    RenderMode, SphereCollider,
};
use painter3d::intersection::ClipMode;
use painter3d::rendering_lib::FrameBatch;

const FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, conflicts_with = "screen_distance")]
    fov: Option<f64>,

    /// Projection screen distance in pixels, instead of a field of view
    #[arg(long)]
    screen_distance: Option<f64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Draw face outlines instead of filled polygons
    #[arg(long)]
    wireframe: bool,

    /// Clip off-screen vertices against both neighbours
    #[arg(long)]
    clip_both_neighbors: bool,
}

impl Opts {
    fn camera_config(&self) -> CameraConfig {
        let defaults = CameraConfig::default();
        let focal = match (self.fov, self.screen_distance) {
            (_, Some(distance)) => FocalLength::ScreenDistance(distance),
            (Some(degrees), None) => FocalLength::FieldOfView { degrees },
            (None, None) => defaults.focal,
        };
        CameraConfig {
            width: self.width,
            height: self.height,
            focal,
            render_mode: if self.wireframe {
                RenderMode::Wireframe
            } else {
                RenderMode::Filled
            },
            clip_mode: if self.clip_both_neighbors {
                ClipMode::BothNeighbors
            } else {
                ClipMode::SingleNeighbor
            },
            ..defaults
        }
    }
}

/// Walks forward, looks around, strafes and crouches, in a fixed loop.
fn scripted_intent(frame: u32) -> MovementIntent {
    let phase = (frame / 60) % 4;
    let mut intent = MovementIntent::default();
    match phase {
        0 => intent.forward = true,
        1 => intent.pointer_delta.x = if frame % 60 < 30 { 4.0 } else { -4.0 },
        2 => {
            intent.strafe_left = true;
            intent.turn_right = true;
        }
        _ => {
            intent.back = true;
            intent.crouch = true;
        }
    }
    intent
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let scene = create_demo_scene();

    let movement = MovementConfig::default();
    movement.validate().context("invalid movement settings")?;
    let mut camera = Camera::new(scene.camera_start, &opts.camera_config())
        .context("invalid camera settings")?;
    let controller = PlayerController::new(movement, PLAYER_EYE_HEIGHT);

    for solid in &scene.solids {
        camera.queue_solid(solid);
    }
    info!(
        "{} faces queued, screen distance {:.1}px",
        camera.queue().len(),
        camera.screen_distance()
    );

    let mut batch = FrameBatch::new();
    for frame in 0..opts.frames {
        let previous = camera.position;
        controller.update(&mut camera, &scripted_intent(frame), FRAME_DT);
        if scene.blocked(&SphereCollider::new(camera.position, PLAYER_RADIUS)) {
            warn!("frame {frame}: movement blocked at {}", camera.position);
            camera.position = previous;
        }

        batch.clear();
        let stats = camera.render(&mut batch);

        if frame % 60 == 0 {
            info!(
                "frame {frame}: pos {:.2} yaw {:.1} pitch {:.1}, {}/{} faces drawn, {} bytes of vertices",
                camera.position,
                camera.yaw(),
                camera.pitch(),
                stats.drawn,
                stats.queued,
                batch.vertex_bytes().len() + batch.line_bytes().len()
            );
        }
    }

    Ok(())
}
