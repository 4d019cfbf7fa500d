// src/engine_lib/mod.rs

pub mod camera;
pub mod collider;
pub mod config;
pub mod controller;
pub mod solid;

pub use camera::{Camera, FaceOutcome, FrameStats};
pub use collider::{BoxCollider, Collider, SphereCollider};
pub use config::{CameraConfig, ConfigError, FocalLength, MovementConfig, RenderMode};
pub use controller::{InputState, MovementIntent, PlayerController};
pub use solid::{CubeFace, Cuboid, Face, FaceColors};
