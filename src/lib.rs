// src/lib.rs

pub mod demo_scene;
pub mod engine_lib;
pub mod geometry;
pub mod intersection;
pub mod rendering_lib;

pub use geometry::{Point2, Point3};
