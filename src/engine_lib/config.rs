// src/engine_lib/config.rs

use thiserror::Error;

use crate::intersection::ClipMode;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("screen resolution {width}x{height} must be non-zero in both dimensions")]
    EmptyResolution { width: u32, height: u32 },
    #[error("field of view {0} degrees must lie strictly between 0 and 180")]
    FieldOfView(f64),
    #[error("screen distance {0} must be positive and finite")]
    ScreenDistance(f64),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// How the projection scale is specified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocalLength {
    /// Horizontal field of view in degrees.
    FieldOfView { degrees: f64 },
    /// Screen distance in pixels, used directly.
    ScreenDistance(f64),
}

impl FocalLength {
    /// Screen distance in pixels for a surface `screen_width` pixels wide.
    pub fn screen_distance(&self, screen_width: f64) -> f64 {
        match *self {
            FocalLength::FieldOfView { degrees } => {
                (screen_width / 2.0) / (degrees.to_radians() / 2.0).tan()
            }
            FocalLength::ScreenDistance(distance) => distance,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Filled,
    Wireframe,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub focal: FocalLength,
    /// Degrees of rotation per unit of pointer motion.
    pub sensitivity: f64,
    pub render_mode: RenderMode,
    pub clip_mode: ClipMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            focal: FocalLength::FieldOfView { degrees: 90.0 },
            sensitivity: 0.1,
            render_mode: RenderMode::Filled,
            clip_mode: ClipMode::SingleNeighbor,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyResolution {
                width: self.width,
                height: self.height,
            });
        }
        match self.focal {
            FocalLength::FieldOfView { degrees } => {
                if !(degrees > 0.0 && degrees < 180.0) {
                    return Err(ConfigError::FieldOfView(degrees));
                }
            }
            FocalLength::ScreenDistance(distance) => {
                if !(distance.is_finite() && distance > 0.0) {
                    return Err(ConfigError::ScreenDistance(distance));
                }
            }
        }
        check_non_negative("sensitivity", self.sensitivity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovementConfig {
    /// World units per second.
    pub speed: f64,
    /// Degrees per second while a turn key is held.
    pub turn_speed: f64,
    /// How far crouching lowers the eye below the player-origin height.
    pub crouch_offset: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            turn_speed: 90.0,
            crouch_offset: 0.5,
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("speed", self.speed)?;
        check_non_negative("turn_speed", self.turn_speed)?;
        check_non_negative("crouch_offset", self.crouch_offset)
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
