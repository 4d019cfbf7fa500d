// src/engine_lib/controller.rs

use glam::DVec2;
use winit::{
    event::{DeviceEvent, ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::engine_lib::camera::Camera;
use crate::engine_lib::config::MovementConfig;
use crate::geometry::Point3;

/// One frame's worth of player input: which actions are held, and how far
/// the pointer moved since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementIntent {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub crouch: bool,
    /// Pointer motion; +x is rightward, +y is downward.
    pub pointer_delta: DVec2,
}

/// Collects window input into a [`MovementIntent`].
#[derive(Debug, Default)]
pub struct InputState {
    intent: MovementIntent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => match key_event.physical_key {
                PhysicalKey::Code(code) => {
                    self.set_key(code, key_event.state == ElementState::Pressed)
                }
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused.
                self.release_all();
                false
            }
            _ => false,
        }
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.intent.pointer_delta += DVec2::new(*dx, *dy);
        }
    }

    /// Updates the held state of the action bound to `code`. Returns false
    /// for unbound keys.
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        let slot = match code {
            KeyCode::KeyW => &mut self.intent.forward,
            KeyCode::KeyS => &mut self.intent.back,
            KeyCode::KeyA => &mut self.intent.strafe_left,
            KeyCode::KeyD => &mut self.intent.strafe_right,
            KeyCode::ArrowLeft => &mut self.intent.turn_left,
            KeyCode::ArrowRight => &mut self.intent.turn_right,
            KeyCode::ControlLeft | KeyCode::KeyC => &mut self.intent.crouch,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn release_all(&mut self) {
        self.intent = MovementIntent {
            pointer_delta: self.intent.pointer_delta,
            ..MovementIntent::default()
        };
    }

    /// Snapshot for this frame. Held keys persist; pointer motion is consumed.
    pub fn take_intent(&mut self) -> MovementIntent {
        let intent = self.intent;
        self.intent.pointer_delta = DVec2::ZERO;
        intent
    }
}

/// Applies a [`MovementIntent`] to a camera once per frame.
#[derive(Debug)]
pub struct PlayerController {
    config: MovementConfig,
    /// Eye height while standing.
    origin_height: f64,
}

impl PlayerController {
    pub fn new(config: MovementConfig, origin_height: f64) -> Self {
        Self {
            config,
            origin_height,
        }
    }

    pub fn origin_height(&self) -> f64 {
        self.origin_height
    }

    pub fn update(&self, camera: &mut Camera<'_>, intent: &MovementIntent, dt: f64) {
        let sensitivity = camera.sensitivity();

        let mut turn = 0.0;
        if intent.turn_left {
            turn += 1.0;
        }
        if intent.turn_right {
            turn -= 1.0;
        }
        // Yaw grows counterclockwise seen from above, so rightward pointer motion subtracts.
        let yaw_delta = turn * self.config.turn_speed * dt - intent.pointer_delta.x * sensitivity;
        let pitch_delta = -intent.pointer_delta.y * sensitivity;
        camera.rotate_by(yaw_delta, pitch_delta);

        let forward = camera.forward();
        let right = camera.right();
        let mut direction = Point3::ZERO;
        if intent.forward {
            direction += forward;
        }
        if intent.back {
            direction -= forward;
        }
        if intent.strafe_right {
            direction += right;
        }
        if intent.strafe_left {
            direction -= right;
        }
        camera.position += direction * (self.config.speed * dt);

        let crouch_drop = if intent.crouch {
            self.config.crouch_offset
        } else {
            0.0
        };
        camera.position.z = self.origin_height - crouch_drop;
    }
}
