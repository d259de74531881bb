//! Orbit camera controls
//!
//! Orbits around a fixed focal point. Rotation follows pointer drags;
//! zooming is switched off so the star field keeps its framing.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use serde::Deserialize;

/// Vertical field of view in degrees
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Distance from the focal point
    pub distance: f32,
    /// Rotation sensitivity (radians per pixel)
    pub rotation_speed: f32,
    /// Smooth damping factor (0 = instant, 1 = no movement)
    pub damping: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            rotation_speed: 0.005,
            damping: 0.5,
        }
    }
}

/// Raw pointer input forwarded to the controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitInput {
    /// Pointer moved while the primary button or a finger is held
    Drag { dx: f32, dy: f32 },
    /// Wheel lines or pixels, positive = away from the user
    Scroll(f32),
    /// Pinch scale factor, > 1 = spreading fingers
    Pinch(f32),
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Focal point
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (radians, 0 = looking down -Z)
    pub azimuth: f32,
    /// Vertical angle (radians, 0 = horizontal)
    pub elevation: f32,

    pub min_distance: f32,
    pub max_distance: f32,
    pub min_elevation: f32,
    pub max_elevation: f32,

    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,

    pub rotate_enabled: bool,
    pub zoom_enabled: bool,

    target_azimuth: f32,
    target_elevation: f32,
    target_distance: f32,
}

impl OrbitControls {
    /// Controls as the background uses them: rotation on, zoom off
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: config.distance,
            azimuth: 0.0,
            elevation: 0.0,

            min_distance: 0.1,
            max_distance: FAR * 0.5,
            min_elevation: -PI * 0.45,
            max_elevation: PI * 0.45,

            rotation_speed: config.rotation_speed,
            zoom_speed: 0.1,
            damping: config.damping.clamp(0.0, 0.99),

            rotate_enabled: true,
            zoom_enabled: false,

            target_azimuth: 0.0,
            target_elevation: 0.0,
            target_distance: config.distance,
        }
    }

    pub fn apply(&mut self, input: OrbitInput) {
        match input {
            OrbitInput::Drag { dx, dy } => {
                if self.rotate_enabled {
                    self.target_azimuth -= dx * self.rotation_speed;
                    self.target_elevation = (self.target_elevation + dy * self.rotation_speed)
                        .clamp(self.min_elevation, self.max_elevation);
                }
            }
            OrbitInput::Scroll(amount) => {
                if self.zoom_enabled {
                    self.target_distance = (self.target_distance
                        - amount * self.zoom_speed * self.distance)
                        .clamp(self.min_distance, self.max_distance);
                }
            }
            OrbitInput::Pinch(scale) => {
                if self.zoom_enabled && scale > 0.0 {
                    self.target_distance = (self.target_distance / scale)
                        .clamp(self.min_distance, self.max_distance);
                }
            }
        }
    }

    /// Ease the current pose toward the input-driven target
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - self.damping.powf(dt * 60.0);
        self.azimuth = lerp(self.azimuth, self.target_azimuth, t);
        self.elevation = lerp(self.elevation, self.target_elevation, t);
        self.distance = lerp(self.distance, self.target_distance, t);
    }

    pub fn is_settled(&self) -> bool {
        const EPSILON: f32 = 1e-4;
        (self.azimuth - self.target_azimuth).abs() < EPSILON
            && (self.elevation - self.target_elevation).abs() < EPSILON
            && (self.distance - self.target_distance).abs() < EPSILON
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_elev, cos_elev) = self.elevation.sin_cos();
        let (sin_azim, cos_azim) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_elev * sin_azim,
                self.distance * sin_elev,
                self.distance * cos_elev * cos_azim,
            )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(f32::EPSILON), NEAR, FAR)
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
