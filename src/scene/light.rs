//! Scene lighting.
//!
//! Stars are shaded by a uniform ambient term plus a single point light
//! whose contribution decays with distance.

use glam::Vec3;
use serde::Deserialize;

/// Ambient light illuminating every star equally
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AmbientLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 0.7,
        }
    }
}

/// Point light (omnidirectional)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Falloff exponent (2 for inverse-square)
    pub decay: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            color: Vec3::ONE,
            intensity: 1.0,
            decay: 2.0,
        }
    }
}

impl PointLight {
    /// Contribution at `at`, where `reference` is the distance at which the
    /// light has dropped to half its intensity.
    pub fn attenuation(&self, at: Vec3, reference: f32) -> f32 {
        let distance = self.position.distance(at);
        let reference = reference.max(f32::EPSILON);
        self.intensity / (1.0 + (distance / reference).powf(self.decay))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub point: PointLight,
    reference: f32,
}

impl Lighting {
    pub fn new(ambient: AmbientLight, point: PointLight, reference: f32) -> Self {
        Self {
            ambient,
            point,
            reference,
        }
    }

    /// Shade a base color at a world position
    pub fn shade(&self, base: Vec3, at: Vec3) -> Vec3 {
        let light = self.ambient.color * self.ambient.intensity
            + self.point.color * self.point.attenuation(at, self.reference);
        (base * light).clamp(Vec3::ZERO, Vec3::ONE)
    }
}
