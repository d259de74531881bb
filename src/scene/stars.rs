//! Procedural star field.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    /// Radius of the innermost star shell
    pub radius: f32,
    /// Thickness of the shell stars are spread across
    pub depth: f32,
    /// Number of stars
    pub count: usize,
    /// Size multiplier
    pub factor: f32,
    /// Color saturation (0 = grayscale)
    pub saturation: f32,
    /// Dim distant stars
    pub fade: bool,
    /// Twinkle rate (0 disables twinkling)
    pub speed: f32,
    /// Auto-rotation around the vertical axis in radians per second
    pub rotation_speed: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
            rotation_speed: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub color: Vec3,
    /// Twinkle phase offset in radians
    pub phase: f32,
}

impl Star {
    /// Point size multiplier at time `t` (seconds)
    pub fn twinkle(&self, t: f32, speed: f32) -> f32 {
        if speed > 0.0 {
            (3.0 + (t * speed + self.phase).sin()) / 3.0
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct StarField {
    config: StarFieldConfig,
    stars: Vec<Star>,
}

impl StarField {
    /// Generate a field of stars spread over concentric shells.
    ///
    /// The shell radius starts at `radius + depth` and shrinks by a random
    /// fraction of `depth / count` per star, so every star ends up between
    /// `radius` and `radius + depth` from the origin.
    pub fn generate(config: StarFieldConfig, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let count = config.count;
        let increment = if count > 0 {
            config.depth / count as f32
        } else {
            0.0
        };

        let mut shell = config.radius + config.depth;
        let mut stars = Vec::with_capacity(count);
        for i in 0..count {
            shell -= increment * rng.f32();
            stars.push(Star {
                position: point_on_sphere(&mut rng, shell),
                size: (0.5 + 0.5 * rng.f32()) * config.factor,
                color: hsl_to_rgb(i as f32 / count as f32, config.saturation, 0.9),
                phase: rng.f32() * TAU,
            });
        }

        Self { config, stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &StarFieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Uniformly distributed point on a sphere
fn point_on_sphere(rng: &mut fastrand::Rng, radius: f32) -> Vec3 {
    let polar = (1.0 - 2.0 * rng.f32()).acos();
    let azimuth = TAU * rng.f32();
    let (sin_polar, cos_polar) = polar.sin_cos();
    Vec3::new(
        radius * sin_polar * azimuth.sin(),
        radius * cos_polar,
        radius * sin_polar * azimuth.cos(),
    )
}

pub(crate) fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    if saturation <= 0.0 {
        return Vec3::splat(lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |mut t: f32| {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    Vec3::new(
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> StarFieldConfig {
        StarFieldConfig {
            count: 500,
            ..Default::default()
        }
    }

    #[test]
    fn generates_requested_count_inside_shell() {
        let config = small_config();
        let field = StarField::generate(config, 7);
        assert_eq!(field.len(), 500);

        for star in field.stars() {
            let r = star.position.length();
            assert!(r >= config.radius - 1e-3, "star too close: {r}");
            assert!(r <= config.radius + config.depth + 1e-3, "star too far: {r}");
            assert!(star.size >= 0.5 * config.factor && star.size <= config.factor);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = StarField::generate(small_config(), 42);
        let b = StarField::generate(small_config(), 42);
        let c = StarField::generate(small_config(), 43);
        assert_eq!(a.stars(), b.stars());
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn zero_saturation_is_grayscale() {
        let field = StarField::generate(small_config(), 1);
        for star in field.stars() {
            assert_eq!(star.color.x, star.color.y);
            assert_eq!(star.color.y, star.color.z);
        }
    }

    #[test]
    fn saturated_stars_carry_hue() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn empty_field() {
        let field = StarField::generate(
            StarFieldConfig {
                count: 0,
                ..Default::default()
            },
            0,
        );
        assert!(field.is_empty());
    }

    #[test]
    fn twinkle_stays_in_range() {
        let star = Star {
            position: Vec3::ZERO,
            size: 1.0,
            color: Vec3::ONE,
            phase: 0.3,
        };
        for step in 0..100 {
            let k = star.twinkle(step as f32 * 0.1, 1.0);
            assert!((2.0 / 3.0 - 1e-5..=4.0 / 3.0 + 1e-5).contains(&k));
        }
        assert_eq!(star.twinkle(5.0, 0.0), 1.0);
    }
}
