//! The decorative 3D background behind the hero section.
//!
//! [`SceneBackground`] owns the star field, lighting and orbit controls and
//! moves between two states: unmounted, and mounted with a live
//! [`RenderLoop`]. Frame ticks only advance the scene while it is mounted.

pub mod camera;
pub mod light;
pub mod lifecycle;
pub mod stars;

use std::time::Instant;

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use serde::Deserialize;

pub use camera::{OrbitConfig, OrbitControls, OrbitInput};
pub use lifecycle::{RenderLoop, RenderState};
pub use light::{AmbientLight, Lighting, PointLight};
pub use stars::{Star, StarField, StarFieldConfig};

/// Smallest on-screen star radius in logical pixels
const MIN_STAR_RADIUS: f32 = 0.35;
/// Opacity kept by the farthest stars when fading
const FADE_FLOOR: f32 = 0.35;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub enabled: bool,
    pub seed: u64,
    pub ambient: AmbientLight,
    pub point: PointLight,
    pub stars: StarFieldConfig,
    pub orbit: OrbitConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: 0x5eed_cafe,
            ambient: AmbientLight::default(),
            point: PointLight::default(),
            stars: StarFieldConfig::default(),
            orbit: OrbitConfig::default(),
        }
    }
}

/// A star after projection into viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Vec3,
    pub alpha: f32,
}

#[derive(Debug)]
pub struct SceneBackground {
    stars: StarField,
    lighting: Lighting,
    controls: OrbitControls,
    elapsed: f32,
    state: RenderState,
}

impl SceneBackground {
    pub fn new(config: &SceneConfig) -> Self {
        let stars = StarField::generate(config.stars, config.seed);
        tracing::debug!(stars = stars.len(), seed = config.seed, "generated star field");
        Self {
            lighting: Lighting::new(config.ambient, config.point, config.stars.radius),
            controls: OrbitControls::new(config.orbit),
            stars,
            elapsed: 0.0,
            state: RenderState::Unmounted,
        }
    }

    /// Start rendering. Returns `false` if already mounted.
    pub fn mount(&mut self, now: Instant) -> bool {
        if self.state.is_rendering() {
            return false;
        }
        self.state = RenderState::Rendering(RenderLoop::start(now));
        tracing::info!("scene background mounted");
        true
    }

    /// Stop rendering and release the render loop. Returns `false` if not mounted.
    pub fn unmount(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            RenderState::Rendering(render_loop) => {
                tracing::info!(
                    frames = render_loop.frames(),
                    uptime = ?render_loop.uptime(),
                    "scene background unmounted"
                );
                true
            }
            RenderState::Unmounted => false,
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.state.is_rendering()
    }

    /// Frames drawn since the last mount
    pub fn rendered_frames(&self) -> Option<u64> {
        match &self.state {
            RenderState::Rendering(render_loop) => Some(render_loop.frames()),
            RenderState::Unmounted => None,
        }
    }

    /// Advance the scene clock. Ignored while unmounted.
    pub fn frame(&mut self, now: Instant) -> bool {
        let RenderState::Rendering(render_loop) = &mut self.state else {
            return false;
        };
        let dt = render_loop.tick(now);
        self.elapsed += dt;
        self.controls.update(dt);
        true
    }

    pub fn orbit(&mut self, input: OrbitInput) {
        self.controls.apply(input);
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Scene time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Project every visible star onto a viewport of the given size
    pub fn project(&self, viewport: Vec2) -> Vec<ProjectedStar> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Vec::new();
        }

        let config = self.stars.config();
        let spin = Mat4::from_rotation_y(self.elapsed * config.rotation_speed);
        let view = self.controls.view() * spin;
        let projection = self.controls.projection(viewport.x / viewport.y);

        let near_shell = (config.radius - self.controls.distance).max(camera::NEAR);
        let far_shell = config.radius + config.depth + self.controls.distance;

        self.stars
            .stars()
            .iter()
            .filter_map(|star| {
                let eye = view.transform_point3(star.position);
                let depth = -eye.z;
                if depth <= camera::NEAR {
                    return None;
                }

                let clip = projection * eye.extend(1.0);
                let ndc = clip.xy() / clip.w;
                if ndc.x.abs() > 1.02 || ndc.y.abs() > 1.02 {
                    return None;
                }

                let point_size =
                    star.size * (30.0 / depth) * 3.0 * star.twinkle(self.elapsed, config.speed);
                let alpha = if config.fade {
                    let t = ((depth - near_shell) / (far_shell - near_shell)).clamp(0.0, 1.0);
                    1.0 - (1.0 - FADE_FLOOR) * t
                } else {
                    1.0
                };

                let world = spin.transform_point3(star.position);
                Some(ProjectedStar {
                    x: (ndc.x + 1.0) * 0.5 * viewport.x,
                    y: (1.0 - ndc.y) * 0.5 * viewport.y,
                    radius: (point_size * 0.5).max(MIN_STAR_RADIUS),
                    color: self.lighting.shade(star.color, world),
                    alpha,
                })
            })
            .collect()
    }
}

impl Drop for SceneBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config() -> SceneConfig {
        SceneConfig {
            stars: StarFieldConfig {
                count: 2000,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn frames_only_advance_while_mounted() {
        let t0 = Instant::now();
        let mut background = SceneBackground::new(&config());

        assert!(!background.frame(t0 + Duration::from_millis(16)));
        assert_eq!(background.elapsed(), 0.0);
        assert_eq!(background.rendered_frames(), None);

        assert!(background.mount(t0));
        assert!(!background.mount(t0));
        assert!(background.frame(t0 + Duration::from_millis(16)));
        assert!(background.frame(t0 + Duration::from_millis(32)));
        assert_eq!(background.rendered_frames(), Some(2));
        assert!((background.elapsed() - 0.032).abs() < 1e-5);

        assert!(background.unmount());
        assert!(!background.unmount());
        assert!(!background.frame(t0 + Duration::from_millis(48)));
        assert!((background.elapsed() - 0.032).abs() < 1e-5);
    }

    #[test]
    fn remount_starts_a_fresh_loop() {
        let t0 = Instant::now();
        let mut background = SceneBackground::new(&config());
        background.mount(t0);
        background.frame(t0 + Duration::from_millis(16));
        background.unmount();

        background.mount(t0 + Duration::from_secs(1));
        assert_eq!(background.rendered_frames(), Some(0));
    }

    #[test]
    fn projected_stars_stay_in_viewport() {
        let background = SceneBackground::new(&config());
        let viewport = Vec2::new(1280.0, 720.0);
        let projected = background.project(viewport);

        assert!(!projected.is_empty());
        assert!(projected.len() < background.stars().len());
        for star in &projected {
            assert!(star.x >= -0.02 * viewport.x && star.x <= 1.02 * viewport.x);
            assert!(star.y >= -0.02 * viewport.y && star.y <= 1.02 * viewport.y);
            assert!(star.radius >= MIN_STAR_RADIUS);
            assert!((FADE_FLOOR..=1.0).contains(&star.alpha));
        }
    }

    #[test]
    fn empty_viewport_projects_nothing() {
        let background = SceneBackground::new(&config());
        assert!(background.project(Vec2::ZERO).is_empty());
    }

    #[test]
    fn scroll_does_not_change_framing() {
        let t0 = Instant::now();
        let mut background = SceneBackground::new(&config());
        background.mount(t0);
        let before = background.project(Vec2::new(800.0, 600.0));

        background.orbit(OrbitInput::Scroll(10.0));
        background.orbit(OrbitInput::Pinch(3.0));
        background.frame(t0);
        let after = background.project(Vec2::new(800.0, 600.0));

        assert_eq!(before, after);
    }

    #[test]
    fn drag_changes_visible_stars() {
        let t0 = Instant::now();
        let mut background = SceneBackground::new(&config());
        background.mount(t0);
        let before = background.project(Vec2::new(800.0, 600.0));

        background.orbit(OrbitInput::Drag { dx: 300.0, dy: 0.0 });
        for i in 1..=60 {
            background.frame(t0 + Duration::from_millis(16 * i));
        }
        let after = background.project(Vec2::new(800.0, 600.0));

        assert_ne!(before, after);
    }
}
