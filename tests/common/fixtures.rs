use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use portfolio::{Gallery, SceneConfig, SiteConfig, scene::StarFieldConfig};
use tempfile::TempDir;

/// Frame step used when driving animations by hand
pub const FRAME: f32 = 1.0 / 60.0;

/// Creates a site root containing a placeholder `resume.pdf`.
/// The directory is removed when the returned handle is dropped.
pub fn create_site_root() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp site root");
    fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4\n%%EOF\n")
        .expect("Failed to write test resume");
    dir
}

/// Writes `text` as `portfolio.toml` inside `dir` and returns its path
pub fn write_config(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("portfolio.toml");
    fs::write(&path, text).expect("Failed to write test config");
    path
}

/// The built-in site config
pub fn builtin_config() -> SiteConfig {
    SiteConfig::builtin().expect("Built-in config must be valid")
}

/// A scene small enough to project quickly in tests
pub fn small_scene(count: usize) -> SceneConfig {
    SceneConfig {
        seed: 7,
        stars: StarFieldConfig {
            count,
            ..StarFieldConfig::default()
        },
        ..SceneConfig::default()
    }
}

/// Ticks the gallery at 60 fps until every flip has settled
pub fn settle(gallery: &mut Gallery) {
    for _ in 0..600 {
        if !gallery.is_animating() {
            return;
        }
        gallery.tick(FRAME);
    }
    panic!("Gallery did not settle within ten seconds");
}

/// `start` advanced by `frames` 60 fps frames
pub fn after_frames(start: Instant, frames: u32) -> Instant {
    start + Duration::from_micros(16_667) * frames
}
