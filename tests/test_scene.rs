//! Integration tests for the scene background.
//!
//! Tests cover:
//! - Mount, frame and unmount lifecycle
//! - Orbit input: drag rotates, zoom gestures are ignored
//! - Projection of the star field into the viewport

mod common;

use std::time::Instant;

use common::*;
use glam::Vec2;

#[test]
fn test_render_loop_lifecycle() -> anyhow::Result<()> {
    // 1. A fresh background is not rendering
    let mut background = SceneBackground::new(&small_scene(200));
    assert!(!background.is_rendering());
    assert_eq!(background.rendered_frames(), None);

    // 2. Mount and draw three frames
    let start = Instant::now();
    assert!(background.mount(start));
    assert!(!background.mount(start));
    for frame in 1..=3 {
        assert!(background.frame(after_frames(start, frame)));
    }
    assert_eq!(background.rendered_frames(), Some(3));
    assert!(background.elapsed() > 0.0);

    // 3. Unmount releases the loop and later frames are ignored
    assert!(background.unmount());
    assert!(!background.unmount());
    let elapsed = background.elapsed();
    assert!(!background.frame(after_frames(start, 10)));
    assert_eq!(background.elapsed(), elapsed);
    assert_eq!(background.rendered_frames(), None);

    // 4. Remounting starts a new loop from zero frames
    assert!(background.mount(after_frames(start, 20)));
    assert_eq!(background.rendered_frames(), Some(0));

    Ok(())
}

#[test]
fn test_zoom_gestures_are_ignored() -> anyhow::Result<()> {
    let mut background = SceneBackground::new(&small_scene(200));
    let start = Instant::now();
    background.mount(start);
    let distance = background.controls().distance;

    // 1. Wheel and pinch input
    background.orbit(OrbitInput::Scroll(5.0));
    background.orbit(OrbitInput::Scroll(-5.0));
    background.orbit(OrbitInput::Pinch(2.0));
    for frame in 1..=120 {
        background.frame(after_frames(start, frame));
    }

    // 2. The camera distance never changed
    assert!(!background.controls().zoom_enabled);
    assert_eq!(background.controls().distance, distance);

    Ok(())
}

#[test]
fn test_drag_rotates_camera() -> anyhow::Result<()> {
    let mut background = SceneBackground::new(&small_scene(200));
    let start = Instant::now();
    background.mount(start);
    let azimuth = background.controls().azimuth;

    background.orbit(OrbitInput::Drag { dx: 120.0, dy: 0.0 });
    for frame in 1..=120 {
        background.frame(after_frames(start, frame));
    }

    assert!((background.controls().azimuth - azimuth).abs() > 0.1);
    assert!(background.controls().is_settled());

    Ok(())
}

#[test]
fn test_projection_stays_in_viewport() -> anyhow::Result<()> {
    let background = SceneBackground::new(&small_scene(2000));
    let viewport = Vec2::new(1280.0, 800.0);

    let stars = background.project(viewport);

    // 1. Some stars are visible and none exceed the star count
    assert!(!stars.is_empty());
    assert!(stars.len() <= background.stars().len());

    // 2. Every star lands near the viewport with a sane size and opacity
    for star in &stars {
        assert!(star.x >= -0.02 * viewport.x && star.x <= 1.02 * viewport.x);
        assert!(star.y >= -0.02 * viewport.y && star.y <= 1.02 * viewport.y);
        assert!(star.radius > 0.0);
        assert!(star.alpha > 0.0 && star.alpha <= 1.0);
    }

    // 3. A zero-sized viewport draws nothing
    assert!(background.project(Vec2::ZERO).is_empty());

    Ok(())
}

#[test]
fn test_star_layout_is_seeded() -> anyhow::Result<()> {
    let first = SceneBackground::new(&small_scene(300));
    let second = SceneBackground::new(&small_scene(300));
    let other = SceneBackground::new(&SceneConfig {
        seed: 8,
        ..small_scene(300)
    });

    assert_eq!(first.stars().len(), 300);
    assert_eq!(
        first.stars().stars()[0].position,
        second.stars().stars()[0].position
    );
    assert_ne!(
        first.stars().stars()[0].position,
        other.stars().stars()[0].position
    );

    Ok(())
}
