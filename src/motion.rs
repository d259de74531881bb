//! Animation primitives: spring physics for card flips, the hero title
//! bounce, and the staggered entrance of page sections.

use std::time::{Duration, Instant};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Roughly the pace of a 0.6s CSS flip transition
    pub fn flip() -> Self {
        Self::new(180.0, 24.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::flip()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    epsilon: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            epsilon: 1e-3,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Within epsilon of the target with negligible velocity
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.epsilon
            && self.velocity.abs() < self.epsilon * 10.0
    }

    /// Step the simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

/// Vertical offset of a bouncing element at time `t` seconds, as a fraction
/// of its height. Zero at rest, negative is up.
///
/// One-second cycle: starts lifted by a quarter of the height, falls with
/// an ease-in to rest at the half-way point, then rises with an ease-out.
pub fn bounce_offset(t: f32) -> f32 {
    const LIFT: f32 = 0.25;
    let phase = t.rem_euclid(1.0);
    if phase < 0.5 {
        let s = phase / 0.5;
        -LIFT * (1.0 - s * s * s)
    } else {
        let s = (phase - 0.5) / 0.5;
        -LIFT * (1.0 - (1.0 - s).powi(3))
    }
}

/// Staggered slide-in of page sections after start-up
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    started: Instant,
    stagger: Duration,
    duration: Duration,
}

impl Entrance {
    /// Travel distance in logical pixels
    pub const TRAVEL: f32 = 24.0;

    pub fn new(started: Instant) -> Self {
        Self {
            started,
            stagger: Duration::from_millis(150),
            duration: Duration::from_millis(600),
        }
    }

    /// Eased progress of section `index` in `[0, 1]`
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let begin = self.started + self.stagger * index as u32;
        let t = now.saturating_duration_since(begin).as_secs_f32() / self.duration.as_secs_f32();
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Remaining offset of section `index` in logical pixels
    pub fn offset(&self, index: usize, now: Instant) -> f32 {
        (1.0 - self.progress(index, now)) * Self::TRAVEL
    }

    pub fn is_done(&self, sections: usize, now: Instant) -> bool {
        sections == 0 || self.progress(sections - 1, now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::flip(), 0.0);
        spring.set_target(std::f32::consts::PI);

        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - std::f32::consts::PI).abs() < 1e-2);
    }

    #[test]
    fn spring_keeps_velocity_on_retarget() {
        let mut spring = Spring::new(SpringConfig::flip(), 0.0);
        spring.set_target(3.0);
        for _ in 0..5 {
            spring.step(1.0 / 60.0);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn flip_spring_is_slightly_underdamped() {
        let config = SpringConfig::flip();
        let critical = 2.0 * (config.stiffness * config.mass).sqrt();
        assert!(config.damping < critical);
    }

    #[test]
    fn bounce_rests_mid_cycle() {
        assert!((bounce_offset(0.0) + 0.25).abs() < 1e-6);
        assert!(bounce_offset(0.5).abs() < 1e-6);
        assert!((bounce_offset(0.999) + 0.25).abs() < 1e-3);
        assert!((bounce_offset(3.25) - bounce_offset(0.25)).abs() < 1e-5);
        for i in 0..100 {
            let offset = bounce_offset(i as f32 * 0.037);
            assert!((-0.25..=0.0).contains(&offset));
        }
    }

    #[test]
    fn entrance_staggers_sections() {
        let start = Instant::now();
        let entrance = Entrance::new(start);

        let t = start + Duration::from_millis(300);
        assert!(entrance.progress(0, t) > entrance.progress(1, t));
        assert!(entrance.progress(1, t) > entrance.progress(2, t));
        assert_eq!(entrance.offset(0, start), Entrance::TRAVEL);

        let done = start + Duration::from_secs(2);
        assert!(entrance.is_done(4, done));
        assert_eq!(entrance.offset(3, done), 0.0);
        assert!(!entrance.is_done(4, t));
    }
}
