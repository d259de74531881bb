use std::time::{Duration, Instant};

/// Longest step fed to the simulation after a stall
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Per-frame clock owned by a mounted background.
///
/// Dropping the loop releases it, so every teardown path ends the same way.
#[derive(Debug)]
pub struct RenderLoop {
    mounted_at: Instant,
    last_frame: Instant,
    frames: u64,
}

impl RenderLoop {
    pub(crate) fn start(now: Instant) -> Self {
        tracing::debug!("render loop acquired");
        Self {
            mounted_at: now,
            last_frame: now,
            frames: 0,
        }
    }

    /// Advance to `now` and return the step in seconds
    pub(crate) fn tick(&mut self, now: Instant) -> f32 {
        let step = now
            .saturating_duration_since(self.last_frame)
            .min(MAX_FRAME_STEP);
        self.last_frame = now;
        self.frames += 1;
        step.as_secs_f32()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn uptime(&self) -> Duration {
        self.last_frame.saturating_duration_since(self.mounted_at)
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        tracing::debug!(frames = self.frames, "render loop released");
    }
}

#[derive(Debug, Default)]
pub enum RenderState {
    #[default]
    Unmounted,
    Rendering(RenderLoop),
}

impl RenderState {
    pub fn is_rendering(&self) -> bool {
        matches!(self, RenderState::Rendering(_))
    }
}
