use std::{path::PathBuf, time::Instant};

use iced::Size;

use crate::{content::SiteContent, motion::Entrance};

/// Sections that slide in after start-up: hero identity, projects, skills
/// and footer
pub const ENTERING_SECTIONS: usize = 4;

/// Longest step handed to the animations after an idle stretch
const MAX_STEP: f32 = 0.1;

pub const INITIAL_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// State shared by every section of the page
#[derive(Debug)]
pub struct AppState {
    pub content: SiteContent,
    /// Directory that download links resolve against
    pub site_root: PathBuf,
    pub viewport: Size,
    pub now: Instant,
    pub entrance: Entrance,
    last_frame: Option<Instant>,
}

impl AppState {
    pub fn new(content: SiteContent, site_root: PathBuf, now: Instant) -> Self {
        Self {
            content,
            site_root,
            viewport: INITIAL_VIEWPORT,
            now,
            entrance: Entrance::new(now),
            last_frame: None,
        }
    }

    /// Record a frame and return the seconds elapsed since the previous one
    pub fn advance(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32().min(MAX_STEP))
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        self.now = now;
        dt
    }

    /// Remaining slide-in offset of section `index`
    pub fn entrance_offset(&self, index: usize) -> f32 {
        self.entrance.offset(index, self.now)
    }

    pub fn is_entering(&self) -> bool {
        !self.entrance.is_done(ENTERING_SECTIONS, self.now)
    }
}
