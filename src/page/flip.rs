use std::f32::consts::{FRAC_PI_2, PI};

use crate::motion::{Spring, SpringConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Flip state of a single project card.
///
/// `pinned` is toggled by activation (click, tap, keyboard) and the hover
/// preview follows the pointer. Either one turns the card to its back face.
/// Activation silences the preview until the pointer enters again, so two
/// activations always end on the front.
#[derive(Debug, Clone)]
pub struct FlipCard {
    pinned: bool,
    /// Pointer is over the card and no activation happened since it entered
    preview: bool,
    angle: Spring,
}

impl FlipCard {
    pub fn new() -> Self {
        Self {
            pinned: false,
            preview: false,
            angle: Spring::new(SpringConfig::flip(), 0.0),
        }
    }

    pub fn toggle(&mut self) {
        self.pinned = !self.pinned;
        self.preview = false;
        self.retarget();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.preview = hovered;
        self.retarget();
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Face the card is turning towards
    pub fn face(&self) -> Face {
        if self.pinned || self.preview {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Face currently drawn, which lags `face()` while the flip animates
    pub fn shown_face(&self) -> Face {
        if self.angle.value() > FRAC_PI_2 {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Rotation around the vertical axis in radians
    pub fn angle(&self) -> f32 {
        self.angle.value()
    }

    /// Horizontal scale of the drawn face
    pub fn squash(&self) -> f32 {
        self.angle.value().cos().abs().clamp(0.02, 1.0)
    }

    pub fn tick(&mut self, dt: f32) {
        self.angle.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        !self.angle.is_settled()
    }

    fn retarget(&mut self) {
        let target = match self.face() {
            Face::Front => 0.0,
            Face::Back => PI,
        };
        self.angle.set_target(target);
    }
}

impl Default for FlipCard {
    fn default() -> Self {
        Self::new()
    }
}
