//! Toolkit-independent page model.
//!
//! [`Gallery`] holds the per-card flip state and keyboard focus;
//! [`PageModel`] is what the GUI draws, built from the site content and
//! the gallery state.

pub mod flip;

use crate::content::{ActionLink, Project, SiteContent};

pub use flip::{Face, FlipCard};

pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 200.0;
pub const FLIP_HINT: &str = "Click to flip";

/// Project grid columns for a viewport width, using the small/large
/// breakpoints at 640 and 1024 logical pixels.
pub fn columns_for_width(width: f32) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

/// Flip state for every card in the project gallery
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    cards: Vec<FlipCard>,
    focused: Option<usize>,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            cards: vec![FlipCard::new(); len],
            focused: None,
        }
    }

    pub fn for_projects(projects: &[Project]) -> Self {
        Self::new(projects.len())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&FlipCard> {
        self.cards.get(index)
    }

    pub fn face(&self, index: usize) -> Option<Face> {
        self.card(index).map(FlipCard::face)
    }

    /// Toggle one card. Returns `false` for an unknown index.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.toggle();
                true
            }
            None => false,
        }
    }

    pub fn hover(&mut self, index: usize, hovered: bool) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.set_hovered(hovered);
                true
            }
            None => false,
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focus_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % self.cards.len(),
            None => 0,
        });
    }

    pub fn focus_previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        self.focused = Some(match self.focused {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Toggle the focused card, if any
    pub fn activate_focused(&mut self) -> Option<usize> {
        let index = self.focused?;
        self.toggle(index).then_some(index)
    }

    pub fn tick(&mut self, dt: f32) {
        for card in &mut self.cards {
            card.tick(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(FlipCard::is_animating)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrontFace<'a> {
    pub title: &'a str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackFace<'a> {
    pub description: &'a str,
    pub badges: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub index: usize,
    pub front: FrontFace<'a>,
    pub back: BackFace<'a>,
    pub face: Face,
    pub shown: Face,
    pub squash: f32,
    pub focused: bool,
    /// Held on its back by an activation rather than by hover
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel<'a> {
    pub title: String,
    pub tagline: &'a str,
    pub links: &'a [ActionLink],
    pub cards: Vec<CardView<'a>>,
    pub skills: Vec<&'a str>,
    pub footer: String,
}

/// Card views for every project, in content order
pub fn cards<'a>(projects: &'a [Project], gallery: &Gallery) -> Vec<CardView<'a>> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let card = gallery.card(index).cloned().unwrap_or_default();
            CardView {
                index,
                front: FrontFace {
                    title: &project.title,
                    hint: FLIP_HINT,
                },
                back: BackFace {
                    description: &project.description,
                    badges: project.tags.iter().map(String::as_str).collect(),
                },
                face: card.face(),
                shown: card.shown_face(),
                squash: card.squash(),
                focused: gallery.focused() == Some(index),
                pinned: card.is_pinned(),
            }
        })
        .collect()
}

impl<'a> PageModel<'a> {
    pub fn build(content: &'a SiteContent, gallery: &Gallery) -> Self {
        Self {
            title: content.hero.title(),
            tagline: &content.hero.tagline,
            links: &content.links,
            cards: cards(&content.projects, gallery),
            skills: content.skills.iter().map(String::as_str).collect(),
            footer: content.footer.text(),
        }
    }
}
