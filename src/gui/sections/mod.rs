pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use std::{convert::Infallible, time::Instant};

use iced::{Element, Task};

use crate::gui::AppState;

/// A section either handles a message itself or hands it up to the app
#[derive(Debug, Clone)]
pub enum SectionMessage<M, P> {
    Local(M),
    Parent(P),
}

pub type MessageOf<S> = SectionMessage<<S as Section>::Message, <S as Section>::ParentMessage>;

pub trait Section: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, MessageOf<Self>>;

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<MessageOf<Self>>;

    /// Advance animations by `dt` seconds
    fn tick(&mut self, _now: Instant, _dt: f32) {}

    /// Whether the section needs frame ticks
    fn is_animating(&self) -> bool {
        false
    }
}

/// Message mapping for sections that never emit anything
pub fn unreachable<T>(message: SectionMessage<Infallible, Infallible>) -> T {
    match message {
        SectionMessage::Local(never) | SectionMessage::Parent(never) => match never {},
    }
}
