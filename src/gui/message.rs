use std::time::Instant;

use iced::{Size, window};

use crate::{
    gui::sections::{MessageOf, hero::HeroSection, projects::ProjectsSection},
    links::Opened,
};

#[derive(Debug, Clone)]
pub enum Message {
    Hero(MessageOf<HeroSection>),
    Projects(MessageOf<ProjectsSection>),
    Frame(Instant),
    Resized(Size),
    LinkOpened(Result<Opened, String>),
    CloseRequested(window::Id),
}
