use std::convert::Infallible;

use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{column, container, row},
};

use crate::gui::{
    AppState,
    sections::{MessageOf, Section},
    widgets,
};

/// Wrapped row of skill badges
#[derive(Debug, Default)]
pub struct SkillsSection;

impl Section for SkillsSection {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, MessageOf<Self>> {
        let badges = row(state
            .content
            .skills
            .iter()
            .map(|skill| widgets::skill_badge(skill)))
        .spacing(12)
        .wrap();

        container(
            column![widgets::heading("Skills", widgets::BLUE_500), badges]
                .spacing(24)
                .max_width(1152),
        )
        .padding([48, 32])
        .center_x(Fill)
        .into()
    }

    fn update(&mut self, message: Infallible, _state: &mut AppState) -> Task<MessageOf<Self>> {
        match message {}
    }
}
