use std::convert::Infallible;

use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{container, text},
};

use crate::{
    content::Footer,
    gui::{
        AppState,
        sections::{MessageOf, Section},
        widgets,
    },
};

#[derive(Debug)]
pub struct FooterSection {
    text: String,
}

impl FooterSection {
    pub fn new(footer: &Footer) -> Self {
        Self {
            text: footer.text(),
        }
    }
}

impl Section for FooterSection {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, MessageOf<Self>> {
        container(text(&self.text).size(14).color(widgets::GRAY_300))
            .padding([24, 0])
            .center_x(Fill)
            .into()
    }

    fn update(&mut self, message: Infallible, _state: &mut AppState) -> Task<MessageOf<Self>> {
        match message {}
    }
}
