use std::{convert::Infallible, time::Instant};

use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{button, column, container, mouse_area, row, text},
};

use crate::{
    content::Project,
    gui::{
        AppState,
        sections::{MessageOf, Section, SectionMessage},
        widgets,
    },
    page::{self, CARD_HEIGHT, CARD_WIDTH, CardView, Face, Gallery},
};

const GAP: f32 = 32.0;

/// Project gallery of flip cards
#[derive(Debug)]
pub struct ProjectsSection {
    gallery: Gallery,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Toggle(usize),
    Hover(usize, bool),
    FocusNext,
    FocusPrevious,
    ActivateFocused,
    ClearFocus,
}

impl ProjectsSection {
    pub fn new(projects: &[Project]) -> Self {
        Self {
            gallery: Gallery::for_projects(projects),
        }
    }
}

fn card<'a>(view: &CardView<'a>) -> Element<'a, MessageOf<ProjectsSection>> {
    let face: Element<'a, _> = match view.shown {
        Face::Front => column![
            text(view.front.title).size(22),
            text(view.front.hint).size(14).color(widgets::GRAY_300),
        ]
        .spacing(8)
        .into(),
        Face::Back => column![
            text(view.back.description).color(widgets::GRAY_300),
            row(view.back.badges.iter().copied().map(widgets::tag_badge))
                .spacing(8)
                .wrap(),
        ]
        .spacing(12)
        .into(),
    };

    let drawn = container(face)
        .padding(24)
        .width(CARD_WIDTH * view.squash)
        .height(CARD_HEIGHT)
        .clip(true)
        .style(widgets::card_face(view.shown, view.focused, view.pinned));

    let index = view.index;
    mouse_area(
        button(container(drawn).center_x(CARD_WIDTH).height(CARD_HEIGHT))
            .padding(0)
            .style(widgets::bare)
            .on_press(SectionMessage::Local(ProjectsMessage::Toggle(index))),
    )
    .on_enter(SectionMessage::Local(ProjectsMessage::Hover(index, true)))
    .on_exit(SectionMessage::Local(ProjectsMessage::Hover(index, false)))
    .into()
}

impl Section for ProjectsSection {
    type Message = ProjectsMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, MessageOf<Self>> {
        let cards = page::cards(&state.content.projects, &self.gallery);
        let columns = page::columns_for_width(state.viewport.width);

        let grid = column(
            cards
                .chunks(columns)
                .map(|chunk| row(chunk.iter().map(card)).spacing(GAP).into()),
        )
        .spacing(GAP);

        container(
            column![
                widgets::heading("Projects", widgets::GREEN_500),
                container(grid).center_x(Fill),
            ]
            .spacing(GAP)
            .max_width(1152),
        )
        .padding([64, 32])
        .center_x(Fill)
        .into()
    }

    fn update(&mut self, message: ProjectsMessage, _state: &mut AppState) -> Task<MessageOf<Self>> {
        match message {
            ProjectsMessage::Toggle(index) => {
                if self.gallery.toggle(index) {
                    tracing::debug!(index, face = ?self.gallery.face(index), "card toggled");
                }
            }
            ProjectsMessage::Hover(index, hovered) => {
                self.gallery.hover(index, hovered);
            }
            ProjectsMessage::FocusNext => self.gallery.focus_next(),
            ProjectsMessage::FocusPrevious => self.gallery.focus_previous(),
            ProjectsMessage::ActivateFocused => {
                if let Some(index) = self.gallery.activate_focused() {
                    tracing::debug!(index, face = ?self.gallery.face(index), "card toggled");
                }
            }
            ProjectsMessage::ClearFocus => self.gallery.clear_focus(),
        }
        Task::none()
    }

    fn tick(&mut self, _now: Instant, dt: f32) {
        self.gallery.tick(dt);
    }

    fn is_animating(&self) -> bool {
        self.gallery.is_animating()
    }
}
