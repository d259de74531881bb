use std::time::Instant;

use iced::{
    Alignment::Center,
    Element,
    Length::Fill,
    Task, padding,
    widget::{Column, button, column, container, row, stack, text},
};

use crate::{
    gui::{
        AppState,
        sections::{MessageOf, Section, SectionMessage},
        starfield, widgets,
    },
    motion,
    scene::{OrbitInput, SceneBackground, SceneConfig},
};

const TITLE_SIZE: f32 = 48.0;

/// Full-viewport hero: the star field with the identity block on top
#[derive(Debug)]
pub struct HeroSection {
    background: Option<SceneBackground>,
    bounce: bool,
    started: Instant,
}

#[derive(Debug, Clone)]
pub enum HeroMessage {
    Orbit(OrbitInput),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    ActivateLink(usize),
}

impl HeroSection {
    /// Builds the section and mounts its background, unless disabled
    pub fn new(scene: &SceneConfig, bounce: bool, now: Instant) -> Self {
        let background = scene.enabled.then(|| {
            let mut background = SceneBackground::new(scene);
            background.mount(now);
            background
        });
        Self {
            background,
            bounce,
            started: now,
        }
    }

    /// Stops the background's render loop. Returns `false` when nothing
    /// was rendering.
    pub fn unmount(&mut self) -> bool {
        self.background
            .as_mut()
            .is_some_and(SceneBackground::unmount)
    }

    fn orbit(input: OrbitInput) -> MessageOf<Self> {
        SectionMessage::Local(HeroMessage::Orbit(input))
    }
}

impl Section for HeroSection {
    type Message = HeroMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, MessageOf<Self>> {
        let hero = &state.content.hero;

        let lift = if self.bounce {
            let t = state.now.saturating_duration_since(self.started).as_secs_f32();
            (0.25 + motion::bounce_offset(t)) * TITLE_SIZE
        } else {
            0.25 * TITLE_SIZE
        };
        let title = container(text(hero.title()).size(TITLE_SIZE).center())
            .padding(padding::top(lift))
            .height(TITLE_SIZE * 1.75)
            .center_x(Fill);

        let links = row(state
            .content
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                button(text(&link.label))
                    .padding([10, 20])
                    .style(widgets::link_button(&link.target))
                    .on_press(SectionMessage::Parent(ParentMessage::ActivateLink(index)))
                    .into()
            }))
        .spacing(16)
        .wrap();

        let identity = container(
            column![
                title,
                text(&hero.tagline).size(22).color(widgets::GRAY_300).center(),
                container(links).center_x(Fill),
            ]
            .spacing(20)
            .align_x(Center),
        )
        .padding(32)
        .max_width(760)
        .style(widgets::glass);

        let overlay = container(identity)
            .padding(padding::top(state.entrance_offset(0)))
            .center_x(Fill)
            .center_y(Fill);

        let backdrop: Element<'a, MessageOf<Self>> = match &self.background {
            Some(background) => starfield::view(background, Self::orbit).into(),
            None => container(Column::new())
                .width(Fill)
                .height(Fill)
                .style(widgets::night_sky)
                .into(),
        };

        container(stack![backdrop, overlay])
            .width(Fill)
            .height(state.viewport.height)
            .into()
    }

    fn update(&mut self, message: HeroMessage, _state: &mut AppState) -> Task<MessageOf<Self>> {
        match message {
            HeroMessage::Orbit(input) => {
                if let Some(background) = &mut self.background {
                    background.orbit(input);
                }
                Task::none()
            }
        }
    }

    fn tick(&mut self, now: Instant, _dt: f32) {
        if let Some(background) = &mut self.background {
            background.frame(now);
        }
    }

    fn is_animating(&self) -> bool {
        self.bounce
            || self
                .background
                .as_ref()
                .is_some_and(SceneBackground::is_rendering)
    }
}
