use std::time::Instant;

use iced::{
    Element, Event, Subscription, Task, Theme, event, keyboard, padding,
    widget::{column, container, scrollable},
    window,
};

use crate::{
    config::SiteConfig,
    gui::{
        AppState, Message,
        sections::{
            self, Section, SectionMessage,
            footer::FooterSection,
            hero::{self, HeroSection},
            projects::{ProjectsMessage, ProjectsSection},
            skills::SkillsSection,
        },
        widgets,
    },
    links,
};

pub struct PortfolioApp {
    state: AppState,
    hero: HeroSection,
    projects: ProjectsSection,
    skills: SkillsSection,
    footer: FooterSection,
}

impl PortfolioApp {
    pub fn new(config: SiteConfig) -> Self {
        let now = Instant::now();
        let SiteConfig {
            content,
            scene,
            site_root,
        } = config;

        tracing::info!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            background = scene.enabled,
            "starting portfolio"
        );

        Self {
            hero: HeroSection::new(&scene, content.hero.bounce, now),
            projects: ProjectsSection::new(&content.projects),
            skills: SkillsSection,
            footer: FooterSection::new(&content.footer),
            state: AppState::new(content, site_root, now),
        }
    }

    pub fn title(&self) -> String {
        format!("{} | Portfolio", self.state.content.hero.name)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => {
                let dt = self.state.advance(now);
                self.hero.tick(now, dt);
                self.projects.tick(now, dt);
                Task::none()
            }
            Message::Resized(size) => {
                self.state.viewport = size;
                Task::none()
            }
            Message::Hero(SectionMessage::Local(message)) => self
                .hero
                .update(message, &mut self.state)
                .map(Message::Hero),
            Message::Hero(SectionMessage::Parent(hero::ParentMessage::ActivateLink(index))) => {
                self.activate_link(index)
            }
            Message::Projects(SectionMessage::Local(message)) => self
                .projects
                .update(message, &mut self.state)
                .map(Message::Projects),
            Message::Projects(SectionMessage::Parent(never)) => match never {},
            Message::LinkOpened(Ok(opened)) => {
                tracing::debug!(?opened, "link handled");
                Task::none()
            }
            Message::LinkOpened(Err(err)) => {
                tracing::warn!(%err, "failed to follow link");
                Task::none()
            }
            Message::CloseRequested(id) => {
                if self.hero.unmount() {
                    tracing::debug!("background unmounted");
                }
                tracing::info!(?id, "closing");
                iced::exit()
            }
        }
    }

    fn activate_link(&self, index: usize) -> Task<Message> {
        let Some(link) = self.state.content.links.get(index) else {
            return Task::none();
        };
        tracing::info!(label = %link.label, "activating link");

        let target = link.target.clone();
        let site_root = self.state.site_root.clone();
        // The opener and the file copy both block
        Task::perform(
            async move {
                match tokio::task::spawn_blocking(move || links::activate(&target, &site_root)).await
                {
                    Ok(result) => result.map_err(|err| err.to_string()),
                    Err(err) => Err(err.to_string()),
                }
            },
            Message::LinkOpened,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;
        let page = column![
            self.hero.view(state).map(Message::Hero),
            entering(
                state.entrance_offset(1),
                self.projects.view(state).map(Message::Projects)
            ),
            entering(
                state.entrance_offset(2),
                self.skills.view(state).map(sections::unreachable)
            ),
            entering(
                state.entrance_offset(3),
                self.footer.view(state).map(sections::unreachable)
            ),
        ];

        container(scrollable(page))
            .style(widgets::page)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(map_event);
        if self.hero.is_animating() || self.projects.is_animating() || self.state.is_entering() {
            Subscription::batch([events, window::frames().map(Message::Frame)])
        } else {
            events
        }
    }
}

/// Push a section down by what is left of its slide-in
fn entering(offset: f32, section: Element<'_, Message>) -> Element<'_, Message> {
    container(section).padding(padding::top(offset)).into()
}

fn map_event(event: Event, status: event::Status, id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested(id)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            use keyboard::{Key, key::Named};

            let command = match key.as_ref() {
                Key::Named(Named::Tab) if modifiers.shift() => ProjectsMessage::FocusPrevious,
                Key::Named(Named::Tab) => ProjectsMessage::FocusNext,
                Key::Named(Named::Enter | Named::Space) | Key::Character(" ") => {
                    ProjectsMessage::ActivateFocused
                }
                Key::Named(Named::Escape) => ProjectsMessage::ClearFocus,
                _ => return None,
            };
            Some(Message::Projects(SectionMessage::Local(command)))
        }
        _ => None,
    }
}
