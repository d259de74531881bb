//! Canvas program drawing the hero's star field.
//!
//! Dragging with the primary button or a finger orbits the camera. Wheel
//! input is forwarded to the controls but never captured, so the page
//! scrolls over the background and the camera distance stays fixed.

use glam::Vec2;
use iced::{
    Color, Point, Rectangle, Renderer, Theme, mouse, touch,
    widget::canvas::{self, Action, Event, Frame, Geometry, Path, Program},
};

use crate::{
    gui::widgets::NIGHT,
    scene::{OrbitInput, SceneBackground},
};

/// Wheel pixels per line
const PIXELS_PER_LINE: f32 = 40.0;

pub struct Starfield<'a, Message> {
    background: &'a SceneBackground,
    on_orbit: fn(OrbitInput) -> Message,
}

impl<'a, Message> Starfield<'a, Message> {
    pub fn new(background: &'a SceneBackground, on_orbit: fn(OrbitInput) -> Message) -> Self {
        Self {
            background,
            on_orbit,
        }
    }

    fn drag_to(&self, state: &mut DragState, position: Point) -> Option<Action<Message>> {
        let last = state.last.replace(position)?;
        let input = OrbitInput::Drag {
            dx: position.x - last.x,
            dy: position.y - last.y,
        };
        Some(Action::publish((self.on_orbit)(input)).and_capture())
    }
}

#[derive(Debug, Default)]
pub struct DragState {
    last: Option<Point>,
}

impl<Message> Program<Message> for Starfield<'_, Message> {
    type State = DragState;

    fn update(
        &self,
        state: &mut DragState,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                state.last = Some(cursor.position_over(bounds)?);
                Some(Action::capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.last.is_some() => {
                self.drag_to(state, *position)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.last.take().map(|_| Action::capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                Some(Action::publish((self.on_orbit)(OrbitInput::Scroll(lines))))
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                state.last = Some(*position);
                Some(Action::capture())
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) if state.last.is_some() => {
                self.drag_to(state, *position)
            }
            Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
                state.last = None;
                None
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &DragState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), NIGHT);

        for star in self.background.project(Vec2::new(bounds.width, bounds.height)) {
            let color = Color::from_rgba(star.color.x, star.color.y, star.color.z, star.alpha);
            frame.fill(&Path::circle(Point::new(star.x, star.y), star.radius), color);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &DragState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.last.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Canvas element for `background`
pub fn view<'a, Message: 'a>(
    background: &'a SceneBackground,
    on_orbit: fn(OrbitInput) -> Message,
) -> canvas::Canvas<Starfield<'a, Message>, Message> {
    canvas::Canvas::new(Starfield::new(background, on_orbit))
        .width(iced::Length::Fill)
        .height(iced::Length::Fill)
}
