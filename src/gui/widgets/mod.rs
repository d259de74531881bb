use iced::{
    Background, Border, Color, Degrees, Element, Gradient, Shadow, Theme, Vector, border,
    gradient,
    widget::{Column, button, column, container, hover, text},
};
use iced_widget::container::bordered_box;

use crate::{content::LinkTarget, page::Face};

pub const NIGHT: Color = Color::from_rgb8(0x03, 0x07, 0x12);
pub const GRAY_300: Color = Color::from_rgb8(0xd1, 0xd5, 0xdb);
pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
pub const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);
pub const BLUE_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
pub const BLUE_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const GREEN_500: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
pub const GREEN_600: Color = Color::from_rgb8(0x16, 0xa3, 0x4a);
pub const GREEN_700: Color = Color::from_rgb8(0x15, 0x80, 0x3d);
pub const PURPLE_500: Color = Color::from_rgb8(0xa8, 0x55, 0xf7);
pub const PURPLE_600: Color = Color::from_rgb8(0x93, 0x33, 0xea);

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: color.r + (1.0 - color.r) * amount,
        g: color.g + (1.0 - color.g) * amount,
        b: color.b + (1.0 - color.b) * amount,
        a: color.a,
    }
}

fn linear(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(135.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

fn drop_shadow(blur_radius: f32) -> Shadow {
    Shadow {
        color: Color {
            a: 0.45,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 6.0),
        blur_radius,
    }
}

/// Translucent panel laid over the starfield
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style::default()
        .background(Color {
            a: 0.35,
            ..Color::BLACK
        })
        .border(border::rounded(12))
        .color(Color::WHITE)
}

pub fn night_sky(_theme: &Theme) -> container::Style {
    container::Style::default().background(NIGHT)
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style::default()
        .background(GRAY_900)
        .color(Color::WHITE)
}

/// Hero link colours: mail in blue, web in dark gray, downloads in green
pub fn link_button(target: &LinkTarget) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = match target {
        LinkTarget::Email(_) => BLUE_600,
        LinkTarget::External(_) => GRAY_700,
        LinkTarget::Download(_) => GREEN_600,
    };
    move |_theme, status| {
        let mut style = button::Style::default();
        style.text_color = Color::WHITE;
        style.border = border::rounded(6);
        style.background = Some(match status {
            button::Status::Hovered | button::Status::Pressed => lighten(base, 0.15).into(),
            _ => base.into(),
        });
        if status == button::Status::Hovered {
            style.shadow = drop_shadow(10.0);
        }
        style
    }
}

/// Invisible button around a flip card
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    let mut style = button::Style::default();
    style.text_color = Color::WHITE;
    style
}

pub fn card_face(face: Face, focused: bool, pinned: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let background = match face {
            Face::Front => linear(GRAY_800, GRAY_700),
            Face::Back => GRAY_900.into(),
        };
        let border = if focused {
            border::rounded(12).color(GREEN_500).width(2)
        } else if pinned {
            border::rounded(12).color(BLUE_500).width(2)
        } else {
            border::rounded(12).color(GRAY_700).width(1)
        };
        let mut style = bordered_box(theme)
            .background(background)
            .border(border)
            .color(Color::WHITE);
        style.shadow = drop_shadow(16.0);
        style
    }
}

fn pill(background: Background) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        container::Style::default()
            .background(background)
            .border(Border {
                radius: 999.0.into(),
                ..Border::default()
            })
            .color(Color::WHITE)
    }
}

/// Technology tag on the back of a project card
pub fn tag_badge<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 10])
        .style(pill(GREEN_700.into()))
        .into()
}

/// Skill badge that brightens while hovered
pub fn skill_badge<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    let badge = |background: Background| {
        container(text(label).size(15))
            .padding([8, 16])
            .style(pill(background))
    };
    hover(
        badge(linear(BLUE_500, PURPLE_500)),
        badge(linear(lighten(BLUE_500, 0.2), lighten(PURPLE_600, 0.2))),
    )
}

/// Section title with a short accent rule underneath
pub fn heading<'a, Message: 'a>(label: &'a str, accent: Color) -> Element<'a, Message> {
    column![
        text(label).size(30),
        container(Column::new())
            .width(64.0)
            .height(3.0)
            .style(move |_theme: &Theme| container::Style::default().background(accent)),
    ]
    .spacing(6)
    .into()
}
