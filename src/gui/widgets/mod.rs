mod background;

pub use background::Blobs;

use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, image, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    catalog::ProjectRecord,
    core::layout::{BADGE_HEIGHT, CARD_HEIGHT},
    profile::TechBadge,
};

pub const ACCENT: Color = Color {
    r: 0.39,
    g: 0.40,
    b: 0.95,
    a: 1.0,
};

const CARD_IMAGE_HEIGHT: f32 = 180.0;

/// `color` with its alpha scaled by `alpha`.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn panel(theme: &Theme) -> Style {
    let style = bordered_box(theme).border(border::rounded(12).width(1));
    let mut color_rgba = theme.palette().background.into_rgba8();
    color_rgba[0] = color_rgba[0].saturating_add(12);
    color_rgba[1] = color_rgba[1].saturating_add(12);
    color_rgba[2] = color_rgba[2].saturating_add(18);
    style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
}

/// A project in the portfolio grid. `demo` is `None` when the project has no
/// live demo, in which case a plain label replaces the button.
pub fn project_card<'a, Message>(
    project: &'a ProjectRecord,
    demo: Option<Message>,
    details: Message,
    alpha: f32,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let demo: Element<'a, Message> = match demo {
        Some(message) => button(text("Live Demo"))
            .on_press(message)
            .style(button::secondary)
            .into(),
        None => text("Demo Not Available")
            .size(14)
            .color(faded(Color::WHITE, 0.5 * alpha))
            .into(),
    };

    container(
        column![
            image(image::Handle::from_path(&project.image))
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT)),
            text(project.title.as_str())
                .size(20)
                .color(faded(Color::WHITE, alpha)),
            text(project.description.as_str())
                .size(14)
                .color(faded(Color::WHITE, 0.7 * alpha)),
            row![demo, button(text("Détails")).on_press(details)]
                .spacing(12)
                .align_y(Center),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .height(Length::Fixed(CARD_HEIGHT))
    .clip(true)
    .style(panel)
    .into()
}

pub fn tech_badge<'a, Message: 'a>(badge: &TechBadge, alpha: f32) -> Element<'a, Message> {
    let monogram: String = badge.language.chars().take(2).collect();
    container(
        column![
            text(monogram).size(32).color(faded(ACCENT, alpha)),
            text(badge.language)
                .size(14)
                .color(faded(Color::WHITE, alpha)),
        ]
        .spacing(8)
        .align_x(Center),
    )
    .center_x(Length::FillPortion(1))
    .center_y(Length::Fixed(BADGE_HEIGHT))
    .style(panel)
    .into()
}

/// Small labelled value, used for the project statistics.
pub fn stat<'a, Message: 'a>(value: usize, label: &'a str) -> Element<'a, Message> {
    container(
        column![text(value.to_string()).size(28).color(ACCENT), text(label).size(13)]
            .spacing(4)
            .align_x(Center),
    )
    .padding(12)
    .center_x(Length::FillPortion(1))
    .style(panel)
    .into()
}

/// Two columns side by side, stacked on narrow viewports.
pub fn layout<'a, Message>(
    info: impl Into<Element<'a, Message>>,
    media: impl Into<Element<'a, Message>>,
    narrow: bool,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let info = container(info.into()).width(Length::FillPortion(1));
    let media = container(media.into()).width(Length::FillPortion(1));
    if narrow {
        column![info, media].spacing(32).into()
    } else {
        row![info, media].spacing(48).into()
    }
}
