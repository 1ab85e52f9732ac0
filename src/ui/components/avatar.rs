// SPDX-License-Identifier: MPL-2.0
//! Circular initials placeholder standing in for profile pictures.

use crate::ui::design_tokens::radius;
use iced::widget::{container, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders a round avatar with the given initials at the given diameter.
pub fn view<'a, Message: 'a>(initials: String, diameter: f32) -> Element<'a, Message> {
    let label = Text::new(initials).size(diameter * 0.4);

    Container::new(label)
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(avatar_style)
        .into()
}

fn avatar_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(extended.primary.weak.color.into()),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(extended.primary.weak.text),
        ..Default::default()
    }
}
