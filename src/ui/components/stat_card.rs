// SPDX-License-Identifier: MPL-2.0
//! Small labeled figure card used on the portfolio dashboard.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Text};
use iced::{Color, Element, Length, Theme};

/// Renders a stat card with a caption label, a large figure, and an
/// optional accent color for the figure (e.g. green for gains).
pub fn view<'a, Message: 'a>(
    label: String,
    figure: String,
    figure_color: Option<Color>,
) -> Element<'a, Message> {
    let label_text = Text::new(label).size(typography::CAPTION);

    let mut figure_text = Text::new(figure).size(typography::TITLE_MD);
    if let Some(color) = figure_color {
        figure_text = figure_text.style(move |_theme: &Theme| text::Style { color: Some(color) });
    }

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(label_text)
            .push(figure_text),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
