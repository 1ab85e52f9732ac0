// SPDX-License-Identifier: MPL-2.0
//! Badge rendering a post's bullish/bearish classification.

use crate::domain::post::Sentiment;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Container, Row, Text};
use iced::{alignment, Color, Element, Theme};

use crate::ui::icons;

fn accent(sentiment: Sentiment, theme: &Theme) -> Color {
    match sentiment {
        Sentiment::Bullish => palette::BULLISH_500,
        Sentiment::Bearish => palette::BEARISH_500,
        Sentiment::Neutral => theme.extended_palette().background.strong.color,
    }
}

/// Renders the sentiment badge for a post.
pub fn view<'a, Message: 'a>(sentiment: Sentiment, i18n: &I18n) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(sentiment.i18n_key())).size(typography::CAPTION);

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);

    row = match sentiment {
        Sentiment::Bullish => row.push(icons::arrow_up(typography::CAPTION)),
        Sentiment::Bearish => row.push(icons::arrow_down(typography::CAPTION)),
        Sentiment::Neutral => row,
    };
    row = row.push(label);

    Container::new(row)
        .padding([spacing::XXS, spacing::XS])
        .style(move |theme: &Theme| badge_style(theme, accent(sentiment, theme)))
        .into()
}

fn badge_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.15,
                ..accent
            }
            .into(),
        ),
        border: iced::Border {
            color: accent,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        text_color: Some(theme.extended_palette().background.base.text),
        ..Default::default()
    }
}
