// SPDX-License-Identifier: MPL-2.0
//! Container style functions.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container::Style;
use iced::{Border, Theme};

/// Card surface used for posts, holdings, and profile headers.
pub fn card(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Raised card for modal dialogs.
pub fn modal_card(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.base.color.into()),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Top bar surface.
pub fn toolbar(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.weak.color.into()),
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Placeholder block standing in for post media previews.
pub fn media_placeholder(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.strong.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}
