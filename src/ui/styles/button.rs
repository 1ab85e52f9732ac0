// SPDX-License-Identifier: MPL-2.0
//! Button style functions.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button::{Status, Style};
use iced::{Border, Color, Theme};

/// Navigation or tab button reflecting the active selection.
pub fn selected(theme: &Theme, status: Status) -> Style {
    let extended = theme.extended_palette();

    let background = match status {
        Status::Pressed => extended.primary.strong.color,
        _ => extended.primary.base.color,
    };

    Style {
        background: Some(background.into()),
        text_color: extended.primary.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless button that only shows feedback on hover/press.
pub fn ghost(theme: &Theme, status: Status) -> Style {
    let extended = theme.extended_palette();

    match status {
        Status::Active => Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        Status::Hovered | Status::Pressed => Style {
            background: Some(extended.background.strong.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        Status::Disabled => Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..extended.background.base.text
            },
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Outlined pill, used by the follow button in its "not following" state.
pub fn pill(theme: &Theme, status: Status) -> Style {
    let extended = theme.extended_palette();

    let background = match status {
        Status::Hovered | Status::Pressed => Some(extended.background.weak.color.into()),
        _ => None,
    };

    Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Filled pill, used by the follow button in its "following" state.
pub fn pill_selected(theme: &Theme, status: Status) -> Style {
    let extended = theme.extended_palette();

    let background = match status {
        Status::Pressed => extended.primary.strong.color,
        _ => extended.primary.base.color,
    };

    Style {
        background: Some(background.into()),
        text_color: extended.primary.base.text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
