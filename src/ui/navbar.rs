// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! The bar shows the brand, one button per screen, and the compose button
//! that opens the post composer dialog.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    /// Whether the compose button is enabled (disabled while the composer
    /// dialog is already open).
    pub can_compose: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    OpenComposer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    OpenComposer,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::OpenComposer => Event::OpenComposer,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(spacing::LG));

    for (screen, key) in [
        (Screen::Feed, "navbar-feed"),
        (Screen::Portfolio, "navbar-portfolio"),
        (Screen::Profile, "navbar-profile"),
        (Screen::Settings, "navbar-settings"),
    ] {
        let mut nav_button =
            button(Text::new(ctx.i18n.tr(key))).on_press(Message::Navigate(screen));

        nav_button = if ctx.active == screen {
            nav_button.style(styles::button::selected)
        } else {
            nav_button.style(styles::button::ghost)
        };

        row = row.push(nav_button);
    }

    row = row.push(Space::new().width(Length::Fill));

    let compose_label = Text::new(ctx.i18n.tr("navbar-compose"));
    let compose_button = if ctx.can_compose {
        button(compose_label)
            .on_press(Message::OpenComposer)
            .style(button::primary)
    } else {
        button(compose_label).style(button::primary)
    };
    row = row.push(compose_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}
