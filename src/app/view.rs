// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, layers the composer dialog over it
//! when open, and stacks the toast overlay on top.

use super::{Message, Screen};
use crate::data::topics::Topic;
use crate::domain::portfolio::Holding;
use crate::i18n::fluent::I18n;
use crate::ui::composer;
use crate::ui::feed;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager as NotificationManager, Toast};
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::profile;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{center, mouse_area, opaque, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub feed: &'a feed::State,
    pub profile: &'a profile::State,
    pub holdings: &'a [Holding],
    pub topics: &'a [Topic],
    pub composer: Option<&'a composer::State>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a NotificationManager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        can_compose: ctx.composer.is_none(),
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Feed => ctx.feed.view(ctx.i18n, ctx.topics).map(Message::Feed),
        Screen::Portfolio => portfolio::view(PortfolioViewContext {
            i18n: ctx.i18n,
            holdings: ctx.holdings,
        }),
        Screen::Profile => ctx.profile.view(ctx.i18n).map(Message::Profile),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into();

    let with_dialog: Element<'_, Message> = match ctx.composer {
        Some(composer_state) => modal(
            base,
            composer_state.view(ctx.i18n).map(Message::Composer),
            Message::Composer(composer::Message::CancelRequested),
        ),
        None => base,
    };

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::with_children(vec![with_dialog, toast_overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Layers `dialog` centered over `base`; clicking the backdrop emits
/// `on_blur`.
fn modal<'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    let backdrop = opaque(mouse_area(center(opaque(dialog))).on_press(on_blur));

    Stack::with_children(vec![base, backdrop])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
