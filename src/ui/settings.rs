// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and theme mode selection.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Renders the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-language-label")))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut language_button = button(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));

        language_button = if is_current {
            language_button.style(styles::button::selected)
        } else {
            language_button.style(button::secondary)
        };

        language_column = language_column.push(language_button);
    }

    let mut theme_column = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-theme-label")))
        .spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mut theme_button = button(Text::new(ctx.i18n.tr(mode.i18n_key())))
            .on_press(Message::ThemeSelected(mode));

        theme_button = if ctx.theme_mode == mode {
            theme_button.style(styles::button::selected)
        } else {
            theme_button.style(button::secondary)
        };

        theme_column = theme_column.push(theme_button);
    }

    Column::new()
        .push(title)
        .push(language_column)
        .push(theme_column)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
