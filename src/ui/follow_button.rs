// SPDX-License-Identifier: MPL-2.0
//! Follow/unfollow toggle.
//!
//! The button supports two ownership modes, chosen explicitly at
//! construction rather than inferred from whatever the parent happens to
//! pass:
//!
//! - **Controlled**: the parent owns the boolean and supplies the current
//!   value on every update/view call; the component only reports the value
//!   a toggle would produce.
//! - **Self-managed**: the component owns its own boolean.
//!
//! Either way, every toggle emits exactly one [`Event::Toggled`] carrying
//! the new value.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Controlled,
    SelfManaged { following: bool },
}

/// Follow button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    mode: Mode,
}

impl State {
    /// A button whose value is owned by the parent.
    #[must_use]
    pub fn controlled() -> Self {
        Self {
            mode: Mode::Controlled,
        }
    }

    /// A button that owns its own follow state.
    #[must_use]
    pub fn self_managed(initial: bool) -> Self {
        Self {
            mode: Mode::SelfManaged { following: initial },
        }
    }

    /// The value currently displayed, given the parent-supplied value for
    /// controlled mode. A controlled button with no external value reads as
    /// not-following.
    #[must_use]
    pub fn is_following(&self, external: Option<bool>) -> bool {
        match self.mode {
            Mode::Controlled => external.unwrap_or(false),
            Mode::SelfManaged { following } => following,
        }
    }
}

/// Messages emitted by the follow button.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggled,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The toggle happened; carries the new value. In controlled mode the
    /// parent is responsible for persisting it.
    Toggled(bool),
}

/// Processes a follow-button message.
pub fn update(state: &mut State, message: Message, external: Option<bool>) -> Event {
    match message {
        Message::Toggled => {
            let next = !state.is_following(external);
            if let Mode::SelfManaged { following } = &mut state.mode {
                *following = next;
            }
            Event::Toggled(next)
        }
    }
}

/// Context required to render the follow button.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Parent-owned value for controlled mode; ignored when self-managed.
    pub external: Option<bool>,
}

/// Renders the follow button.
pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let following = state.is_following(ctx.external);

    let label = if following {
        ctx.i18n.tr("follow-button-following")
    } else {
        ctx.i18n.tr("follow-button-follow")
    };

    let style = if following {
        styles::button::pill_selected
    } else {
        styles::button::pill
    };

    button(Text::new(label))
        .on_press(Message::Toggled)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_managed_toggle_twice_restores_original() {
        let mut state = State::self_managed(false);

        let first = update(&mut state, Message::Toggled, None);
        assert_eq!(first, Event::Toggled(true));
        assert!(state.is_following(None));

        let second = update(&mut state, Message::Toggled, None);
        assert_eq!(second, Event::Toggled(false));
        assert!(!state.is_following(None));
    }

    #[test]
    fn controlled_mode_reflects_external_value() {
        let state = State::controlled();
        assert!(!state.is_following(None));
        assert!(state.is_following(Some(true)));
        assert!(!state.is_following(Some(false)));
    }

    #[test]
    fn controlled_toggle_reports_but_does_not_store() {
        let mut state = State::controlled();

        let event = update(&mut state, Message::Toggled, Some(true));
        assert_eq!(event, Event::Toggled(false));

        // The component itself stays value-less; the parent owns the flip.
        assert!(state.is_following(Some(true)));
        assert!(!state.is_following(Some(false)));
    }

    #[test]
    fn controlled_toggle_from_unset_external_follows() {
        let mut state = State::controlled();
        let event = update(&mut state, Message::Toggled, None);
        assert_eq!(event, Event::Toggled(true));
    }

    #[test]
    fn view_renders_in_both_modes() {
        let i18n = I18n::default();
        let controlled = State::controlled();
        let _ = view(
            &controlled,
            ViewContext {
                i18n: &i18n,
                external: Some(true),
            },
        );

        let self_managed = State::self_managed(false);
        let _ = view(
            &self_managed,
            ViewContext {
                i18n: &i18n,
                external: None,
            },
        );
    }
}
