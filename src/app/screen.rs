// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Feed,
    Portfolio,
    Profile,
    Settings,
}

impl Screen {
    /// Returns the i18n label key used in the window title.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Feed => "screen-feed",
            Screen::Portfolio => "screen-portfolio",
            Screen::Profile => "screen-profile",
            Screen::Settings => "screen-settings",
        }
    }
}
