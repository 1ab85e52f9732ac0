// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::composer::{self, PickedImage};
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Feed(feed::Message),
    Profile(profile::Message),
    Composer(composer::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the attachment file dialog: decoded images plus the
    /// number of selected files that failed to decode.
    AttachmentsPicked {
        images: Vec<PickedImage>,
        rejected: usize,
    },
    /// The attachment file dialog was closed without a selection.
    AttachmentPickingCancelled,
    /// The simulated submit latency elapsed.
    SubmitDelayElapsed,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `BULLBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
