// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (feed, profile, portfolio,
//! composer, localization) and translates messages into side effects like
//! config persistence or the simulated submit. This file intentionally
//! keeps policy decisions (window sizing, startup configuration, locale
//! switching) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::data;
use crate::i18n::fluent::I18n;
use crate::ui::composer;
use crate::ui::feed;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: config::Config,
    feed: feed::State,
    profile: profile::State,
    holdings: Vec<crate::domain::portfolio::Holding>,
    topics: Vec<crate::data::topics::Topic>,
    /// Composer dialog state; `None` while the dialog is closed.
    composer: Option<composer::State>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("composer_open", &self.composer.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let featured = data::profiles::featured_profile();
        let featured_id = featured.id;

        Self {
            i18n: I18n::default(),
            screen: Screen::Feed,
            config: config::Config::default(),
            feed: feed::State::new(
                feed::FeedTab::default(),
                data::posts::feed_posts(),
                data::profiles::seed_follows(),
            ),
            profile: profile::State::new(
                featured,
                data::posts::timeline_posts(featured_id),
                data::posts::replies(featured_id),
                data::posts::media_posts(featured_id),
                data::posts::liked_posts(featured_id),
            ),
            holdings: data::portfolios::holdings(),
            topics: data::topics::trending(),
            composer: None,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from configuration and flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        if let Some(tab) = config.feed.default_tab {
            app.feed = feed::State::new(
                tab,
                data::posts::feed_posts(),
                data::profiles::seed_follows(),
            );
        }

        app.config = config;

        // Surface config loading issues as a toast
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Feed => app_name,
            screen => {
                let screen_name = self.i18n.tr(screen.i18n_key());
                format!("{screen_name} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            feed: &mut self.feed,
            profile: &mut self.profile,
            composer: &mut self.composer,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Feed(feed_message) => update::handle_feed_message(&mut ctx, feed_message),
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::Composer(composer_message) => {
                update::handle_composer_message(&mut ctx, composer_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::AttachmentsPicked { images, rejected } => {
                update::handle_attachments_picked(&mut ctx, images, rejected)
            }
            Message::AttachmentPickingCancelled => {
                if let Some(state) = self.composer.as_mut() {
                    state.file_picking_cancelled();
                }
                Task::none()
            }
            Message::SubmitDelayElapsed => update::handle_submit_delay_elapsed(&mut ctx),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Tick the notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                // Teardown path: the composer (if open) releases its
                // attachment resources before the window goes away.
                if let Some(mut state) = self.composer.take() {
                    state.release();
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            feed: &self.feed,
            profile: &self.profile,
            holdings: &self.holdings,
            topics: &self.topics,
            composer: self.composer.as_ref(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;

    #[test]
    fn default_app_starts_on_feed_with_composer_closed() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Feed);
        assert!(app.composer.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_is_app_name_on_feed() {
        let app = App::default();
        let title = app.title();
        assert_eq!(title, app.i18n.tr("window-title"));
    }

    #[test]
    fn title_includes_screen_name_elsewhere() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            Screen::Portfolio,
        )));
        let title = app.title();
        assert!(title.contains(&app.i18n.tr("window-title")));
        assert!(title.contains(&app.i18n.tr("screen-portfolio")));
    }

    #[test]
    fn navbar_opens_composer_once() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        assert!(app.composer.is_some());

        // Re-requesting keeps the existing dialog (and its draft) intact.
        app.composer
            .as_mut()
            .unwrap()
            .set_text("draft in progress");
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        assert_eq!(
            app.composer.as_ref().unwrap().draft().text(),
            "draft in progress"
        );
    }

    #[test]
    fn submit_flow_prepends_post_and_clears_composer() {
        let mut app = App::default();
        let posts_before = app.feed.posts().len();

        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        app.composer.as_mut().unwrap().set_text("hello");

        let _ = app.update(Message::Composer(composer::Message::SubmitRequested));
        assert!(app.composer.as_ref().unwrap().is_submitting());

        let _ = app.update(Message::SubmitDelayElapsed);

        assert!(app.composer.is_none());
        assert_eq!(app.feed.posts().len(), posts_before + 1);

        let newest = app.feed.ordered_posts()[0].clone();
        assert_eq!(newest.body, "hello");
        assert_eq!(
            newest.author.id,
            crate::data::profiles::viewer_profile().id
        );

        // The success toast is showing
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn empty_submit_is_rejected_with_a_toast_and_draft_kept() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        let _ = app.update(Message::Composer(composer::Message::SubmitRequested));

        assert!(app.composer.is_some());
        assert!(!app.composer.as_ref().unwrap().is_submitting());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn attachments_picked_over_capacity_raises_notice() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));

        let images: Vec<composer::PickedImage> = (0..5)
            .map(|i| composer::PickedImage {
                file_name: format!("img-{i}.png"),
                bytes: vec![0u8; 8],
                width: 2,
                height: 2,
            })
            .collect();

        let _ = app.update(Message::AttachmentsPicked {
            images,
            rejected: 0,
        });

        let state = app.composer.as_ref().unwrap();
        assert_eq!(state.draft().attachment_count(), 4);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn rejected_files_raise_unsupported_notice() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));

        let _ = app.update(Message::AttachmentsPicked {
            images: Vec::new(),
            rejected: 2,
        });

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn dismissing_composer_releases_attachment_resources() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));

        let _ = app.update(Message::AttachmentsPicked {
            images: vec![composer::PickedImage {
                file_name: "a.png".to_string(),
                bytes: vec![0u8; 8],
                width: 2,
                height: 2,
            }],
            rejected: 0,
        });

        let registry = app.composer.as_ref().unwrap().registry().clone();
        assert_eq!(registry.live_count(), 1);

        let _ = app.update(Message::Composer(composer::Message::CancelRequested));
        assert!(app.composer.is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn window_close_releases_composer_resources() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        let _ = app.update(Message::AttachmentsPicked {
            images: vec![composer::PickedImage {
                file_name: "a.png".to_string(),
                bytes: vec![0u8; 8],
                width: 2,
                height: 2,
            }],
            rejected: 0,
        });

        let registry = app.composer.as_ref().unwrap().registry().clone();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(app.composer.is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn follow_toggle_from_feed_raises_toast() {
        let mut app = App::default();

        let _ = app.update(Message::Feed(feed::Message::FollowButton(
            crate::data::profiles::LEO_ID,
            crate::ui::follow_button::Message::Toggled,
        )));

        assert!(app.feed.is_following(crate::data::profiles::LEO_ID));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    fn config_env_lock() -> &'static std::sync::Mutex<()> {
        static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
        LOCK.get_or_init(|| std::sync::Mutex::new(()))
    }

    /// Runs `test` with the config directory pointed at a temp dir, so
    /// settings tests never touch the real preferences file.
    fn with_temp_config_dir<F: FnOnce()>(test: F) {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test();

        match previous {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
    }

    #[test]
    fn language_selection_switches_locale() {
        with_temp_config_dir(|| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(
                crate::ui::settings::Message::LanguageSelected("fr".parse().unwrap()),
            ));
            assert_eq!(app.i18n.current_locale().to_string(), "fr");
            assert_eq!(app.config.general.language.as_deref(), Some("fr"));
        });
    }

    #[test]
    fn theme_selection_updates_mode() {
        with_temp_config_dir(|| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(
                crate::ui::settings::Message::ThemeSelected(ThemeMode::Dark),
            ));
            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert!(matches!(app.theme(), Theme::Dark));
        });
    }

    #[test]
    fn view_renders_on_every_screen_with_and_without_composer() {
        let mut app = App::default();

        for screen in [
            Screen::Feed,
            Screen::Portfolio,
            Screen::Profile,
            Screen::Settings,
        ] {
            let _ = app.update(Message::Navbar(navbar::Message::Navigate(screen)));
            let _element = app.view();
        }

        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        let _element = app.view();
    }
}
