// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to. Side effects (config persistence, the file dialog, the
//! simulated submit latency) all live here; component `update` functions
//! stay synchronous and return events.

use super::{config, Message, Screen};
use crate::data;
use crate::domain::draft;
use crate::error::MediaError;
use crate::domain::post::{Author, Engagement, Post, PostId, PostKind};
use crate::i18n::fluent::I18n;
use crate::ui::composer::{self, PickedImage, Submission};
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use chrono::Utc;
use iced::Task;
use std::time::Duration;

/// Artificial latency of the simulated submit. There is no network call
/// behind it; the delay only mimics one for UX purposes.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(600);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub feed: &'a mut feed::State,
    pub profile: &'a mut profile::State,
    pub composer: &'a mut Option<composer::State>,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut config::Config,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages: navigation and opening the composer.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Navigate(screen) => {
            *ctx.screen = screen;
        }
        navbar::Event::OpenComposer => {
            if ctx.composer.is_none() {
                *ctx.composer = Some(composer::State::new());
            }
        }
    }
    Task::none()
}

/// Handles feed messages, surfacing follow toggles as toasts.
pub fn handle_feed_message(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    match ctx.feed.update(message) {
        feed::Event::None | feed::Event::TabChanged(_) => {}
        feed::Event::FollowChanged { handle, following } => {
            push_follow_notification(ctx.notifications, &handle, following);
        }
    }
    Task::none()
}

/// Handles profile messages, surfacing follow toggles as toasts.
pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match ctx.profile.update(message) {
        profile::Event::None | profile::Event::TabChanged(_) => {}
        profile::Event::FollowChanged { handle, following } => {
            push_follow_notification(ctx.notifications, &handle, following);
        }
    }
    Task::none()
}

fn push_follow_notification(
    notifications: &mut notifications::Manager,
    handle: &str,
    following: bool,
) {
    let key = if following {
        "notification-follow"
    } else {
        "notification-unfollow"
    };
    notifications.push(notifications::Notification::success(key).with_arg("handle", handle));
}

/// Handles composer messages. Validation stays inside the composer; this
/// layer only runs the side effects its events ask for.
pub fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    let Some(state) = ctx.composer.as_mut() else {
        return Task::none();
    };

    match state.update(message) {
        composer::Event::None => Task::none(),
        composer::Event::PickFiles => pick_images_task(),
        composer::Event::Submit => Task::perform(
            async {
                tokio::time::sleep(SUBMIT_LATENCY).await;
            },
            |()| Message::SubmitDelayElapsed,
        ),
        composer::Event::Rejected(reason) => {
            ctx.notifications
                .push(notifications::Notification::warning(reason.i18n_key()));
            Task::none()
        }
        composer::Event::Dismissed => {
            if let Some(mut state) = ctx.composer.take() {
                state.release();
            }
            Task::none()
        }
    }
}

/// Handles the file-dialog result: attaches what fits and raises the
/// capacity / unsupported-file notices.
pub fn handle_attachments_picked(
    ctx: &mut UpdateContext<'_>,
    images: Vec<PickedImage>,
    rejected: usize,
) -> Task<Message> {
    if rejected > 0 {
        ctx.notifications.push(
            notifications::Notification::warning("notification-attachment-unsupported")
                .with_arg("count", rejected.to_string()),
        );
    }

    if let Some(state) = ctx.composer.as_mut() {
        let outcome = state.add_images(images);
        if outcome.capacity_reached() {
            ctx.notifications.push(
                notifications::Notification::warning("notification-attachment-capacity")
                    .with_arg("max", draft::MAX_ATTACHMENTS.to_string())
                    .with_arg("ignored", outcome.ignored.to_string()),
            );
        }
    }

    Task::none()
}

/// Completes the simulated submit: clears the draft, releases resources,
/// prepends the post, and acknowledges with a toast.
pub fn handle_submit_delay_elapsed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(mut state) = ctx.composer.take() else {
        return Task::none();
    };

    let submission = state.take_submission();
    ctx.feed.prepend(post_from_submission(submission));
    ctx.notifications
        .push(notifications::Notification::success("notification-posted"));

    Task::none()
}

/// Handles settings messages, persisting preference changes.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
        }
        settings::Message::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
        }
    }

    if config::save(ctx.config).is_err() {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }

    Task::none()
}

/// Builds the feed post for a finished submission.
fn post_from_submission(submission: Submission) -> Post {
    let viewer = data::profiles::viewer_profile();

    Post {
        id: PostId::new(),
        author: Author {
            id: viewer.id,
            display_name: viewer.display_name,
            handle: viewer.handle,
        },
        posted_at: Utc::now(),
        kind: PostKind::Article,
        title: None,
        body: submission.text,
        has_media: submission.had_attachments,
        sentiment: submission.sentiment,
        engagement: Engagement::default(),
    }
}

/// Decodes a selected file into an attachable image.
fn decode_picked_image(
    file_name: String,
    bytes: Vec<u8>,
) -> std::result::Result<PickedImage, MediaError> {
    match image_rs::load_from_memory(&bytes) {
        Ok(decoded) => Ok(PickedImage {
            file_name,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        }),
        Err(err) => Err(MediaError::from(err)),
    }
}

/// Opens the native image picker and decodes the selection off the UI
/// thread. Files that fail to decode are counted, not attached.
fn pick_images_task() -> Task<Message> {
    Task::perform(
        async {
            let selection = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                .pick_files()
                .await;

            let Some(handles) = selection else {
                return None;
            };

            let mut images = Vec::new();
            let mut rejected = 0usize;

            for handle in handles {
                let bytes = handle.read().await;
                match decode_picked_image(handle.file_name(), bytes) {
                    Ok(image) => images.push(image),
                    Err(_) => rejected += 1,
                }
            }

            Some((images, rejected))
        },
        |result| match result {
            None => Message::AttachmentPickingCancelled,
            Some((images, rejected)) => Message::AttachmentsPicked { images, rejected },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes a tiny PNG so the decode path sees real image bytes.
    fn one_px_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        let image = image_rs::DynamicImage::ImageRgba8(image_rs::RgbaImage::new(1, 1));
        image
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("encoding a 1x1 png cannot fail");
        bytes
    }

    #[test]
    fn decode_accepts_a_valid_png() {
        let image = decode_picked_image("pixel.png".to_string(), one_px_png())
            .expect("valid png should decode");
        assert_eq!((image.width, image.height), (1, 1));
        assert_eq!(image.file_name, "pixel.png");
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let result = decode_picked_image("notes.txt".to_string(), b"just some text".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn submission_post_carries_viewer_identity() {
        let post = post_from_submission(Submission {
            text: "hello".to_string(),
            sentiment: crate::domain::post::Sentiment::Bullish,
            had_attachments: true,
        });

        assert_eq!(post.author.id, data::profiles::viewer_profile().id);
        assert_eq!(post.body, "hello");
        assert!(post.has_media);
        assert!(post.title.is_none());
        assert_eq!(post.engagement, Engagement::default());
    }
}
