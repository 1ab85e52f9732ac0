// SPDX-License-Identifier: MPL-2.0
//! Post composer dialog.
//!
//! The composer holds the draft (text, sentiment, attachments) and stays
//! fully synchronous; the simulated submit latency and the native file
//! dialog both live in the application update layer, which reacts to the
//! [`Event`]s this component emits.
//!
//! Resource discipline: every attachment's preview resource is released
//! exactly once, whether the draft is submitted, an attachment is removed,
//! or the dialog is dismissed.

use crate::domain::attachment::{Attachment, AttachmentId, PreviewRegistry};
use crate::domain::draft::{self, Draft, RejectReason, TextValidity};
use crate::domain::post::Sentiment;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, text, text_editor, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// A user-selected image file, decoded and ready to attach.
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Messages emitted by the composer dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Edited(text_editor::Action),
    SentimentSelected(Sentiment),
    AttachRequested,
    RemoveAttachment(AttachmentId),
    SubmitRequested,
    CancelRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the native file dialog.
    PickFiles,
    /// The draft passed validation; start the simulated submit.
    Submit,
    /// Submission was refused locally.
    Rejected(RejectReason),
    /// The dialog was cancelled; the parent tears the composer down.
    Dismissed,
}

/// What a finished submission carries over into the feed.
#[derive(Debug, Clone)]
pub struct Submission {
    pub text: String,
    pub sentiment: Sentiment,
    pub had_attachments: bool,
}

/// Composer dialog state.
pub struct State {
    content: text_editor::Content,
    draft: Draft,
    registry: PreviewRegistry,
    submitting: bool,
    picking_files: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: text_editor::Content::new(),
            draft: Draft::new(),
            registry: PreviewRegistry::new(),
            submitting: false,
            picking_files: false,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Registry backing this composer's attachment previews.
    #[must_use]
    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    /// Replaces the draft text wholesale (restoring a draft).
    pub fn set_text(&mut self, text: &str) {
        self.content = text_editor::Content::with_text(text);
        self.draft.set_text(text);
    }

    /// Attaches decoded images, truncating to the remaining capacity.
    pub fn add_images(&mut self, images: Vec<PickedImage>) -> draft::AddOutcome {
        self.picking_files = false;

        let attachments: Vec<Attachment> = images
            .into_iter()
            .map(|image| {
                Attachment::new(
                    &self.registry,
                    image.file_name,
                    image.bytes,
                    image.width,
                    image.height,
                )
            })
            .collect();

        self.draft.push_attachments(attachments)
    }

    /// Marks the file dialog as closed without a selection.
    pub fn file_picking_cancelled(&mut self) {
        self.picking_files = false;
    }

    /// Takes the submission payload and clears the draft, releasing every
    /// attachment resource. Called once the simulated latency elapses.
    pub fn take_submission(&mut self) -> Submission {
        let submission = Submission {
            text: self.draft.text().trim().to_string(),
            sentiment: self.draft.sentiment(),
            had_attachments: self.draft.attachment_count() > 0,
        };

        self.draft.clear();
        self.content = text_editor::Content::new();
        self.submitting = false;

        submission
    }

    /// Releases attachment resources on the dismissal path.
    pub fn release(&mut self) {
        self.draft.release_attachments();
    }

    /// Processes a composer message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Edited(action) => {
                self.content.perform(action);
                let mut text = self.content.text();
                // The editor content always carries a trailing newline.
                if text.ends_with('\n') {
                    text.pop();
                }
                self.draft.set_text(text);
                Event::None
            }
            Message::SentimentSelected(sentiment) => {
                self.draft.set_sentiment(sentiment);
                Event::None
            }
            Message::AttachRequested => {
                if self.submitting
                    || self.picking_files
                    || self.draft.remaining_attachment_slots() == 0
                {
                    return Event::None;
                }
                self.picking_files = true;
                Event::PickFiles
            }
            Message::RemoveAttachment(id) => {
                self.draft.remove_attachment(id);
                Event::None
            }
            Message::SubmitRequested => {
                if self.submitting {
                    return Event::None;
                }
                match self.draft.submit_error() {
                    Some(reason) => Event::Rejected(reason),
                    None => {
                        self.submitting = true;
                        Event::Submit
                    }
                }
            }
            Message::CancelRequested => {
                // The simulated submit is not cancellable; ignore late cancels.
                if self.submitting {
                    Event::None
                } else {
                    Event::Dismissed
                }
            }
        }
    }

    /// Renders the composer dialog card.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("composer-title")).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                button(icons::cross(sizing::ICON_SM))
                    .on_press(Message::CancelRequested)
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
            );

        let editor = text_editor(&self.content)
            .placeholder(i18n.tr("composer-placeholder"))
            .on_action(Message::Edited)
            .height(Length::Fixed(sizing::COMPOSER_EDITOR_HEIGHT));

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(editor)
            .push(self.view_counter_row(i18n));

        if self.draft.text_validity() == TextValidity::OverLimit {
            let over = (-self.draft.remaining_chars()).to_string();
            column = column.push(
                Text::new(i18n.tr_with_args("composer-over-limit", &[("over", over.as_str())]))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        if self.draft.attachment_count() > 0 {
            column = column.push(self.view_attachments());
        }

        column = column.push(self.view_footer(i18n));

        Container::new(column)
            .width(Length::Fixed(sizing::COMPOSER_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::modal_card)
            .into()
    }

    fn view_counter_row<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let remaining = self.draft.remaining_chars().to_string();
        let validity = self.draft.text_validity();

        let counter = Text::new(
            i18n.tr_with_args("composer-remaining", &[("count", remaining.as_str())]),
        )
        .size(typography::CAPTION)
        .style(move |theme: &Theme| text::Style {
            color: Some(match validity {
                TextValidity::Ok => theme.extended_palette().background.base.text,
                TextValidity::NearLimit => palette::WARNING_500,
                TextValidity::OverLimit => palette::ERROR_500,
            }),
        });

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(counter)
            .push(Space::new().width(Length::Fill));

        for sentiment in [Sentiment::Neutral, Sentiment::Bullish, Sentiment::Bearish] {
            let mut pill = button(Text::new(i18n.tr(sentiment.i18n_key())).size(typography::CAPTION))
                .on_press(Message::SentimentSelected(sentiment))
                .padding([spacing::XXS, spacing::XS]);

            pill = if self.draft.sentiment() == sentiment {
                pill.style(styles::button::pill_selected)
            } else {
                pill.style(styles::button::pill)
            };

            row = row.push(pill);
        }

        row.into()
    }

    fn view_attachments(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for attachment in self.draft.attachments() {
            let mut cell = Column::new().spacing(spacing::XXS);

            if let Some(handle) = attachment.preview() {
                cell = cell.push(
                    Image::new(handle.clone())
                        .width(Length::Fixed(sizing::ATTACHMENT_THUMB))
                        .height(Length::Fixed(sizing::ATTACHMENT_THUMB)),
                );
            }

            cell = cell.push(
                button(icons::cross(typography::CAPTION))
                    .on_press(Message::RemoveAttachment(attachment.id()))
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
            );

            row = row.push(cell);
        }

        row.into()
    }

    fn view_footer<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let slots = format!(
            "{}/{}",
            self.draft.attachment_count(),
            draft::MAX_ATTACHMENTS
        );
        let attach_label = Row::new()
            .spacing(spacing::XXS)
            .push(icons::plus(typography::BODY))
            .push(Text::new(
                i18n.tr_with_args("composer-attach", &[("slots", slots.as_str())]),
            ));

        let mut attach_button = button(attach_label).padding([spacing::XXS, spacing::XS]);
        if !self.submitting
            && !self.picking_files
            && self.draft.remaining_attachment_slots() > 0
        {
            attach_button = attach_button.on_press(Message::AttachRequested);
        }
        attach_button = attach_button.style(styles::button::ghost);

        let cancel_button = button(Text::new(i18n.tr("composer-cancel")))
            .on_press(Message::CancelRequested)
            .style(styles::button::ghost);

        let submit_label = if self.submitting {
            i18n.tr("composer-submitting")
        } else {
            i18n.tr("composer-submit")
        };
        let mut submit_button = button(Text::new(submit_label)).style(button::primary);
        if !self.submitting && self.draft.can_submit() {
            submit_button = submit_button.on_press(Message::SubmitRequested);
        }

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(attach_button)
            .push(Space::new().width(Length::Fill))
            .push(cancel_button)
            .push(submit_button)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::{MAX_ATTACHMENTS, MAX_POST_CHARS};

    fn picked(name: &str) -> PickedImage {
        PickedImage {
            file_name: name.to_string(),
            bytes: vec![0u8; 16],
            width: 8,
            height: 8,
        }
    }

    #[test]
    fn text_is_echoed_into_the_draft() {
        let mut state = State::new();
        state.set_text("hello");
        assert_eq!(state.draft().text(), "hello");
    }

    #[test]
    fn submit_with_empty_draft_is_rejected_and_draft_unchanged() {
        let mut state = State::new();
        let event = state.update(Message::SubmitRequested);
        assert_eq!(event, Event::Rejected(RejectReason::Empty));
        assert!(!state.is_submitting());
        assert_eq!(state.draft().text(), "");
    }

    #[test]
    fn submit_with_over_limit_text_is_rejected() {
        let mut state = State::new();
        state.set_text(&"x".repeat(MAX_POST_CHARS + 1));
        let event = state.update(Message::SubmitRequested);
        assert_eq!(event, Event::Rejected(RejectReason::OverLimit));
        assert!(!state.is_submitting());
    }

    #[test]
    fn valid_submit_enters_submitting_state() {
        let mut state = State::new();
        state.set_text("hello");

        let event = state.update(Message::SubmitRequested);
        assert_eq!(event, Event::Submit);
        assert!(state.is_submitting());

        // A second submit while waiting is ignored.
        assert_eq!(state.update(Message::SubmitRequested), Event::None);
    }

    #[test]
    fn take_submission_clears_draft_and_releases_resources() {
        let mut state = State::new();
        state.set_text("  hello  ");
        state.add_images(vec![picked("a.png"), picked("b.png")]);
        state.update(Message::SubmitRequested);

        let submission = state.take_submission();
        assert_eq!(submission.text, "hello");
        assert!(submission.had_attachments);

        assert!(!state.is_submitting());
        assert_eq!(state.draft().text(), "");
        assert_eq!(state.draft().attachment_count(), 0);
        assert_eq!(state.registry().live_count(), 0);
    }

    #[test]
    fn five_files_against_four_slots_accepts_four() {
        let mut state = State::new();
        let images: Vec<_> = (0..5).map(|i| picked(&format!("img-{i}.png"))).collect();

        let outcome = state.add_images(images);

        assert_eq!(outcome.accepted, 4);
        assert_eq!(outcome.ignored, 1);
        assert!(outcome.capacity_reached());
        assert_eq!(state.draft().attachment_count(), MAX_ATTACHMENTS);
        // The ignored file's resource is not kept alive.
        assert_eq!(state.registry().live_count(), MAX_ATTACHMENTS);
    }

    #[test]
    fn attach_request_is_refused_when_full() {
        let mut state = State::new();
        state.add_images((0..4).map(|i| picked(&format!("{i}.png"))).collect());
        assert_eq!(state.update(Message::AttachRequested), Event::None);
    }

    #[test]
    fn attach_request_opens_picker_once() {
        let mut state = State::new();
        assert_eq!(state.update(Message::AttachRequested), Event::PickFiles);
        // Second request while the dialog is open is ignored.
        assert_eq!(state.update(Message::AttachRequested), Event::None);

        state.file_picking_cancelled();
        assert_eq!(state.update(Message::AttachRequested), Event::PickFiles);
    }

    #[test]
    fn remove_attachment_releases_its_resource() {
        let mut state = State::new();
        state.add_images(vec![picked("a.png")]);
        let id = state.draft().attachments()[0].id();

        state.update(Message::RemoveAttachment(id));
        assert_eq!(state.draft().attachment_count(), 0);
        assert_eq!(state.registry().live_count(), 0);
    }

    #[test]
    fn cancel_dismisses_unless_submitting() {
        let mut state = State::new();
        assert_eq!(state.update(Message::CancelRequested), Event::Dismissed);

        state.set_text("hello");
        state.update(Message::SubmitRequested);
        assert_eq!(state.update(Message::CancelRequested), Event::None);
    }

    #[test]
    fn release_on_dismissal_frees_all_resources() {
        let mut state = State::new();
        state.add_images(vec![picked("a.png"), picked("b.png")]);
        assert_eq!(state.registry().live_count(), 2);

        state.release();
        assert_eq!(state.registry().live_count(), 0);
    }

    #[test]
    fn sentiment_selection_updates_draft() {
        let mut state = State::new();
        state.update(Message::SentimentSelected(Sentiment::Bullish));
        assert_eq!(state.draft().sentiment(), Sentiment::Bullish);
    }

    #[test]
    fn composer_view_renders_in_all_states() {
        let i18n = I18n::default();

        let mut state = State::new();
        let _ = state.view(&i18n);

        state.set_text(&"x".repeat(MAX_POST_CHARS + 3));
        state.add_images(vec![picked("a.png")]);
        let _ = state.view(&i18n);

        state.set_text("hello");
        state.update(Message::SubmitRequested);
        let _ = state.view(&i18n);
    }
}
