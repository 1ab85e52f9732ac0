// SPDX-License-Identifier: MPL-2.0
//! In-progress, unsubmitted composer content.
//!
//! A draft tracks free text against a hard character limit, an ordered list
//! of media attachments against a fixed capacity, and a sentiment tag.
//! Typing past the limit is never hard-blocked; the draft only turns
//! invalid, and submission is refused until the text is brought back under
//! the limit.

use crate::domain::attachment::{Attachment, AttachmentId};
use crate::domain::post::Sentiment;

/// Hard character limit for a post.
pub const MAX_POST_CHARS: usize = 280;

/// Soft allowance before the limit at which the counter turns to warning
/// styling.
pub const CHAR_WARN_ALLOWANCE: usize = 20;

/// Maximum number of media attachments per post.
pub const MAX_ATTACHMENTS: usize = 4;

/// Validity of the draft text against the character budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValidity {
    Ok,
    /// Within [`CHAR_WARN_ALLOWANCE`] characters of the limit.
    NearLimit,
    OverLimit,
}

/// Why a submission attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Neither text nor attachments present.
    Empty,
    /// Text exceeds [`MAX_POST_CHARS`].
    OverLimit,
}

impl RejectReason {
    /// Returns the i18n message key for the rejection notice.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RejectReason::Empty => "notification-draft-empty",
            RejectReason::OverLimit => "notification-draft-over-limit",
        }
    }
}

/// Outcome of offering a batch of files to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    /// Files actually attached.
    pub accepted: usize,
    /// Files silently dropped because capacity was reached.
    pub ignored: usize,
}

impl AddOutcome {
    #[must_use]
    pub fn capacity_reached(&self) -> bool {
        self.ignored > 0
    }
}

/// In-progress composer content.
#[derive(Debug, Default)]
pub struct Draft {
    text: String,
    sentiment: Sentiment,
    attachments: Vec<Attachment>,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft text. Arbitrary length is accepted; validity is
    /// derived, not enforced here.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.sentiment = sentiment;
    }

    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Character count in Unicode scalar values.
    ///
    /// Bytes would over-count non-ASCII text; graphemes would add a
    /// dependency for no user-visible gain at this limit.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Characters left before the hard limit (negative when over).
    #[must_use]
    pub fn remaining_chars(&self) -> i64 {
        MAX_POST_CHARS as i64 - self.char_count() as i64
    }

    #[must_use]
    pub fn text_validity(&self) -> TextValidity {
        let count = self.char_count();
        if count > MAX_POST_CHARS {
            TextValidity::OverLimit
        } else if count + CHAR_WARN_ALLOWANCE > MAX_POST_CHARS {
            TextValidity::NearLimit
        } else {
            TextValidity::Ok
        }
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Free attachment slots left.
    #[must_use]
    pub fn remaining_attachment_slots(&self) -> usize {
        MAX_ATTACHMENTS - self.attachments.len()
    }

    /// Attaches as many of the offered files as capacity allows, in order.
    /// Files beyond the remaining capacity are dropped and counted in the
    /// outcome so the caller can raise a capacity notice.
    pub fn push_attachments(
        &mut self,
        attachments: impl IntoIterator<Item = Attachment>,
    ) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for attachment in attachments {
            if self.attachments.len() < MAX_ATTACHMENTS {
                self.attachments.push(attachment);
                outcome.accepted += 1;
            } else {
                // The dropped attachment's resource is released by Drop here.
                outcome.ignored += 1;
            }
        }

        outcome
    }

    /// Removes one attachment and releases its preview resource.
    ///
    /// Returns `true` if the attachment was found.
    pub fn remove_attachment(&mut self, id: AttachmentId) -> bool {
        if let Some(pos) = self.attachments.iter().position(|a| a.id() == id) {
            let mut removed = self.attachments.remove(pos);
            removed.release();
            true
        } else {
            false
        }
    }

    /// Releases every attachment resource and drops the attachments.
    /// Safe to call on any exit path; releasing twice is a no-op per
    /// resource.
    pub fn release_attachments(&mut self) {
        for attachment in &mut self.attachments {
            attachment.release();
        }
        self.attachments.clear();
    }

    /// Whether the draft satisfies the submission contract: some content,
    /// and text within the hard limit.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_error().is_none()
    }

    /// The reason submission would be refused right now, if any.
    #[must_use]
    pub fn submit_error(&self) -> Option<RejectReason> {
        if self.char_count() > MAX_POST_CHARS {
            return Some(RejectReason::OverLimit);
        }
        if self.text.trim().is_empty() && self.attachments.is_empty() {
            return Some(RejectReason::Empty);
        }
        None
    }

    /// Clears the draft for reuse after a successful submission, releasing
    /// all attachment resources.
    pub fn clear(&mut self) {
        self.text.clear();
        self.sentiment = Sentiment::default();
        self.release_attachments();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachment::PreviewRegistry;

    fn attachment(registry: &PreviewRegistry, name: &str) -> Attachment {
        Attachment::new(registry, name.to_string(), vec![0u8; 8], 4, 4)
    }

    #[test]
    fn text_within_limit_is_echoed_unchanged() {
        let mut draft = Draft::new();
        let text = "AAPL breaking out of the wedge, watching 230 for entry";
        draft.set_text(text);

        assert_eq!(draft.text(), text);
        assert_eq!(draft.text_validity(), TextValidity::Ok);
        assert!(draft.can_submit());
    }

    #[test]
    fn counting_uses_chars_not_bytes() {
        let mut draft = Draft::new();
        draft.set_text("é".repeat(MAX_POST_CHARS));
        assert_eq!(draft.char_count(), MAX_POST_CHARS);
        assert_eq!(draft.text_validity(), TextValidity::NearLimit);
        assert!(draft.can_submit());
    }

    #[test]
    fn near_limit_turns_warning() {
        let mut draft = Draft::new();
        draft.set_text("x".repeat(MAX_POST_CHARS - CHAR_WARN_ALLOWANCE + 1));
        assert_eq!(draft.text_validity(), TextValidity::NearLimit);
        assert!(draft.can_submit());
    }

    #[test]
    fn over_limit_blocks_submission_but_keeps_text() {
        let mut draft = Draft::new();
        let long = "y".repeat(MAX_POST_CHARS + 5);
        draft.set_text(long.clone());

        // Input is never truncated, only flagged.
        assert_eq!(draft.text(), long);
        assert_eq!(draft.text_validity(), TextValidity::OverLimit);
        assert_eq!(draft.remaining_chars(), -5);
        assert_eq!(draft.submit_error(), Some(RejectReason::OverLimit));
    }

    #[test]
    fn empty_draft_is_rejected() {
        let draft = Draft::new();
        assert_eq!(draft.submit_error(), Some(RejectReason::Empty));
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let mut draft = Draft::new();
        draft.set_text("   \n  ");
        assert_eq!(draft.submit_error(), Some(RejectReason::Empty));
    }

    #[test]
    fn attachment_alone_makes_draft_submittable() {
        let registry = PreviewRegistry::new();
        let mut draft = Draft::new();
        draft.push_attachments([attachment(&registry, "chart.png")]);
        assert!(draft.can_submit());
    }

    #[test]
    fn capacity_truncates_and_reports_ignored() {
        let registry = PreviewRegistry::new();
        let mut draft = Draft::new();

        // Offer five files against four free slots.
        let offered: Vec<_> = (0..5)
            .map(|i| attachment(&registry, &format!("img-{i}.png")))
            .collect();
        let outcome = draft.push_attachments(offered);

        assert_eq!(outcome.accepted, 4);
        assert_eq!(outcome.ignored, 1);
        assert!(outcome.capacity_reached());
        assert_eq!(draft.attachment_count(), MAX_ATTACHMENTS);
        // The dropped file's resource must not linger.
        assert_eq!(registry.live_count(), MAX_ATTACHMENTS);
    }

    #[test]
    fn visible_count_never_exceeds_maximum() {
        let registry = PreviewRegistry::new();
        let mut draft = Draft::new();

        for _ in 0..3 {
            draft.push_attachments([
                attachment(&registry, "a.png"),
                attachment(&registry, "b.png"),
            ]);
            assert!(draft.attachment_count() <= MAX_ATTACHMENTS);
        }
        assert_eq!(draft.attachment_count(), MAX_ATTACHMENTS);
    }

    #[test]
    fn remove_releases_resource_exactly_once() {
        let registry = PreviewRegistry::new();
        let mut draft = Draft::new();
        draft.push_attachments([attachment(&registry, "chart.png")]);
        let id = draft.attachments()[0].id();

        assert!(draft.remove_attachment(id));
        assert_eq!(registry.live_count(), 0);

        // Removing again finds nothing and releases nothing.
        assert!(!draft.remove_attachment(id));
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn clear_releases_everything_and_resets() {
        let registry = PreviewRegistry::new();
        let mut draft = Draft::new();
        draft.set_text("hello");
        draft.set_sentiment(Sentiment::Bullish);
        draft.push_attachments([
            attachment(&registry, "a.png"),
            attachment(&registry, "b.png"),
        ]);

        draft.clear();

        assert!(draft.text().is_empty());
        assert_eq!(draft.sentiment(), Sentiment::Neutral);
        assert_eq!(draft.attachment_count(), 0);
        assert_eq!(registry.live_count(), 0);

        // Clearing twice must not double-release.
        draft.clear();
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn hello_draft_is_submittable() {
        let mut draft = Draft::new();
        draft.set_text("hello");
        assert!(draft.can_submit());
    }
}
