// SPDX-License-Identifier: MPL-2.0
//! Feed post data model.

use crate::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

/// Unique identifier for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(u64);

impl PostId {
    /// Creates a new unique post ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        // Mock data claims the low range; locally composed posts continue after it.
        static COUNTER: AtomicU64 = AtomicU64::new(10_000);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a post ID with a fixed value, for mock data.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

/// Bullish/bearish classification attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sentiment {
    #[default]
    Neutral,
    Bullish,
    Bearish,
}

impl Sentiment {
    /// Returns the i18n label key for this sentiment.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Sentiment::Neutral => "sentiment-neutral",
            Sentiment::Bullish => "sentiment-bullish",
            Sentiment::Bearish => "sentiment-bearish",
        }
    }
}

/// The shape of a post's primary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Article,
    Video,
}

impl PostKind {
    /// Returns the i18n label key for this kind.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PostKind::Article => "post-kind-article",
            PostKind::Video => "post-kind-video",
        }
    }
}

/// Engagement counters for a post.
///
/// Unsigned fields make the "counters are non-negative" invariant hold by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub views: u32,
}

/// Author reference carried by a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: ProfileId,
    pub display_name: String,
    pub handle: String,
}

impl Author {
    /// Uppercase initials used for the avatar placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A post as rendered in the feed or a profile timeline.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub posted_at: DateTime<Utc>,
    pub kind: PostKind,
    /// Mock articles/videos carry a headline; locally composed posts do not.
    pub title: Option<String>,
    pub body: String,
    /// Whether the post carries attached media (preview rendering only).
    pub has_media: bool,
    pub sentiment: Sentiment,
    pub engagement: Engagement,
}

/// Coarse age of a post relative to `now`, for localized display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl Age {
    /// Buckets the elapsed time between `posted_at` and `now`.
    ///
    /// Future timestamps (clock skew in mock data) are treated as just-now.
    #[must_use]
    pub fn between(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now.signed_duration_since(posted_at);
        let minutes = elapsed.num_minutes();

        if minutes < 1 {
            Age::JustNow
        } else if minutes < 60 {
            Age::Minutes(minutes)
        } else if minutes < 60 * 24 {
            Age::Hours(elapsed.num_hours())
        } else {
            Age::Days(elapsed.num_days())
        }
    }
}

/// Formats a counter the way the feed renders it: `987`, `1.2k`, `3.4M`.
#[must_use]
pub fn compact_count(count: u32) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}k", f64::from(count) / 1_000.0)
    } else {
        format!("{:.1}M", f64::from(count) / 1_000_000.0)
    }
}
