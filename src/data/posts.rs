// SPDX-License-Identifier: MPL-2.0
//! Mock feed and timeline posts.
//!
//! Timestamps are computed relative to startup so relative ages render
//! sensibly no matter when the app is launched.

use crate::data::profiles;
use crate::domain::post::{Author, Engagement, Post, PostId, PostKind, Sentiment};
use crate::domain::profile::ProfileId;
use chrono::{Duration, Utc};

fn maya() -> Author {
    Author {
        id: profiles::FEATURED_ID,
        display_name: "Maya Chen".to_string(),
        handle: "mayatrades".to_string(),
    }
}

fn leo() -> Author {
    Author {
        id: profiles::LEO_ID,
        display_name: "Leo Brandt".to_string(),
        handle: "brandtcapital".to_string(),
    }
}

fn priya() -> Author {
    Author {
        id: profiles::PRIYA_ID,
        display_name: "Priya Nair".to_string(),
        handle: "priyacharts".to_string(),
    }
}

/// The initial feed, newest first.
#[must_use]
pub fn feed_posts() -> Vec<Post> {
    let now = Utc::now();

    vec![
        Post {
            id: PostId::from_raw(101),
            author: maya(),
            posted_at: now - Duration::minutes(18),
            kind: PostKind::Video,
            title: Some("Why I'm fading the semiconductor rally".to_string()),
            body: "Quick walkthrough of the SOX divergence and where I'd look \
                   for a re-entry. Position sizes in the video."
                .to_string(),
            has_media: true,
            sentiment: Sentiment::Bearish,
            engagement: Engagement {
                likes: 1_240,
                comments: 86,
                views: 15_400,
            },
        },
        Post {
            id: PostId::from_raw(102),
            author: maya(),
            posted_at: now - Duration::hours(6),
            kind: PostKind::Article,
            title: Some("My 2026 rate-cut playbook".to_string()),
            body: "Three scenarios, three allocations. The base case keeps me \
                   long duration and long gold miners into Q4."
                .to_string(),
            has_media: false,
            sentiment: Sentiment::Bullish,
            engagement: Engagement {
                likes: 3_800,
                comments: 412,
                views: 60_100,
            },
        },
        Post {
            id: PostId::from_raw(103),
            author: leo(),
            posted_at: now - Duration::hours(2),
            kind: PostKind::Article,
            title: None,
            body: "Energy names quietly printing 52-week highs while everyone \
                   stares at megacap tech. XLE ratio chart attached."
                .to_string(),
            has_media: true,
            sentiment: Sentiment::Bullish,
            engagement: Engagement {
                likes: 542,
                comments: 37,
                views: 8_900,
            },
        },
        Post {
            id: PostId::from_raw(104),
            author: priya(),
            posted_at: now - Duration::hours(9),
            kind: PostKind::Video,
            title: Some("Chart review: five setups for the week".to_string()),
            body: "Breakouts, one short, and a crypto wildcard. Timestamps in \
                   the description."
                .to_string(),
            has_media: true,
            sentiment: Sentiment::Neutral,
            engagement: Engagement {
                likes: 980,
                comments: 64,
                views: 12_700,
            },
        },
        Post {
            id: PostId::from_raw(105),
            author: leo(),
            posted_at: now - Duration::days(1),
            kind: PostKind::Article,
            title: None,
            body: "Closed the copper position for +14%. Thread on what the \
                   inventory data told us three weeks early."
                .to_string(),
            has_media: false,
            sentiment: Sentiment::Neutral,
            engagement: Engagement {
                likes: 2_100,
                comments: 158,
                views: 31_000,
            },
        },
        Post {
            id: PostId::from_raw(106),
            author: priya(),
            posted_at: now - Duration::days(2),
            kind: PostKind::Article,
            title: Some("Position sizing beats entry timing".to_string()),
            body: "Backtested 4 years of my own fills. Entries explained a \
                   third of the variance; sizing explained the rest."
                .to_string(),
            has_media: false,
            sentiment: Sentiment::Bullish,
            engagement: Engagement {
                likes: 4_600,
                comments: 390,
                views: 72_300,
            },
        },
    ]
}

/// Timeline posts authored by the given profile, newest first.
#[must_use]
pub fn timeline_posts(author_id: ProfileId) -> Vec<Post> {
    feed_posts()
        .into_iter()
        .filter(|post| post.author.id == author_id)
        .collect()
}

/// Replies authored by the given profile.
#[must_use]
pub fn replies(author_id: ProfileId) -> Vec<Post> {
    let now = Utc::now();

    if author_id != profiles::FEATURED_ID {
        return Vec::new();
    }

    vec![
        Post {
            id: PostId::from_raw(150),
            author: maya(),
            posted_at: now - Duration::hours(4),
            kind: PostKind::Article,
            title: None,
            body: "@brandtcapital Agreed on the ratio chart, but watch the \
                   crack spreads. They led the last two tops."
                .to_string(),
            has_media: false,
            sentiment: Sentiment::Neutral,
            engagement: Engagement {
                likes: 96,
                comments: 7,
                views: 2_200,
            },
        },
        Post {
            id: PostId::from_raw(151),
            author: maya(),
            posted_at: now - Duration::days(1),
            kind: PostKind::Article,
            title: None,
            body: "@priyacharts The sizing thread should be required reading. \
                   Sharing it with my subscribers."
                .to_string(),
            has_media: false,
            sentiment: Sentiment::Bullish,
            engagement: Engagement {
                likes: 310,
                comments: 12,
                views: 5_800,
            },
        },
    ]
}

/// Media posts authored by the given profile.
#[must_use]
pub fn media_posts(author_id: ProfileId) -> Vec<Post> {
    timeline_posts(author_id)
        .into_iter()
        .filter(|post| post.has_media)
        .collect()
}

/// Posts by other authors that the given profile has liked.
#[must_use]
pub fn liked_posts(author_id: ProfileId) -> Vec<Post> {
    feed_posts()
        .into_iter()
        .filter(|post| post.author.id != author_id)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_has_posts_from_multiple_authors() {
        let posts = feed_posts();
        let mut authors: Vec<_> = posts.iter().map(|p| p.author.id).collect();
        authors.sort();
        authors.dedup();
        assert!(authors.len() >= 3);
    }

    #[test]
    fn feed_post_ids_are_unique() {
        let posts = feed_posts();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn timeline_only_contains_the_author() {
        for post in timeline_posts(profiles::FEATURED_ID) {
            assert_eq!(post.author.id, profiles::FEATURED_ID);
        }
    }

    #[test]
    fn media_posts_all_have_media() {
        for post in media_posts(profiles::FEATURED_ID) {
            assert!(post.has_media);
        }
    }

    #[test]
    fn liked_posts_exclude_the_profile_itself() {
        for post in liked_posts(profiles::FEATURED_ID) {
            assert_ne!(post.author.id, profiles::FEATURED_ID);
        }
    }
}
