// SPDX-License-Identifier: MPL-2.0
//! Mock profiles.

use crate::domain::post::PostId;
use crate::domain::profile::{Profile, ProfileId, ProfileStats};

/// Profile ID of the local user (the composer's author).
pub const VIEWER_ID: ProfileId = ProfileId::from_raw(1);

/// Profile ID of the trader shown on the profile screen.
pub const FEATURED_ID: ProfileId = ProfileId::from_raw(2);

pub const LEO_ID: ProfileId = ProfileId::from_raw(3);
pub const PRIYA_ID: ProfileId = ProfileId::from_raw(4);

/// The local user composing posts.
#[must_use]
pub fn viewer_profile() -> Profile {
    Profile {
        id: VIEWER_ID,
        display_name: "Alex Rivera".to_string(),
        handle: "alexr".to_string(),
        bio: "Swing trading tech and energy. Not financial advice.".to_string(),
        stats: ProfileStats {
            posts: 12,
            followers: 248,
            following: 310,
        },
        pinned_post: None,
    }
}

/// The trader whose profile the profile screen renders.
#[must_use]
pub fn featured_profile() -> Profile {
    Profile {
        id: FEATURED_ID,
        display_name: "Maya Chen".to_string(),
        handle: "mayatrades".to_string(),
        bio: "Macro first, charts second. Sharing my book in real time."
            .to_string(),
        stats: ProfileStats {
            posts: 1_204,
            followers: 58_300,
            following: 412,
        },
        pinned_post: Some(PostId::from_raw(102)),
    }
}

/// Initial follow state per author, as the mock feed ships it.
#[must_use]
pub fn seed_follows() -> Vec<(ProfileId, bool)> {
    vec![(FEATURED_ID, true), (LEO_ID, false), (PRIYA_ID, false)]
}
