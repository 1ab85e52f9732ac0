// SPDX-License-Identifier: MPL-2.0
//! Profile data model. Profiles are static, read-only mock data.

use crate::domain::post::PostId;

/// Unique identifier for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(u64);

impl ProfileId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Aggregate counters shown in a profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileStats {
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
}

/// A user profile as rendered on the profile screen.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub display_name: String,
    pub handle: String,
    pub bio: String,
    pub stats: ProfileStats,
    /// The post designated to render first in the timeline regardless of
    /// chronological order.
    pub pinned_post: Option<PostId>,
}

impl Profile {
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
