// SPDX-License-Identifier: MPL-2.0
//! Core domain types for the social-trading client.
//!
//! Everything in here is plain data plus validation: posts, profiles,
//! composer drafts, attachments, and portfolio math. No Iced message
//! plumbing lives at this layer, which keeps the invariants unit-testable
//! without a running event loop.

pub mod attachment;
pub mod draft;
pub mod portfolio;
pub mod post;
pub mod profile;

pub use attachment::{Attachment, AttachmentId, PreviewRegistry};
pub use draft::Draft;
pub use post::{Author, Engagement, Post, PostId, PostKind, Sentiment};
pub use profile::{Profile, ProfileId, ProfileStats};
