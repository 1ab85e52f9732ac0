// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive notifications acknowledge user actions (post submitted,
//! follow toggled, attachment capacity reached) without blocking
//! interaction. The manager is owned by the application state and passed
//! explicitly to whatever needs to raise a notice - there is no global
//! dispatch.
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual
//!   dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
