// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Post feed with segment tabs and trending topics
//! - [`profile`] - Profile header, pinned post, and timeline tabs
//! - [`portfolio`] - Portfolio dashboard with holdings and totals
//! - [`settings`] - Language and theme preferences
//!
//! # Dialogs
//!
//! - [`composer`] - Post composer with draft validation and attachments
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (avatar, badges, stat cards)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icon helpers
//! - [`navbar`] - Top navigation bar with the compose button
//! - [`follow_button`] - Controlled/self-managed follow toggle
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod composer;
pub mod design_tokens;
pub mod feed;
pub mod follow_button;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod profile;
pub mod settings;
pub mod styles;
pub mod theming;
