// SPDX-License-Identifier: MPL-2.0
//! `bullboard` is a social-trading desktop client built with the Iced GUI framework.
//!
//! It renders a feed of trading posts, user profiles, and a portfolio dashboard
//! from in-memory mock data, and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design. There is no server and no
//! durable domain state; the only persisted artifact is the preferences file.

#![doc(html_root_url = "https://docs.rs/bullboard/0.1.0")]

pub mod app;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
