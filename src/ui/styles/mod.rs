// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons and containers.
//!
//! Style functions live here rather than inline in the views so that the
//! feed, profile, portfolio, and composer screens stay visually consistent.

pub mod button;
pub mod container;
