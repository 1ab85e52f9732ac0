// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.

pub mod avatar;
pub mod sentiment_badge;
pub mod stat_card;
