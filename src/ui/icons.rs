// SPDX-License-Identifier: MPL-2.0
//! Glyph-based icon helpers.
//!
//! Icons are rendered as text glyphs from the default font rather than
//! bitmap assets, which keeps them crisp at any scale and theme-neutral.
//! Names describe the glyph's appearance, not the action context.

use iced::widget::{text, Text};

fn glyph(symbol: &'static str, size: f32) -> Text<'static> {
    text(symbol).size(size)
}

/// Checkmark: success states.
pub fn checkmark(size: f32) -> Text<'static> {
    glyph("\u{2713}", size)
}

/// Circled i: informational states.
pub fn info(size: f32) -> Text<'static> {
    glyph("\u{24D8}", size)
}

/// Warning triangle: warnings and errors.
pub fn warning(size: f32) -> Text<'static> {
    glyph("\u{26A0}", size)
}

/// Cross: dismiss/remove affordances.
pub fn cross(size: f32) -> Text<'static> {
    glyph("\u{2715}", size)
}

/// Upward triangle: bullish sentiment.
pub fn arrow_up(size: f32) -> Text<'static> {
    glyph("\u{25B2}", size)
}

/// Downward triangle: bearish sentiment.
pub fn arrow_down(size: f32) -> Text<'static> {
    glyph("\u{25BC}", size)
}

/// Rightward triangle: video play affordance.
pub fn play(size: f32) -> Text<'static> {
    glyph("\u{25B6}", size)
}

/// Plus sign: add/attach affordances.
pub fn plus(size: f32) -> Text<'static> {
    glyph("+", size)
}

/// Pin marker: pinned posts.
pub fn pin(size: f32) -> Text<'static> {
    glyph("\u{25C6}", size)
}
