// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Locale bundles are embedded at compile time from `assets/i18n/*.ftl` and
//! can be overridden at runtime with `--i18n-dir` for custom builds.

pub mod fluent;
