// SPDX-License-Identifier: MPL-2.0
//! Static mock data supplying the initial posts, profiles, holdings, and
//! trending topics.
//!
//! This is the read-only boundary of the application: views consume these
//! modules as input, and the only mutation anywhere is the local prepend of
//! a freshly composed post onto the feed list.

pub mod portfolios;
pub mod posts;
pub mod profiles;
pub mod topics;
