// SPDX-License-Identifier: MPL-2.0
//! Mock trending topics for the feed sidebar.

/// A trending ticker with its mention count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub ticker: String,
    pub mentions: u32,
}

/// Trending tickers, most mentioned first.
#[must_use]
pub fn trending() -> Vec<Topic> {
    vec![
        Topic {
            ticker: "NVDA".to_string(),
            mentions: 18_420,
        },
        Topic {
            ticker: "AAPL".to_string(),
            mentions: 12_050,
        },
        Topic {
            ticker: "XLE".to_string(),
            mentions: 7_310,
        },
        Topic {
            ticker: "GLD".to_string(),
            mentions: 5_160,
        },
        Topic {
            ticker: "TLT".to_string(),
            mentions: 3_980,
        },
    ]
}
