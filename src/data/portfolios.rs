// SPDX-License-Identifier: MPL-2.0
//! Mock portfolio holdings.

use crate::domain::portfolio::Holding;

/// The local user's holdings.
#[must_use]
pub fn holdings() -> Vec<Holding> {
    vec![
        Holding {
            ticker: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            quantity: 24.0,
            cost_basis: 168.40,
            price: 228.15,
            prev_close: 225.90,
        },
        Holding {
            ticker: "NVDA".to_string(),
            name: "NVIDIA Corp.".to_string(),
            quantity: 10.0,
            cost_basis: 94.20,
            price: 182.60,
            prev_close: 188.35,
        },
        Holding {
            ticker: "XLE".to_string(),
            name: "Energy Select SPDR".to_string(),
            quantity: 60.0,
            cost_basis: 84.10,
            price: 96.45,
            prev_close: 95.80,
        },
        Holding {
            ticker: "GLD".to_string(),
            name: "SPDR Gold Shares".to_string(),
            quantity: 15.0,
            cost_basis: 201.75,
            price: 248.30,
            prev_close: 247.10,
        },
        Holding {
            ticker: "TLT".to_string(),
            name: "iShares 20+ Year Treasury".to_string(),
            quantity: 40.0,
            cost_basis: 92.50,
            price: 89.20,
            prev_close: 89.95,
        },
    ]
}
