// SPDX-License-Identifier: MPL-2.0
//! Portfolio holdings and the derived figures shown on the dashboard.

/// A single position in the portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub ticker: String,
    pub name: String,
    pub quantity: f64,
    /// Average acquisition price per share.
    pub cost_basis: f64,
    /// Latest (mock) price per share.
    pub price: f64,
    /// Previous session close, for day-change figures.
    pub prev_close: f64,
}

impl Holding {
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.quantity * self.price
    }

    #[must_use]
    pub fn day_change(&self) -> f64 {
        self.quantity * (self.price - self.prev_close)
    }

    #[must_use]
    pub fn day_change_percent(&self) -> f64 {
        if self.prev_close == 0.0 {
            0.0
        } else {
            (self.price - self.prev_close) / self.prev_close * 100.0
        }
    }

    #[must_use]
    pub fn unrealized_gain(&self) -> f64 {
        self.quantity * (self.price - self.cost_basis)
    }
}

/// Sum of market values across holdings.
#[must_use]
pub fn total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::market_value).sum()
}

/// Sum of day changes across holdings.
#[must_use]
pub fn total_day_change(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::day_change).sum()
}

/// Sum of unrealized gains across holdings.
#[must_use]
pub fn total_unrealized_gain(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::unrealized_gain).sum()
}

/// Formats a dollar amount with thousands separators: `$12,345.67`.
/// Negative amounts render as `-$1,234.50`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Formats a signed percentage: `+1.25%` / `-0.40%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:+.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding() -> Holding {
        Holding {
            ticker: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            quantity: 10.0,
            cost_basis: 150.0,
            price: 210.0,
            prev_close: 200.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn market_value_is_quantity_times_price() {
        assert!(close(holding().market_value(), 2_100.0));
    }

    #[test]
    fn day_change_uses_previous_close() {
        assert!(close(holding().day_change(), 100.0));
        assert!(close(holding().day_change_percent(), 5.0));
    }

    #[test]
    fn day_change_percent_handles_zero_close() {
        let mut h = holding();
        h.prev_close = 0.0;
        assert!(close(h.day_change_percent(), 0.0));
    }

    #[test]
    fn unrealized_gain_uses_cost_basis() {
        assert!(close(holding().unrealized_gain(), 600.0));
    }

    #[test]
    fn totals_sum_over_holdings() {
        let holdings = vec![holding(), holding()];
        assert!(close(total_value(&holdings), 4_200.0));
        assert!(close(total_day_change(&holdings), 200.0));
        assert!(close(total_unrealized_gain(&holdings), 1_200.0));
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(12_345.67), "$12,345.67");
        assert_eq!(format_usd(999.9), "$999.90");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn format_usd_handles_negative_amounts() {
        assert_eq!(format_usd(-1_234.5), "-$1,234.50");
    }

    #[test]
    fn format_percent_is_signed() {
        assert_eq!(format_percent(1.25), "+1.25%");
        assert_eq!(format_percent(-0.4), "-0.40%");
    }
}
