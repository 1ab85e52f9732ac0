// SPDX-License-Identifier: MPL-2.0
//! Portfolio dashboard: stat cards and the holdings table.

use crate::domain::portfolio::{
    format_percent, format_usd, total_day_change, total_unrealized_gain, total_value, Holding,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::stat_card;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, text, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

/// Context required to render the portfolio dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub holdings: &'a [Holding],
}

fn change_color(amount: f64) -> Option<Color> {
    if amount > 0.0 {
        Some(palette::BULLISH_500)
    } else if amount < 0.0 {
        Some(palette::BEARISH_500)
    } else {
        None
    }
}

/// Renders the portfolio dashboard.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let total = total_value(ctx.holdings);
    let day = total_day_change(ctx.holdings);
    let gain = total_unrealized_gain(ctx.holdings);

    let cards = Row::new()
        .spacing(spacing::SM)
        .push(stat_card::view(
            ctx.i18n.tr("portfolio-total-value"),
            format_usd(total),
            None,
        ))
        .push(stat_card::view(
            ctx.i18n.tr("portfolio-day-change"),
            format_usd(day),
            change_color(day),
        ))
        .push(stat_card::view(
            ctx.i18n.tr("portfolio-total-gain"),
            format_usd(gain),
            change_color(gain),
        ));

    let mut table = Column::new().spacing(spacing::XS).push(header_row(ctx.i18n));

    for holding in ctx.holdings {
        table = table.push(holding_row(holding));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(Text::new(ctx.i18n.tr("portfolio-title")).size(typography::TITLE_LG))
        .push(cards)
        .push(scrollable(
            Container::new(table)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::card),
        ));

    Container::new(content).width(Length::Fill).into()
}

fn header_row<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(header_cell(i18n.tr("portfolio-col-ticker"), 80.0))
        .push(header_cell(i18n.tr("portfolio-col-name"), 200.0))
        .push(header_cell(i18n.tr("portfolio-col-quantity"), 80.0))
        .push(header_cell(i18n.tr("portfolio-col-price"), 100.0))
        .push(header_cell(i18n.tr("portfolio-col-value"), 110.0))
        .push(header_cell(i18n.tr("portfolio-col-day"), 100.0))
        .into()
}

fn header_cell<'a, Message: 'a>(label: String, width: f32) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .width(Length::Fixed(width))
        .into()
}

fn holding_row<'a, Message: 'a>(holding: &Holding) -> Element<'a, Message> {
    let day_percent = holding.day_change_percent();

    let day_cell = Text::new(format_percent(day_percent))
        .size(typography::BODY)
        .width(Length::Fixed(100.0))
        .style(move |theme: &Theme| text::Style {
            color: change_color(day_percent).or(Some(theme.palette().text)),
        });

    Row::new()
        .spacing(spacing::SM)
        .push(cell(holding.ticker.clone(), 80.0))
        .push(cell(holding.name.clone(), 200.0))
        .push(cell(format!("{:.0}", holding.quantity), 80.0))
        .push(cell(format_usd(holding.price), 100.0))
        .push(cell(format_usd(holding.market_value()), 110.0))
        .push(day_cell)
        .into()
}

fn cell<'a, Message: 'a>(value: String, width: f32) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::BODY)
        .width(Length::Fixed(width))
        .into()
}
