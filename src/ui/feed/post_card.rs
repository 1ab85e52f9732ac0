// SPDX-License-Identifier: MPL-2.0
//! Card rendering a single feed post.

use super::Message;
use crate::domain::post::{compact_count, Age, Post, PostKind};
use crate::i18n::fluent::I18n;
use crate::ui::components::{avatar, sentiment_badge};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::follow_button;
use crate::ui::icons;
use crate::ui::styles;
use chrono::Utc;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Renders one post card.
pub fn view<'a>(
    post: &'a Post,
    following: bool,
    follow_button_state: &'a follow_button::State,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let author_id = post.author.id;

    let follow = follow_button::view(
        follow_button_state,
        follow_button::ViewContext {
            i18n,
            external: Some(following),
        },
    )
    .map(move |message| Message::FollowButton(author_id, message));

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(post.author.display_name.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(format!("@{}", post.author.handle)).size(typography::CAPTION),
        )
        .push(Text::new(format_age(post, i18n)).size(typography::CAPTION))
        .push(sentiment_badge::view(post.sentiment, i18n))
        .push(Space::new().width(Length::Fill))
        .push(follow);

    let mut body = Column::new().spacing(spacing::XS).push(header);

    if let Some(title) = &post.title {
        body = body.push(Text::new(title.as_str()).size(typography::TITLE_SM));
    }

    body = body.push(Text::new(post.body.as_str()).size(typography::BODY));

    if post.has_media {
        body = body.push(media_placeholder(post.kind, i18n));
    }

    body = body.push(engagement_row(post, i18n));

    let card = Row::new()
        .spacing(spacing::SM)
        .push(avatar::view(post.author.initials(), sizing::AVATAR_SM))
        .push(body);

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Placeholder block standing in for the post's media preview.
fn media_placeholder<'a>(kind: PostKind, i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    if kind == PostKind::Video {
        row = row.push(icons::play(typography::BODY));
    }
    row = row.push(Text::new(i18n.tr(kind.i18n_key())).size(typography::CAPTION));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::media_placeholder)
        .into()
}

fn engagement_row<'a>(post: &Post, i18n: &I18n) -> Element<'a, Message> {
    let likes = i18n.tr_with_args(
        "post-likes",
        &[("count", compact_count(post.engagement.likes).as_str())],
    );
    let comments = i18n.tr_with_args(
        "post-comments",
        &[("count", compact_count(post.engagement.comments).as_str())],
    );
    let views = i18n.tr_with_args(
        "post-views",
        &[("count", compact_count(post.engagement.views).as_str())],
    );

    Row::new()
        .spacing(spacing::MD)
        .push(Text::new(likes).size(typography::CAPTION))
        .push(Text::new(comments).size(typography::CAPTION))
        .push(Text::new(views).size(typography::CAPTION))
        .into()
}

fn format_age(post: &Post, i18n: &I18n) -> String {
    match Age::between(post.posted_at, Utc::now()) {
        Age::JustNow => i18n.tr("post-age-now"),
        Age::Minutes(minutes) => {
            i18n.tr_with_args("post-age-minutes", &[("minutes", minutes.to_string().as_str())])
        }
        Age::Hours(hours) => {
            i18n.tr_with_args("post-age-hours", &[("hours", hours.to_string().as_str())])
        }
        Age::Days(days) => {
            i18n.tr_with_args("post-age-days", &[("days", days.to_string().as_str())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::posts;

    #[test]
    fn post_card_renders_every_mock_post() {
        let i18n = I18n::default();
        let button_state = follow_button::State::controlled();
        for post in posts::feed_posts() {
            let _element = view(&post, false, &button_state, &i18n);
        }
    }

    #[test]
    fn format_age_resolves_to_localized_text() {
        let i18n = I18n::default();
        let post = posts::feed_posts().remove(0);
        let age = format_age(&post, &i18n);
        assert!(!age.starts_with("MISSING:"));
    }
}
