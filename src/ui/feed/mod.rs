// SPDX-License-Identifier: MPL-2.0
//! Feed screen: segment tabs, the ordered post list, and trending topics.
//!
//! The feed owns the follow state for every author it shows (the follow
//! buttons on post cards run in controlled mode), and it is the one list
//! that mutates: a successfully composed post is prepended locally.

pub mod post_card;

use crate::data::topics::Topic;
use crate::domain::post::Post;
use crate::domain::profile::ProfileId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::follow_button;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Feed segment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedTab {
    /// Newest first.
    #[default]
    New,
    /// Most liked first.
    TopSellers,
}

impl FeedTab {
    /// Returns the i18n label key for this tab.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FeedTab::New => "feed-tab-new",
            FeedTab::TopSellers => "feed-tab-top",
        }
    }

    /// All tabs, in display order.
    pub const ALL: [FeedTab; 2] = [FeedTab::New, FeedTab::TopSellers];
}

/// Messages emitted by the feed screen.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(FeedTab),
    FollowButton(ProfileId, follow_button::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The active tab actually changed (re-selecting the active tab emits
    /// no transition event).
    TabChanged(FeedTab),
    /// A follow toggle fired; carries the author handle for the notice.
    FollowChanged { handle: String, following: bool },
}

/// Feed screen state.
#[derive(Debug)]
pub struct State {
    active_tab: FeedTab,
    posts: Vec<Post>,
    following: HashMap<ProfileId, bool>,
    /// Shared controlled-mode button state for every card.
    follow_button: follow_button::State,
}

impl State {
    /// Builds the feed from its initial posts and seeded follow states.
    #[must_use]
    pub fn new(
        default_tab: FeedTab,
        posts: Vec<Post>,
        seed_follows: impl IntoIterator<Item = (ProfileId, bool)>,
    ) -> Self {
        Self {
            active_tab: default_tab,
            posts,
            following: seed_follows.into_iter().collect(),
            follow_button: follow_button::State::controlled(),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> FeedTab {
        self.active_tab
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Whether the viewer follows the given author.
    #[must_use]
    pub fn is_following(&self, author: ProfileId) -> bool {
        self.following.get(&author).copied().unwrap_or(false)
    }

    /// Prepends a freshly composed post.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    /// Posts in the order the active tab prescribes.
    #[must_use]
    pub fn ordered_posts(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        match self.active_tab {
            FeedTab::New => {
                posts.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
            }
            FeedTab::TopSellers => {
                posts.sort_by(|a, b| {
                    b.engagement
                        .likes
                        .cmp(&a.engagement.likes)
                        .then(b.posted_at.cmp(&a.posted_at))
                });
            }
        }
        posts
    }

    /// Processes a feed message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                if self.active_tab == tab {
                    return Event::None;
                }
                self.active_tab = tab;
                Event::TabChanged(tab)
            }
            Message::FollowButton(author, button_message) => {
                let external = Some(self.is_following(author));
                let follow_button::Event::Toggled(next) =
                    follow_button::update(&mut self.follow_button, button_message, external);

                self.following.insert(author, next);

                let handle = self
                    .posts
                    .iter()
                    .find(|post| post.author.id == author)
                    .map(|post| post.author.handle.clone())
                    .unwrap_or_default();

                Event::FollowChanged {
                    handle,
                    following: next,
                }
            }
        }
    }

    /// Renders the feed screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n, topics: &'a [Topic]) -> Element<'a, Message> {
        let tabs = self.view_tabs(i18n);

        let mut post_list = Column::new().spacing(spacing::SM);
        let ordered = self.ordered_posts();
        if ordered.is_empty() {
            post_list = post_list.push(Text::new(i18n.tr("feed-empty")).size(typography::BODY));
        } else {
            for post in ordered {
                post_list = post_list.push(post_card::view(
                    post,
                    self.is_following(post.author.id),
                    &self.follow_button,
                    i18n,
                ));
            }
        }

        let timeline = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(tabs)
            .push(scrollable(post_list).height(Length::Fill));

        let sidebar = view_topics(i18n, topics);

        Row::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(Container::new(timeline).width(Length::Fill))
            .push(sidebar)
            .into()
    }

    fn view_tabs<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for tab in FeedTab::ALL {
            let mut tab_button =
                button(Text::new(i18n.tr(tab.i18n_key()))).on_press(Message::TabSelected(tab));

            tab_button = if self.active_tab == tab {
                tab_button.style(styles::button::selected)
            } else {
                tab_button.style(styles::button::ghost)
            };

            row = row.push(tab_button);
        }

        row.into()
    }
}

/// Renders the trending-topics sidebar.
fn view_topics<'a>(i18n: &'a I18n, topics: &'a [Topic]) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("feed-trending-title")).size(typography::TITLE_SM));

    for topic in topics {
        let row = Row::new()
            .spacing(spacing::XS)
            .push(Text::new(format!("${}", topic.ticker)).size(typography::BODY))
            .push(
                Text::new(i18n.tr_with_args(
                    "feed-trending-mentions",
                    &[(
                        "count",
                        crate::domain::post::compact_count(topic.mentions).as_str(),
                    )],
                ))
                .size(typography::CAPTION),
            );
        column = column.push(row);
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{posts, profiles};

    fn state() -> State {
        State::new(
            FeedTab::default(),
            posts::feed_posts(),
            profiles::seed_follows(),
        )
    }

    #[test]
    fn default_tab_is_new() {
        assert_eq!(state().active_tab(), FeedTab::New);
    }

    #[test]
    fn selecting_other_tab_changes_state() {
        let mut feed = state();
        let event = feed.update(Message::TabSelected(FeedTab::TopSellers));
        assert_eq!(event, Event::TabChanged(FeedTab::TopSellers));
        assert_eq!(feed.active_tab(), FeedTab::TopSellers);
    }

    #[test]
    fn selecting_active_tab_is_idempotent() {
        let mut feed = state();
        let event = feed.update(Message::TabSelected(FeedTab::New));
        assert_eq!(event, Event::None);
        assert_eq!(feed.active_tab(), FeedTab::New);
    }

    #[test]
    fn new_tab_orders_by_recency() {
        let feed = state();
        let ordered = feed.ordered_posts();
        assert!(ordered
            .windows(2)
            .all(|w| w[0].posted_at >= w[1].posted_at));
    }

    #[test]
    fn top_tab_orders_by_likes() {
        let mut feed = state();
        feed.update(Message::TabSelected(FeedTab::TopSellers));
        let ordered = feed.ordered_posts();
        assert!(ordered
            .windows(2)
            .all(|w| w[0].engagement.likes >= w[1].engagement.likes));
    }

    #[test]
    fn prepend_puts_post_first_on_new_tab() {
        let mut feed = state();
        let mut post = posts::feed_posts().remove(0);
        post.id = crate::domain::post::PostId::new();
        post.posted_at = chrono::Utc::now();
        let id = post.id;

        feed.prepend(post);
        assert_eq!(feed.ordered_posts()[0].id, id);
    }

    #[test]
    fn follow_toggle_flips_state_and_reports_handle() {
        let mut feed = state();
        let author = profiles::LEO_ID;
        assert!(!feed.is_following(author));

        let event = feed.update(Message::FollowButton(
            author,
            crate::ui::follow_button::Message::Toggled,
        ));

        assert!(feed.is_following(author));
        match event {
            Event::FollowChanged { handle, following } => {
                assert!(following);
                assert_eq!(handle, "brandtcapital");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn follow_toggle_twice_restores_original() {
        let mut feed = state();
        let author = profiles::FEATURED_ID;
        let original = feed.is_following(author);

        feed.update(Message::FollowButton(
            author,
            crate::ui::follow_button::Message::Toggled,
        ));
        feed.update(Message::FollowButton(
            author,
            crate::ui::follow_button::Message::Toggled,
        ));

        assert_eq!(feed.is_following(author), original);
    }

    #[test]
    fn feed_view_renders() {
        let i18n = crate::i18n::fluent::I18n::default();
        let topics = crate::data::topics::trending();
        let feed = state();
        let _element = feed.view(&i18n, &topics);
    }
}
