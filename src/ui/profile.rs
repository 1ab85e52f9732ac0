// SPDX-License-Identifier: MPL-2.0
//! Profile screen: header with stats and follow button, and the four-way
//! timeline below it.
//!
//! The pinned post always renders first in the posts tab, regardless of
//! chronological order. The header follow button runs in self-managed mode:
//! nothing else owns that boolean.

use crate::domain::post::Post;
use crate::domain::profile::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::components::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::feed::post_card;
use crate::ui::follow_button;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Timeline segment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineTab {
    #[default]
    Posts,
    Replies,
    Media,
    Likes,
}

impl TimelineTab {
    /// Returns the i18n label key for this tab.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TimelineTab::Posts => "profile-tab-posts",
            TimelineTab::Replies => "profile-tab-replies",
            TimelineTab::Media => "profile-tab-media",
            TimelineTab::Likes => "profile-tab-likes",
        }
    }

    /// All tabs, in display order.
    pub const ALL: [TimelineTab; 4] = [
        TimelineTab::Posts,
        TimelineTab::Replies,
        TimelineTab::Media,
        TimelineTab::Likes,
    ];
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(TimelineTab),
    FollowButton(follow_button::Message),
    /// Forwarded from embedded post cards; follow state there belongs to
    /// the feed, so the profile ignores it.
    PostCard(crate::ui::feed::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The active tab actually changed (re-selecting is a no-op).
    TabChanged(TimelineTab),
    FollowChanged { handle: String, following: bool },
}

/// Profile screen state.
pub struct State {
    profile: Profile,
    timeline: Vec<Post>,
    replies: Vec<Post>,
    media: Vec<Post>,
    likes: Vec<Post>,
    active_tab: TimelineTab,
    follow: follow_button::State,
    /// Controlled-state placeholder for the embedded post cards.
    card_follow: follow_button::State,
}

impl State {
    #[must_use]
    pub fn new(
        profile: Profile,
        timeline: Vec<Post>,
        replies: Vec<Post>,
        media: Vec<Post>,
        likes: Vec<Post>,
    ) -> Self {
        Self {
            profile,
            timeline,
            replies,
            media,
            likes,
            active_tab: TimelineTab::default(),
            follow: follow_button::State::self_managed(false),
            card_follow: follow_button::State::controlled(),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn active_tab(&self) -> TimelineTab {
        self.active_tab
    }

    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow.is_following(None)
    }

    /// Posts visible under the active tab. On the posts tab the pinned post
    /// renders first, the rest newest first.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.active_tab {
            TimelineTab::Posts => {
                let mut posts: Vec<&Post> = self.timeline.iter().collect();
                posts.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));

                if let Some(pinned_id) = self.profile.pinned_post {
                    if let Some(pos) = posts.iter().position(|post| post.id == pinned_id) {
                        let pinned = posts.remove(pos);
                        posts.insert(0, pinned);
                    }
                }
                posts
            }
            TimelineTab::Replies => self.replies.iter().collect(),
            TimelineTab::Media => self.media.iter().collect(),
            TimelineTab::Likes => self.likes.iter().collect(),
        }
    }

    /// Processes a profile message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                if self.active_tab == tab {
                    return Event::None;
                }
                self.active_tab = tab;
                Event::TabChanged(tab)
            }
            Message::FollowButton(button_message) => {
                let follow_button::Event::Toggled(next) =
                    follow_button::update(&mut self.follow, button_message, None);

                Event::FollowChanged {
                    handle: self.profile.handle.clone(),
                    following: next,
                }
            }
            Message::PostCard(_) => Event::None,
        }
    }

    /// Renders the profile screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = self.view_header(i18n);
        let tabs = self.view_tabs(i18n);

        let mut post_list = Column::new().spacing(spacing::SM);
        let posts = self.visible_posts();
        if posts.is_empty() {
            post_list =
                post_list.push(Text::new(i18n.tr("profile-empty-tab")).size(typography::BODY));
        } else {
            let pinned_id = match self.active_tab {
                TimelineTab::Posts => self.profile.pinned_post,
                _ => None,
            };

            for post in posts {
                let mut entry = Column::new().spacing(spacing::XXS);

                if pinned_id == Some(post.id) {
                    entry = entry.push(
                        Row::new()
                            .spacing(spacing::XXS)
                            .align_y(alignment::Vertical::Center)
                            .push(icons::pin(typography::CAPTION))
                            .push(
                                Text::new(i18n.tr("post-pinned-badge"))
                                    .size(typography::CAPTION),
                            ),
                    );
                }

                entry = entry.push(
                    post_card::view(post, false, &self.card_follow, i18n).map(Message::PostCard),
                );
                post_list = post_list.push(entry);
            }
        }

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(tabs)
            .push(scrollable(post_list).height(Length::Fill));

        Container::new(content).width(Length::Fill).into()
    }

    fn view_header<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let stats = Row::new()
            .spacing(spacing::MD)
            .push(stat_text(i18n, "profile-stats-posts", self.profile.stats.posts))
            .push(stat_text(
                i18n,
                "profile-stats-followers",
                self.profile.stats.followers,
            ))
            .push(stat_text(
                i18n,
                "profile-stats-following",
                self.profile.stats.following,
            ));

        let identity = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(self.profile.display_name.as_str()).size(typography::TITLE_MD))
            .push(Text::new(format!("@{}", self.profile.handle)).size(typography::CAPTION))
            .push(Text::new(self.profile.bio.as_str()).size(typography::BODY))
            .push(stats);

        let follow = follow_button::view(
            &self.follow,
            follow_button::ViewContext {
                i18n,
                external: None,
            },
        )
        .map(Message::FollowButton);

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(avatar::view(self.profile.initials(), sizing::AVATAR_LG))
            .push(identity)
            .push(Space::new().width(Length::Fill))
            .push(follow);

        Container::new(row)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }

    fn view_tabs<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for tab in TimelineTab::ALL {
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

fn stat_text<'a>(i18n: &I18n, key: &str, count: u32) -> Element<'a, Message> {
    let formatted = crate::domain::post::compact_count(count);
    Text::new(i18n.tr_with_args(key, &[("count", formatted.as_str())]))
        .size(typography::CAPTION)
        .into()
}
