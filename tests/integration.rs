// SPDX-License-Identifier: MPL-2.0
use bullboard::app::config::{self, Config};
use bullboard::data::{posts, profiles};
use bullboard::i18n::fluent::I18n;
use bullboard::ui::composer;
use bullboard::ui::feed::{self, FeedTab};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), None, &french_config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn feed_default_tab_comes_from_config() {
    let config: Config = toml::from_str("[feed]\ndefault_tab = \"top-sellers\"\n")
        .expect("config with feed tab should parse");
    assert_eq!(config.feed.default_tab, Some(FeedTab::TopSellers));
}

#[test]
fn composed_post_flows_into_the_feed() {
    let mut feed_state = feed::State::new(
        FeedTab::default(),
        posts::feed_posts(),
        profiles::seed_follows(),
    );
    let posts_before = feed_state.posts().len();

    // Drive the composer through its public contract.
    let mut composer_state = composer::State::new();
    composer_state.set_text("hello");
    assert_eq!(
        composer_state.update(composer::Message::SubmitRequested),
        composer::Event::Submit
    );

    // Simulated latency elapsed: the submission becomes a feed post.
    let submission = composer_state.take_submission();
    assert_eq!(submission.text, "hello");

    let viewer = profiles::viewer_profile();
    feed_state.prepend(bullboard::domain::post::Post {
        id: bullboard::domain::post::PostId::new(),
        author: bullboard::domain::post::Author {
            id: viewer.id,
            display_name: viewer.display_name,
            handle: viewer.handle,
        },
        posted_at: chrono::Utc::now(),
        kind: bullboard::domain::post::PostKind::Article,
        title: None,
        body: submission.text,
        has_media: submission.had_attachments,
        sentiment: submission.sentiment,
        engagement: bullboard::domain::post::Engagement::default(),
    });

    assert_eq!(feed_state.posts().len(), posts_before + 1);
    assert_eq!(feed_state.ordered_posts()[0].body, "hello");

    // The composer is reusable and resource-clean afterwards.
    assert_eq!(composer_state.registry().live_count(), 0);
    assert_eq!(composer_state.draft().text(), "");
}

#[test]
fn attachment_capacity_scenario() {
    let mut composer_state = composer::State::new();

    let images: Vec<composer::PickedImage> = (0..5)
        .map(|i| composer::PickedImage {
            file_name: format!("chart-{i}.png"),
            bytes: vec![0u8; 8],
            width: 2,
            height: 2,
        })
        .collect();

    let outcome = composer_state.add_images(images);
    assert_eq!(outcome.accepted, 4);
    assert_eq!(outcome.ignored, 1);
    assert!(outcome.capacity_reached());
}
