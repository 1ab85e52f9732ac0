// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the localization table from embedded `.ftl` bundles, or from
    /// `i18n_dir` when an override directory is given.
    ///
    /// The active locale is resolved from, in order: CLI flag, config file,
    /// OS locale, falling back to `en-US`.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        let sources = i18n_dir
            .as_deref()
            .and_then(load_sources_from_dir)
            .unwrap_or_else(load_embedded_sources);

        for (locale_str, content) in sources {
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Ok(res) = FluentResource::try_new(content) else {
                continue;
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Keep formatted output free of Unicode isolation marks; the UI
            // renders whole strings, not mixed-direction fragments.
            bundle.set_use_isolating(false);
            if bundle.add_resource(res).is_ok() {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier =
            "en-US".parse().expect("static locale is valid");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves a message key in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves a message key with interpolation arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Reads `(locale, content)` pairs from the embedded assets.
fn load_embedded_sources() -> Vec<(String, String)> {
    Asset::iter()
        .filter_map(|file| {
            let filename = file.as_ref();
            let locale = filename.strip_suffix(".ftl")?.to_string();
            let content = Asset::get(filename)?;
            Some((
                locale,
                String::from_utf8_lossy(content.data.as_ref()).to_string(),
            ))
        })
        .collect()
}

/// Reads `(locale, content)` pairs from an override directory, if usable.
fn load_sources_from_dir(dir: &str) -> Option<Vec<(String, String)>> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut sources = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(locale) = name.strip_suffix(".ftl") else {
            continue;
        };
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((locale.to_string(), content));
        }
    }

    if sources.is_empty() {
        None
    } else {
        Some(sources)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI flag
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn embedded_bundles_include_english_and_french() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales
            .iter()
            .any(|l| l.to_string() == "en-US"));
        assert!(i18n.available_locales.iter().any(|l| l.to_string() == "fr"));
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_reads_config_when_no_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_key_renders_missing_marker() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-key"),
            "MISSING: definitely-not-a-key"
        );
    }

    #[test]
    fn known_key_resolves_without_marker() {
        let i18n = I18n::default();
        let value = i18n.tr("window-title");
        assert!(!value.starts_with("MISSING:"));
        assert!(!value.is_empty());
    }

    #[test]
    fn set_locale_ignores_unavailable_locales() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn tr_with_args_interpolates() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let value = i18n.tr_with_args("notification-follow", &[("handle", "mayatrades")]);
        assert!(value.contains("mayatrades"), "got: {value}");
    }
}
