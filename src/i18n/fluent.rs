// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

/// Locale used when nothing else matches, and for keys missing elsewhere.
fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|name| name.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match load_bundle(&locale, &String::from_utf8_lossy(content.data.as_ref())) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => tracing::warn!(%locale, "skipping unreadable translation file"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

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

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments, e.g. `("counter", "2/7")`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let bundles = [
            self.bundles.get(&self.current_locale),
            self.bundles.get(&default_locale()),
        ];
        for bundle in bundles.into_iter().flatten() {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_bundle(locale: &LanguageIdentifier, source: &str) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source.to_string()).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Interpolated values are plain text in iced widgets.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |candidate: &str| {
        candidate
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. Check OS locale, then its bare language
    let os_locale = sys_locale::get_locale()?;
    supported(&os_locale).or_else(|| {
        let language = os_locale.split(['-', '_']).next()?;
        supported(language)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("valid language tag")
    }

    fn available() -> Vec<LanguageIdentifier> {
        vec![lang("en-US"), lang("fr")]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let resolved = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let resolved = resolve_locale(None, &config, &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn test_resolve_locale_ignores_unknown_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let resolved = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.contains(&lang("en-US")));
        assert!(i18n.available_locales.contains(&lang("fr")));
        assert_eq!(i18n.tr("gallery-see-more"), "See more");
    }

    #[test]
    fn french_translation_and_args() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(i18n.tr("gallery-see-more"), "Voir plus");
        assert_eq!(
            i18n.tr_with_args("modal-counter", &[("counter", "2/7")]),
            "Photo 2/7"
        );
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(default_locale(), lang("en-US"));
        assert!(resolve_locale(Some("fr".into()), &Config::default(), &[]).is_none());
    }

    #[test]
    fn unknown_locale_keeps_current_and_translates() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        i18n.set_locale(lang("de"));
        assert_eq!(i18n.current_locale(), &lang("en-US"));
        assert_eq!(i18n.tr("gallery-see-more"), "See more");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
