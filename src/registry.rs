// SPDX-License-Identifier: MPL-2.0
use crate::bundle::LocaleBundle;
use crate::config::{Config, DEFAULT_FALLBACK_TO_DEFAULT, DEFAULT_LOCALE};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The global locale registry: one bundle per embedded locale file, plus
/// the active locale. Bundles are immutable once loaded; every lookup
/// takes `&self`.
pub struct LocaleRegistry {
    bundles: HashMap<LanguageIdentifier, LocaleBundle>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
    fallback_to_default: bool,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new(None, &Config::default()).expect("embedded locale files should load")
    }
}

impl LocaleRegistry {
    /// Loads every embedded `assets/i18n/*.toml` bundle and resolves the
    /// active locale from the caller override, the config file, or the OS.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref());
                register_bundle(filename, &source, &mut bundles, &mut available_locales)?;
            }
        }
        available_locales.sort();

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Ok(Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
            fallback_to_default: config
                .fallback_to_default
                .unwrap_or(DEFAULT_FALLBACK_TO_DEFAULT),
        })
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn bundle(&self, locale: &LanguageIdentifier) -> Result<&LocaleBundle> {
        self.bundles
            .get(locale)
            .ok_or_else(|| Error::UnknownLocale(locale.to_string()))
    }

    /// Strict lookup in the active locale. No fallback; a missing key or a
    /// path ending on a subtree is the caller's to handle.
    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.bundle(&self.current_locale)?.lookup(key)
    }

    /// Lookup with the conventional fallback policy: the active locale
    /// first, then the default locale, then the key itself. Never fails;
    /// intended for rendering paths where a raw key on screen beats a
    /// crash.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Ok(value) => value,
            Err(_) if self.fallback_to_default && self.current_locale != self.default_locale => {
                self.bundle(&self.default_locale)
                    .and_then(|bundle| bundle.lookup(key))
                    .unwrap_or(key)
            }
            Err(_) => key,
        }
    }

    /// Leaf paths of the default-locale reference that `locale` has no
    /// translation for.
    pub fn missing_in(&self, locale: &LanguageIdentifier) -> Result<Vec<String>> {
        let reference = self.bundle(&self.default_locale)?;
        Ok(self.bundle(locale)?.missing_paths(reference))
    }
}

/// Parses one embedded locale file into the bundle map. A filename whose
/// stem is not a language identifier is not a loadable locale and is
/// skipped; a malformed bundle in a recognized locale file still fails
/// the load.
fn register_bundle(
    filename: &str,
    source: &str,
    bundles: &mut HashMap<LanguageIdentifier, LocaleBundle>,
    available_locales: &mut Vec<LanguageIdentifier>,
) -> Result<()> {
    if let Some(locale_str) = filename.strip_suffix(".toml") {
        if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
            let bundle = LocaleBundle::from_toml(locale.clone(), source)?;
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
    }
    Ok(())
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check caller override
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
