use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::{
    CoreResult, LanguageTag, Localizer, Message, MessageSet, best_match, fallback_chain,
};

/// Message sets for several locales plus the locale every lookup ends on.
///
/// Locale keys are always stored in their normalized `language[-Script][-REGION]`
/// form, so `fr_ca`, `FR-CA` and `fr-CA` address the same set.
#[derive(Clone, Debug, Default)]
pub struct Bundle {
    default_locale: String,
    locales: BTreeMap<String, MessageSet>,
}

impl Bundle {
    /// A parseable `default_locale` is normalized; anything else is kept
    /// verbatim.
    pub fn new(default_locale: &str) -> Self {
        let default_locale = match LanguageTag::parse(default_locale) {
            Ok(tag) => tag.to_string(),
            Err(_) => String::from(default_locale),
        };
        Self {
            default_locale,
            locales: BTreeMap::new(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Replaces every message of `locale` with `messages`.
    ///
    /// Returns the normalized locale key. Fails without touching the bundle
    /// when `locale` does not parse.
    pub fn add_locale<I>(&mut self, locale: &str, messages: I) -> CoreResult<String>
    where
        I: IntoIterator<Item = Message>,
    {
        let normalized = normalize(locale)?;
        let mut set = MessageSet::new(normalized.clone());
        set.extend(messages);
        self.locales.insert(normalized.clone(), set);
        Ok(normalized)
    }

    /// Merges `messages` into `locale`, creating its set when missing. Ids
    /// not present in `messages` keep their current entry.
    pub fn add_locale_overrides<I>(&mut self, locale: &str, messages: I) -> CoreResult<String>
    where
        I: IntoIterator<Item = Message>,
    {
        let normalized = normalize(locale)?;
        self.locales
            .entry(normalized.clone())
            .or_insert_with(|| MessageSet::new(normalized.clone()))
            .extend(messages);
        Ok(normalized)
    }

    pub fn get_message(&self, locale: &str, id: &str) -> Option<&Message> {
        self.resolve(locale, id).map(|(_, message)| message)
    }

    /// Like [`Bundle::get_message`], also reporting which locale of the
    /// fallback chain supplied the message.
    pub fn resolve(&self, locale: &str, id: &str) -> Option<(&str, &Message)> {
        fallback_chain(locale, &self.default_locale)
            .iter()
            .filter_map(|candidate| self.locales.get(candidate))
            .find_map(|set| set.get(id).map(|message| (set.locale(), message)))
    }

    pub fn message_set(&self, locale: &str) -> Option<&MessageSet> {
        let normalized = normalize(locale).ok()?;
        self.locales.get(&normalized)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.message_set(locale).is_some()
    }

    pub fn available_locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// The loaded locale that best serves `requested`, or the default locale.
    pub fn best_locale(&self, requested: &str) -> String {
        best_match(requested, self.available_locales(), &self.default_locale)
    }

    pub fn localizer(&self, locale: &str) -> Localizer<'_> {
        Localizer::new(self, locale)
    }
}

fn normalize(locale: &str) -> CoreResult<String> {
    Ok(LanguageTag::parse(locale)?.to_string())
}
