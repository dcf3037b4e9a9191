use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::LanguageTag;

/// Locales to probe for `requested`, most specific first.
///
/// The chain is the parent walk of the parsed tag followed by
/// `default_locale` when it is non-empty and not already present. An
/// unparseable request yields only the default.
pub fn fallback_chain(requested: &str, default_locale: &str) -> Vec<String> {
    let Ok(tag) = LanguageTag::parse(requested) else {
        if default_locale.is_empty() {
            return Vec::new();
        }
        return vec![String::from(default_locale)];
    };

    let mut chain: Vec<String> = Vec::new();
    for ancestor in tag.ancestors() {
        let locale = ancestor.to_string();
        if !chain.contains(&locale) {
            chain.push(locale);
        }
    }

    if !default_locale.is_empty() && !chain.iter().any(|locale| locale == default_locale) {
        chain.push(String::from(default_locale));
    }
    chain
}

/// Picks the entry of `available` that best serves `requested`.
///
/// Returns the available locale in its original spelling, or
/// `default_locale` when nothing in the fallback chain is available.
/// Unparseable entries of `available` never match.
pub fn best_match<I, S>(requested: &str, available: I, default_locale: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut available = available.into_iter().peekable();
    if available.peek().is_none() {
        return String::from(default_locale);
    }

    let mut normalized: BTreeMap<String, String> = BTreeMap::new();
    for locale in available {
        let locale = locale.as_ref();
        let Ok(tag) = LanguageTag::parse(locale) else {
            continue;
        };
        normalized.insert(tag.to_string(), String::from(locale));
    }

    fallback_chain(requested, default_locale)
        .into_iter()
        .find_map(|candidate| normalized.get(&candidate).cloned())
        .unwrap_or_else(|| String::from(default_locale))
}
