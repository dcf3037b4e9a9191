//! CLDR plural categories for integer counts.
//!
//! Languages are grouped into [`PluralRule`] families. Every language code
//! maps to exactly one family, unknown codes included, so
//! [`plural_category`] is total.

use core::fmt;

use crate::LanguageTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural rule families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// Always `other` (ja, ko, zh, ...).
    NoPlural,
    /// `one` for 1, `other` otherwise. Also the rule for unknown languages.
    English,
    /// `one` for 0 and 1.
    French,
    /// ru, uk, be.
    Slavic,
    Polish,
    /// cs, sk.
    Czech,
    Arabic,
}

impl PluralRule {
    pub fn for_language(language: &str) -> Self {
        match language {
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" => PluralRule::NoPlural,
            "fr" => PluralRule::French,
            "ru" | "uk" | "be" => PluralRule::Slavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            "ar" => PluralRule::Arabic,
            _ => PluralRule::English,
        }
    }

    /// Family for a locale string; unparseable input gets the English rule.
    pub fn for_locale(locale: &str) -> Self {
        match LanguageTag::parse(locale) {
            Ok(tag) => Self::for_language(tag.language()),
            Err(_) => PluralRule::English,
        }
    }

    pub fn category(self, count: u64) -> PluralCategory {
        match self {
            PluralRule::NoPlural => PluralCategory::Other,
            PluralRule::English => english(count),
            PluralRule::French => french(count),
            PluralRule::Slavic => slavic(count),
            PluralRule::Polish => polish(count),
            PluralRule::Czech => czech(count),
            PluralRule::Arabic => arabic(count),
        }
    }
}

pub fn plural_category(locale: &str, count: u64) -> PluralCategory {
    PluralRule::for_locale(locale).category(count)
}

fn english(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french(n: u64) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn slavic(n: u64) -> PluralCategory {
    let (mod10, mod100) = (n % 10, n % 100);
    if mod10 == 1 && mod100 != 11 {
        return PluralCategory::One;
    }
    if is_slavic_few(mod10, mod100) {
        return PluralCategory::Few;
    }
    PluralCategory::Many
}

fn polish(n: u64) -> PluralCategory {
    if n == 1 {
        return PluralCategory::One;
    }
    if is_slavic_few(n % 10, n % 100) {
        return PluralCategory::Few;
    }
    PluralCategory::Many
}

fn is_slavic_few(mod10: u64, mod100: u64) -> bool {
    (2..=4).contains(&mod10) && !(12..=14).contains(&mod100)
}

fn czech(n: u64) -> PluralCategory {
    match n {
        1 => PluralCategory::One,
        2..=4 => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

fn arabic(n: u64) -> PluralCategory {
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ => match n % 100 {
            3..=10 => PluralCategory::Few,
            11.. => PluralCategory::Many,
            _ => PluralCategory::Other,
        },
    }
}
