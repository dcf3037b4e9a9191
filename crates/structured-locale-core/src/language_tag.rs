use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// A parsed `language[-Script][-REGION]` identifier.
///
/// Only the language, script and region subtags are kept. Variants,
/// extensions and private-use subtags are dropped during parsing. The
/// default value has no language and is the terminal tag of
/// [`LanguageTag::parent`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LanguageTag {
    /// Parses a tag, accepting `-` or `_` as separator in any letter case.
    pub fn parse(input: &str) -> CoreResult<Self> {
        if input.is_empty() {
            return Err(CoreError::InvalidTag("language tag is empty"));
        }

        let normalized = input.replace('_', "-");
        let mut subtags = normalized.split('-');
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !is_alpha(language) {
            return Err(CoreError::InvalidTag("invalid language subtag"));
        }

        let mut tag = Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
        };

        for part in subtags.filter(|part| !part.is_empty()) {
            if part.len() == 4 && tag.script.is_none() {
                tag.script = Some(titlecase(part));
            } else if part.len() == 2 && tag.region.is_none() {
                tag.region = Some(part.to_ascii_uppercase());
            } else if part.len() == 3 && tag.region.is_none() && is_digit(part) {
                tag.region = Some(String::from(part));
            }
        }

        Ok(tag)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn is_zero(&self) -> bool {
        self.language.is_empty()
    }

    /// Drops the most specific subtag: region first, then script, then
    /// everything.
    pub fn parent(&self) -> Self {
        if self.region.is_some() {
            return Self {
                language: self.language.clone(),
                script: self.script.clone(),
                region: None,
            };
        }
        if self.script.is_some() {
            return Self {
                language: self.language.clone(),
                script: None,
                region: None,
            };
        }
        Self::default()
    }

    /// Walks `self`, then each parent, stopping before the zero tag.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ancestors {
    next: LanguageTag,
}

impl Iterator for Ancestors {
    type Item = LanguageTag;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_zero() {
            return None;
        }
        let parent = self.next.parent();
        Some(core::mem::replace(&mut self.next, parent))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl FromStr for LanguageTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LanguageTag {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_digit(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_digit())
}

fn titlecase(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(value.len());
    output.push(first.to_ascii_uppercase());
    for ch in chars {
        output.push(ch.to_ascii_lowercase());
    }
    output
}
