use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::{CoreError, CoreResult, PluralCategory};

/// Strings keyed by plural category. An empty string means the category is
/// not provided.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub zero: String,
    pub one: String,
    pub two: String,
    pub few: String,
    pub many: String,
    pub other: String,
}

impl PluralForms {
    pub fn get(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::Zero => &self.zero,
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        }
    }

    pub fn set(&mut self, category: PluralCategory, text: impl Into<String>) {
        let slot = match category {
            PluralCategory::Zero => &mut self.zero,
            PluralCategory::One => &mut self.one,
            PluralCategory::Two => &mut self.two,
            PluralCategory::Few => &mut self.few,
            PluralCategory::Many => &mut self.many,
            PluralCategory::Other => &mut self.other,
        };
        *slot = text.into();
    }

    /// The form for `category`, or `other` when that form is empty.
    pub fn select(&self, category: PluralCategory) -> &str {
        let text = self.get(category);
        if text.is_empty() { self.other.as_str() } else { text }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translation {
    Plain(String),
    Plural(PluralForms),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: String,
    translation: Translation,
}

impl Message {
    pub fn new(id: impl Into<String>, translation: Translation) -> CoreResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidFormat("message id is empty"));
        }
        Ok(Self { id, translation })
    }

    pub fn plain(id: impl Into<String>, text: impl Into<String>) -> CoreResult<Self> {
        Self::new(id, Translation::Plain(text.into()))
    }

    pub fn plural(id: impl Into<String>, forms: PluralForms) -> CoreResult<Self> {
        Self::new(id, Translation::Plural(forms))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.translation, Translation::Plural(_))
    }

    /// The plain text, or the `other` form of a plural message.
    pub fn singular(&self) -> &str {
        match &self.translation {
            Translation::Plain(text) => text,
            Translation::Plural(forms) => &forms.other,
        }
    }

    pub fn plural_forms(&self) -> Option<&PluralForms> {
        match &self.translation {
            Translation::Plain(_) => None,
            Translation::Plural(forms) => Some(forms),
        }
    }
}

/// Messages of a single locale keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageSet {
    locale: String,
    messages: BTreeMap<String, Message>,
}

impl MessageSet {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: BTreeMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.get(id)
    }

    /// Inserts `message`, returning the entry it replaced.
    pub fn set(&mut self, message: Message) -> Option<Message> {
        self.messages.insert(message.id.clone(), message)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }
}

impl Extend<Message> for MessageSet {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        for message in iter {
            self.set(message);
        }
    }
}
