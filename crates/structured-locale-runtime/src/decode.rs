use std::collections::BTreeMap;

use serde::Deserialize;
use structured_locale_core::{CoreError, Message, PluralCategory, PluralForms, Translation};

use crate::error::{RuntimeError, RuntimeResult};

#[derive(Debug, Deserialize)]
struct MessagesFile {
    #[serde(default)]
    messages: Vec<MessageRecord>,
}

#[derive(Debug, Deserialize)]
struct MessageRecord {
    id: String,
    translation: RecordTranslation,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordTranslation {
    Plain(String),
    Plural(BTreeMap<String, serde_json::Value>),
}

/// Decodes a go-i18n style `{"messages": [{"id", "translation"}]}` document.
///
/// Plural maps keep the six CLDR category keys with string values; any
/// other key is dropped.
pub fn decode_messages(data: &[u8]) -> RuntimeResult<Vec<Message>> {
    let file: MessagesFile = serde_json::from_slice(data)
        .map_err(|err| RuntimeError::InvalidFormat(err.to_string()))?;
    file.messages.into_iter().map(into_message).collect()
}

fn into_message(record: MessageRecord) -> RuntimeResult<Message> {
    let translation = match record.translation {
        RecordTranslation::Plain(text) => Translation::Plain(text),
        RecordTranslation::Plural(map) => Translation::Plural(plural_forms(map)),
    };
    Message::new(record.id, translation).map_err(|err| match err {
        CoreError::InvalidFormat(reason) | CoreError::InvalidTag(reason) => {
            RuntimeError::InvalidFormat(reason.to_string())
        }
    })
}

fn plural_forms(map: BTreeMap<String, serde_json::Value>) -> PluralForms {
    let mut forms = PluralForms::default();
    for (key, value) in map {
        let Some(category) = PluralCategory::from_name(&key) else {
            continue;
        };
        if let serde_json::Value::String(text) = value {
            forms.set(category, text);
        }
    }
    forms
}
