#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod args;
mod bundle;
mod error;
mod fallback;
mod language_tag;
mod localizer;
mod message;
mod plural;
mod template;

pub use args::{Args, Value};
pub use bundle::Bundle;
pub use error::{CoreError, CoreResult};
pub use fallback::{best_match, fallback_chain};
pub use language_tag::{Ancestors, LanguageTag};
pub use localizer::Localizer;
pub use message::{Message, MessageSet, PluralForms, Translation};
pub use plural::{PluralCategory, PluralRule, plural_category};
pub use template::substitute;
