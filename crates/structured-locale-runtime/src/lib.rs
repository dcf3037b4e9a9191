#![forbid(unsafe_code)]

mod builtin;
mod decode;
mod error;
mod loader;

pub use crate::builtin::{BUILTIN_LOCALES, add_builtin_locales, default_bundle};
pub use crate::decode::decode_messages;
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::loader::{
    LoadMode, LoadOptions, add_locale_json, add_locale_overrides_json, load_bundle, load_json,
    load_locale_dir,
};
