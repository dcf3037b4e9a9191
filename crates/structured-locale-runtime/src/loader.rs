use std::fs;
use std::path::{Path, PathBuf};

use structured_locale_core::Bundle;
use tracing::{debug, trace};

use crate::builtin::add_builtin_locales;
use crate::decode::decode_messages;
use crate::error::{RuntimeError, RuntimeResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    /// Replace the whole message set of the locale.
    Replace,
    /// Merge into the existing message set.
    Override,
}

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub default_locale: String,
    pub include_builtin: bool,
    pub locale_dirs: Vec<PathBuf>,
    pub override_dirs: Vec<PathBuf>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            include_builtin: true,
            locale_dirs: Vec::new(),
            override_dirs: Vec::new(),
        }
    }
}

/// Decodes `data` and replaces the message set of `locale` with it.
pub fn add_locale_json(bundle: &mut Bundle, locale: &str, data: &[u8]) -> RuntimeResult<String> {
    load_json(bundle, locale, data, LoadMode::Replace)
}

/// Decodes `data` and merges it into the message set of `locale`.
pub fn add_locale_overrides_json(
    bundle: &mut Bundle,
    locale: &str,
    data: &[u8],
) -> RuntimeResult<String> {
    load_json(bundle, locale, data, LoadMode::Override)
}

pub fn load_json(
    bundle: &mut Bundle,
    locale: &str,
    data: &[u8],
    mode: LoadMode,
) -> RuntimeResult<String> {
    let messages = decode_messages(data)?;
    let count = messages.len();
    let result = match mode {
        LoadMode::Replace => bundle.add_locale(locale, messages),
        LoadMode::Override => bundle.add_locale_overrides(locale, messages),
    };
    let normalized = result.map_err(|_| RuntimeError::InvalidLocale(locale.to_string()))?;
    debug!(locale = %normalized, messages = count, ?mode, "loaded locale messages");
    Ok(normalized)
}

/// Loads every `<locale>.json` file of `dir` in file name order.
///
/// A missing directory loads nothing. Returns the normalized locales that
/// were loaded.
pub fn load_locale_dir(
    bundle: &mut Bundle,
    dir: &Path,
    mode: LoadMode,
) -> RuntimeResult<Vec<String>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "locale directory not found, skipping");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let locale = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| RuntimeError::InvalidLocale(path.display().to_string()))?
            .to_string();
        trace!(path = %path.display(), %locale, "reading locale file");
        let data = fs::read(&path)?;
        let normalized = load_json(bundle, &locale, &data, mode).map_err(|err| match err {
            RuntimeError::InvalidFormat(reason) => {
                RuntimeError::InvalidFormat(format!("{}: {reason}", path.display()))
            }
            other => other,
        })?;
        loaded.push(normalized);
    }
    Ok(loaded)
}

/// Builds a bundle from the builtin dataset (when enabled), then the locale
/// directories, then the override directories.
pub fn load_bundle(options: &LoadOptions) -> RuntimeResult<Bundle> {
    let mut bundle = Bundle::new(&options.default_locale);
    if options.include_builtin {
        add_builtin_locales(&mut bundle);
    }
    for dir in &options.locale_dirs {
        load_locale_dir(&mut bundle, dir, LoadMode::Replace)?;
    }
    for dir in &options.override_dirs {
        load_locale_dir(&mut bundle, dir, LoadMode::Override)?;
    }
    Ok(bundle)
}
