use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use structured_locale_runtime::LoadOptions;

use crate::error::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "structured-locale.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub default_locale: String,
    pub locale_dirs: Vec<String>,
    pub override_dirs: Vec<String>,
    pub include_builtin: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locale_dirs: vec!["locales".to_string()],
            override_dirs: Vec::new(),
            include_builtin: true,
        }
    }
}

impl CliConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            default_locale: self.default_locale.clone(),
            include_builtin: self.include_builtin,
            locale_dirs: self.locale_dirs.iter().map(PathBuf::from).collect(),
            override_dirs: self.override_dirs.iter().map(PathBuf::from).collect(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}
