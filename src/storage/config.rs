use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::CombinationType;
use crate::error::Result;

pub const CONFIG_FILE: &str = "phrase-gen.toml";

/// What `generate` prints once every combination has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Fail with an error.
    #[default]
    Error,
    /// Print the fallback value.
    Default,
    /// Print the fallback as a message.
    Message,
    /// Print nothing.
    Silent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_words: Option<PathBuf>,
    #[serde(default = "default_words")]
    pub words: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination: Option<CombinationType>,
    #[serde(default)]
    pub verify: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub on_exhausted: ExhaustionPolicy,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_words() -> u8 {
    2
}

fn default_fallback() -> String {
    "all combinations used".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exclude: Vec::new(),
            custom_words: None,
            words: default_words(),
            combination: None,
            verify: false,
            seed: None,
            on_exhausted: ExhaustionPolicy::default(),
            fallback: default_fallback(),
        }
    }
}

pub fn default_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
