use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "endzeit.toml";

/// Section every story starts in.
pub const ENTRY_SECTION: &str = "Start";

/// Names of the good and the death ending, compared case-insensitively.
pub const TERMINAL_SECTIONS: [&str; 2] = ["Ende", "Tod"];

/// Shown when the current section does not exist.
pub const FALLBACK_TEXT: &str = "Section not found";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ERROR: Could not read config file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("ERROR: Unable to load config from `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("ERROR: Invalid text speed `{0}` (expected slow, normal or fast)")]
    InvalidTextSpeed(String),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(default)]
pub struct Config {
    pub entry_section: String,
    pub terminal_sections: Vec<String>,
    pub fallback_text: String,
    pub text_speed: TextSpeed,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_section: ENTRY_SECTION.to_string(),
            terminal_sections: TERMINAL_SECTIONS.iter().map(|s| s.to_string()).collect(),
            fallback_text: FALLBACK_TEXT.to_string(),
            text_speed: TextSpeed::default(),
            strict: false,
        }
    }
}

/// Delay between two revealed characters of the typewriter.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone, Copy, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl TextSpeed {
    pub fn interval_ms(self) -> u64 {
        match self {
            TextSpeed::Slow => 60,
            TextSpeed::Normal => 30,
            TextSpeed::Fast => 10,
        }
    }
}

impl FromStr for TextSpeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(TextSpeed::Slow),
            "normal" => Ok(TextSpeed::Normal),
            "fast" => Ok(TextSpeed::Fast),
            _ => Err(ConfigError::InvalidTextSpeed(s.to_string())),
        }
    }
}

impl Config {
    /// Loads `endzeit.toml` from `source_path`. A missing file is not an
    /// error; the defaults are used instead.
    pub fn load<T>(source_path: T) -> Result<Config, ConfigError>
    where
        T: AsRef<Path>,
    {
        let filename = source_path.as_ref().join(CONFIG_FILE_NAME);
        if !filename.exists() {
            return Ok(Config::default());
        }
        Self::load_file(filename)
    }

    pub fn load_file<T>(filename: T) -> Result<Config, ConfigError>
    where
        T: AsRef<Path>,
    {
        let path = filename.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
