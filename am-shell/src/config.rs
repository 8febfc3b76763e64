//! Shell configuration
//!
//! Read from `$AM_DESKTOP_CONFIG`, else `<config_dir>/am-desktop/config.toml`.
//! Every key is optional:
//!
//! ```toml
//! log_level = "debug"
//! storage_dir = "/tmp/am-desktop"
//! audio = false
//! skip_boot = true
//!
//! [[sections]]
//! id = "blog"
//! title = "Notes"
//! icon = "[LOG]"
//! component = "Blog"
//! ```

use am_core::storage::APP_DIR_NAME;
use am_widgets::SectionDescriptor;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "AM_DESKTOP_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Default `env_logger` filter; `RUST_LOG` still wins
    pub log_level: String,
    /// Where settings and app data are kept
    pub storage_dir: Option<PathBuf>,
    /// Open an audio output; off keeps every cue silent
    pub audio: bool,
    pub skip_boot: bool,
    /// Replaces the built-in sections when it validates
    pub sections: Option<Vec<SectionDescriptor>>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage_dir: None,
            audio: true,
            skip_boot: false,
            sections: None,
        }
    }
}

impl ShellConfig {
    /// Config file location, `None` when no config dir is known
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        Some(path)
    }

    /// Load from the default location; a missing file is not an error
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Configured storage dir, else `<config_dir>/am-desktop`
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
    }
}
