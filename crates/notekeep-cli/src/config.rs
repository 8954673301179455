//! Persistent CLI configuration and storage location resolution.
//!
//! Precedence for each setting: command-line flag, then environment
//! (`NOTEKEEP_DATA_DIR`, `NOTEKEEP_STORAGE_KEY`), then `config.json`, then the
//! built-in default.

use std::env;
use std::path::{Path, PathBuf};

use notekeep_core::util::normalize_text_option;
use notekeep_core::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "notekeep";

pub const DATA_DIR_ENV: &str = "NOTEKEEP_DATA_DIR";
pub const STORAGE_KEY_ENV: &str = "NOTEKEEP_STORAGE_KEY";
pub const CONFIG_PATH_ENV: &str = "NOTEKEEP_CONFIG";

/// Newest config layout this build reads and writes
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
}

/// Values read from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

/// Where the notes document lives for this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_dir: None,
            storage_key: None,
        }
    }
}

const fn default_config_version() -> u32 {
    CONFIG_VERSION
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)))
}

pub fn default_data_dir() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve a data directory; pass --data-dir".into()))
}

impl CliConfig {
    pub fn load() -> Result<Self, CliError> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            CliError::Config(format!("Failed to read config at {}: {}", path.display(), error))
        })?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            CliError::Config(format!("Failed to parse config at {}: {}", path.display(), error))
        })?;
        if config.version > CONFIG_VERSION {
            return Err(CliError::Config(format!(
                "Config at {} has version {}, newer than supported version {}",
                path.display(),
                config.version,
                CONFIG_VERSION
            )));
        }
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        normalized.version = CONFIG_VERSION;
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.storage_key = normalize_text_option(self.storage_key.take());
        self.data_dir = self
            .data_dir
            .take()
            .filter(|dir| !dir.as_os_str().is_empty());
    }
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os(DATA_DIR_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            storage_key: normalize_text_option(env::var(STORAGE_KEY_ENV).ok()),
        }
    }
}

impl StoreLocation {
    pub fn resolve(
        flag_data_dir: Option<PathBuf>,
        flag_storage_key: Option<String>,
        env: EnvOverrides,
        config: CliConfig,
    ) -> Result<Self, CliError> {
        let data_dir = match flag_data_dir.or(env.data_dir).or(config.data_dir) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let storage_key = normalize_text_option(flag_storage_key)
            .or(env.storage_key)
            .or(config.storage_key)
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        notekeep_core::storage::validate_key(&storage_key)?;
        Ok(Self {
            data_dir,
            storage_key,
        })
    }
}
