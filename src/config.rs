// ⚙️ Configuration - Optional TOML file, every key has a default

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when no flag is given
pub const CONFIG_ENV_VAR: &str = "DINO_COMPARE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with the creature records
    pub data_path: PathBuf,

    /// Directory served as static assets (images live under it)
    pub static_dir: PathBuf,

    /// Prefix put in front of every tile image file name
    pub image_prefix: String,

    /// Address the web server listens on
    pub bind_addr: String,

    /// Default tracing filter, RUST_LOG wins when set
    pub log_level: String,

    /// Position of the person tile in the grid
    pub person_slot: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("web/dino.json"),
            static_dir: PathBuf::from("web"),
            image_prefix: "images/".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            person_slot: 4,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Explicit path first, then `DINO_COMPARE_CONFIG`, then defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(env_path) => Self::load(Path::new(&env_path)),
                None => Ok(Config::default()),
            },
        }
    }
}
