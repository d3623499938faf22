//! Configuration: a small optional TOML file plus one environment
//! variable for the API key. The key never lives in the file.

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::storage::Storage;

const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Model identifier passed to the provider.
    pub model: String,

    /// Standing authorization for scheduling actions. The --authorize
    /// flag enables it per-run instead.
    pub authorize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            authorize: false,
        }
    }
}

impl Config {
    /// Loads `~/.sous/config.toml`. A missing file (or home
    /// directory) yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("could not read {}: {e}", path.display())),
        };
        toml::from_str(&raw).map_err(|e| format!("could not parse {}: {e}", path.display()))
    }

    pub fn path() -> Option<PathBuf> {
        Storage::default_root().map(|root| root.join("config.toml"))
    }

    /// The provider API key, read from the environment only.
    pub fn api_key() -> Result<String, String> {
        env::var(API_KEY_VAR)
            .map_err(|_| format!("{API_KEY_VAR} is not set; export it to enable model calls"))
    }
}
