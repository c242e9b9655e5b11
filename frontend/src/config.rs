use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

/// User configuration, read from `<config dir>/dotmatrix/config.toml`.
/// Everything is optional; a missing or broken file means defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window scale factor.
    pub scale: u32,
    /// Key bindings by button name ("A", "Start", ...) to SDL scancode
    /// names ("Z", "Return", ...).
    pub keys: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 3,
            keys: HashMap::new(),
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dotmatrix").join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(text) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
