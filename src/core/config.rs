//! # Configuration
//!
//! User settings live at `~/.config/hexfetch/config.toml`. Everything is
//! optional; a missing or unreadable file just means defaults. The only
//! setting today is the default deck, written back by the options picker.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Deck id used when `--deck` is not given (e.g. "default", "tarot").
    pub default_deck: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
            ConfigError::NoConfigDir => write!(f, "could not determine config directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Path to `~/.config/hexfetch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexfetch").join("config.toml"))
}

/// Load the user config, degrading to defaults when the file is missing
/// or broken. Never fatal: the oracle runs with the default deck either way.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        warn!("could not determine config directory, using defaults");
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("malformed config {}: {e}", path.display());
                Config::default()
            }
        },
        Err(e) => {
            warn!("failed to read config {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Write the config back, creating `~/.config/hexfetch/` if needed.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(&path, contents).map_err(ConfigError::Io)?;
    info!("saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_deck() {
        assert!(Config::default().default_deck.is_none());
    }

    #[test]
    fn sparse_toml_parses() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.default_deck.is_none());
    }

    #[test]
    fn deck_round_trips_through_toml() {
        let config = Config {
            default_deck: Some("tarot".to_string()),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.default_deck.as_deref(), Some("tarot"));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config: Config = toml::from_str("default_deck = \"x\"\nfuture_knob = 3\n").unwrap();
        assert_eq!(config.default_deck.as_deref(), Some("x"));
    }
}
