//! Config file handling
//!
//! ```toml
//! [defaults]
//! options = ["--quote-style=cmd", "--no-color"]
//! ```
//!
//! Options are flags, with values either inline (`--flag=value`) or as the
//! next entry. Anything else is ignored with a warning.

use std::path::{Path, PathBuf};

use crate::errors::RawpulseError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "RAWPULSE_CONFIG_DIR";

/// rawpulse configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Flags prepended to every command line
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, RawpulseError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from a specific directory; a missing file yields defaults
    pub fn load_from(config_dir: &Path) -> Result<Self, RawpulseError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| RawpulseError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content, config_dir)
    }

    fn parse(content: &str, config_dir: &Path) -> Result<Self, RawpulseError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| RawpulseError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|p| p.join("rawpulse"))
            .unwrap_or_else(|| PathBuf::from(".rawpulse"))
    }
}
