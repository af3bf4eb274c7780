//! Configuration management for ebis-karekod
//!
//! Config stored at: ~/.config/ebis-karekod/config.json

use ebis_types::{Error, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Rendered QR size in pixels (the standard's example uses 500)
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,

    /// Directory for generated PNGs; current directory when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_qr_size() -> u32 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            qr_size: default_qr_size(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("config directory not found".to_string()))?
            .join("ebis-karekod");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the preset store
    pub fn preset_dir() -> Result<PathBuf> {
        Self::config_dir()
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Set a config value by key, as used by `config set`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" => {
                self.output_format = match value.to_ascii_lowercase().as_str() {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    other => {
                        return Err(Error::Config(format!("unknown output format: {other}")))
                    }
                };
            }
            "qr_size" => {
                self.qr_size = value
                    .parse()
                    .map_err(|_| Error::Config(format!("qr_size: not a number: {value}")))?;
            }
            "output_dir" => {
                self.output_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(Error::Config(format!("unknown key: {other}"))),
        }
        Ok(())
    }
}
