//! Configuration management for mebel-report
//!
//! Config stored at: ~/.config/mebel-report/config.json

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
///
/// The file path defaults reproduce the office's conventional filenames, so
/// a bare `mebel-report report` works from a directory holding them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Furniture catalog file
    #[serde(default = "default_furniture_file")]
    pub furniture_file: PathBuf,

    /// Store list file
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Order list file
    #[serde(default = "default_order_file")]
    pub order_file: PathBuf,

    /// Report output file
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_furniture_file() -> PathBuf {
    PathBuf::from("furniture.txt")
}

fn default_store_file() -> PathBuf {
    PathBuf::from("store.txt")
}

fn default_order_file() -> PathBuf {
    PathBuf::from("order.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("overdue_report.xlsx")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            furniture_file: default_furniture_file(),
            store_file: default_store_file(),
            order_file: default_order_file(),
            output_file: default_output_file(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("mebel-report");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
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

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mebel Report Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Furniture file: {}", self.furniture_file.display())?;
        writeln!(f, "Store file:     {}", self.store_file.display())?;
        writeln!(f, "Order file:     {}", self.order_file.display())?;
        writeln!(f, "Output file:    {}", self.output_file.display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
