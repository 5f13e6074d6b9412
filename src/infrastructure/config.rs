//! Configuration management

use crate::error::{MamaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Directory holding mama's own files inside the home directory
pub const CONFIG_DIR: &str = ".mama";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Journal file, relative to the home directory unless absolute
    pub data_file: PathBuf,
    /// Default tracing level when MAMA_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("mama.txt"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from .mama/config.toml, falling back to defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(MamaError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MamaError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.log_filter()?;
        Ok(config)
    }

    /// Save config to .mama/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let mama_dir = path.join(CONFIG_DIR);

        if !mama_dir.exists() {
            fs::create_dir_all(&mama_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MamaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(mama_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Absolute location of the journal file for a home directory
    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            home.join(&self.data_file)
        }
    }

    pub fn log_filter(&self) -> Result<LevelFilter> {
        parse_log_level(&self.log_level)
    }

    /// Resolve the home directory: explicit flag, then MAMA_HOME, then cwd
    pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }

        if let Ok(home) = std::env::var("MAMA_HOME") {
            if !home.trim().is_empty() {
                return Ok(PathBuf::from(home));
            }
        }

        Ok(std::env::current_dir()?)
    }
}

pub fn parse_log_level(value: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(value.trim())
        .map_err(|_| MamaError::Config(format!("Invalid log level: '{}'", value)))
}
