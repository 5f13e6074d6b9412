//! Config management use case

use crate::error::{MamaError, Result};
use crate::infrastructure::config::parse_log_level;
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and updating `.mama/config.toml`
pub struct ConfigService {
    home: PathBuf,
}

impl ConfigService {
    pub fn new(home: PathBuf) -> Self {
        ConfigService { home }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.home)?;

        match key {
            "data_file" => Ok(config.data_file.display().to_string()),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.home)?;

        match key {
            "data_file" => {
                if value.trim().is_empty() {
                    return Err(MamaError::Config(
                        "data_file cannot be empty".to_string(),
                    ));
                }
                config.data_file = PathBuf::from(value.trim());
            }
            "log_level" => {
                parse_log_level(value)?;
                config.log_level = value.trim().to_lowercase();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.home)?;
        tracing::info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.home)
    }
}

fn unknown_key(key: &str) -> MamaError {
    MamaError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: data_file, log_level",
        key
    ))
}
