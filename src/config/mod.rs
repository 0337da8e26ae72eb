use crate::errors::{AppError, AppResult};
use crate::models::time_spent::TimeUnit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time_unit: TimeUnit,
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_precision() -> u32 {
    2
}
fn default_output_format() -> String {
    "json".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_wrap_width() -> usize {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_unit: TimeUnit::Minute,
            precision: default_precision(),
            output_format: default_output_format(),
            pretty: default_true(),
            strict: false,
            log_level: default_log_level(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ctxtree")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ctxtree")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ctxtree.conf")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.precision > 9 {
            return Err(AppError::Config(format!(
                "precision must be between 0 and 9, got {}",
                self.precision
            )));
        }
        if !matches!(self.output_format.as_str(), "json" | "csv" | "tree") {
            return Err(AppError::Config(format!(
                "unknown output_format '{}' (json, csv, tree)",
                self.output_format
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file, unless it already exists.
    /// Returns the path and whether a file was written.
    pub fn init(path: &Path) -> AppResult<(PathBuf, bool)> {
        if path.exists() {
            return Ok((path.to_path_buf(), false));
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok((path.to_path_buf(), true))
    }
}
