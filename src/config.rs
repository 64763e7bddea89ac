//! Persisted filter defaults: TOML file loading and write-back.
//!
//! Resolution order (first found wins):
//! 1. `$DFF_CONFIG` environment variable (path to config file)
//! 2. Global `~/.config/diff-filter-tui/config.toml`
//! 3. Built-in defaults (both fields empty)
//!
//! Persistence is deliberately minimal: one plain string per filter field,
//! no other schema. A missing or unparsable file degrades to defaults with
//! a stderr warning, never an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default values for the two filter input fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FiltersConfig {
    /// Pre-filled include expression.
    pub include_default: Option<String>,
    /// Pre-filled exclude expression.
    pub exclude_default: Option<String>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub filters: FiltersConfig,
}

/// Return the candidate config file paths in priority order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("DFF_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("diff-filter-tui").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

impl AppConfig {
    /// Load from the first readable candidate, or defaults.
    pub fn load() -> AppConfig {
        candidate_paths()
            .iter()
            .find_map(|p| load_file(p))
            .unwrap_or_default()
    }

    /// Write the config to the given path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the config to the highest-priority candidate location.
    pub fn save(&self) -> Result<()> {
        let path = candidate_paths().into_iter().next().ok_or_else(|| {
            crate::error::AppError::Config("no config directory available".into())
        })?;
        self.save_to(&path)
    }

    pub fn include_default(&self) -> &str {
        self.filters.include_default.as_deref().unwrap_or("")
    }

    pub fn exclude_default(&self) -> &str {
        self.filters.exclude_default.as_deref().unwrap_or("")
    }
}
