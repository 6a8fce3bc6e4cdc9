//! Configuration
//!
//! YAML config with every key optional. Lookup order: `--config <path>`,
//! `~/.config/foliotui/config.yaml`, `./config.yaml`, built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::layout::DEFAULT_CELL_WIDTH_UNITS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Portfolio content file; the bundled sample is used when unset
    #[serde(default)]
    pub content_path: Option<String>,
    /// Program used to open links; platform default when unset
    #[serde(default)]
    pub open_command: Option<String>,
    /// Width units per terminal column for the responsive breakpoint
    #[serde(default = "default_cell_width_units")]
    pub cell_width_units: u32,
    #[serde(default = "default_scroll_animation_ms")]
    pub scroll_animation_ms: u64,
    /// Let the highlight follow intermediate rows of an animated scroll
    #[serde(default)]
    pub sync_during_animation: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_cell_width_units() -> u32 {
    DEFAULT_CELL_WIDTH_UNITS
}

fn default_scroll_animation_ms() -> u64 {
    400
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            theme: default_theme(),
            content_path: None,
            open_command: None,
            cell_width_units: default_cell_width_units(),
            scroll_animation_ms: default_scroll_animation_ms(),
            sync_during_animation: false,
        }
    }
}

impl Config {
    /// Parse a YAML config; an empty document yields the defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(yaml).context("invalid config YAML")?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise the platform config dir and the
/// working directory are tried; `None` means run with defaults.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let path = PathBuf::from(path);
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    // Try ~/.config/foliotui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("foliotui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_yaml_str("vim_mode: true\ntheme: light\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.theme, "light");
        assert_eq!(config.cell_width_units, 8);
        assert_eq!(config.scroll_animation_ms, 400);
        assert!(!config.sync_during_animation);
        assert!(config.open_command.is_none());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(Config::from_yaml_str("cell_width_units: wide").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "open_command: firefox").unwrap();
        writeln!(file, "scroll_animation_ms: 0").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.open_command.as_deref(), Some("firefox"));
        assert_eq!(config.scroll_animation_ms, 0);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(get_config_path(Some(missing.display().to_string())).is_err());
    }

    #[test]
    fn test_explicit_existing_path_wins() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let found = get_config_path(Some(file.path().display().to_string())).unwrap();
        assert_eq!(found.as_deref(), Some(file.path()));
    }
}
