//! Rendering configuration loaded from `~/.config/mdgrid/config.toml`.
//!
//! ```toml
//! width = 100
//! style = "ascii"
//! user_tables = false
//! format = "text"
//! ```
//!
//! Every key is optional. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Border preset used when drawing a table grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum GridStyle {
    /// Box-drawing characters.
    #[default]
    Utf8,
    /// `+`, `-` and `|` only.
    Ascii,
    /// GitHub-flavored markdown table.
    Markdown,
}

/// How command output is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable: prose as-is, tables as grids.
    #[default]
    Text,
    /// Structured JSON.
    Json,
    /// Normalised markdown.
    Markdown,
}

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum grid width in columns. Unset means natural width.
    pub width: Option<u16>,
    pub style: GridStyle,
    /// Render tables in user-authored messages too, not only assistant ones.
    pub user_tables: bool,
    pub format: OutputFormat,
}

impl Config {
    /// Load the config from the default location.
    ///
    /// Returns defaults if the file doesn't exist (config is optional).
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load the config from `path`, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mdgrid")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.style, GridStyle::Utf8);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.user_tables);
        assert!(config.width.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
width = 72
style = "ascii"
user_tables = true
format = "json"
"#;
        let config = Config::parse(toml_str).unwrap();
        assert_eq!(config.width, Some(72));
        assert_eq!(config.style, GridStyle::Ascii);
        assert!(config.user_tables);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn parse_rejects_unknown_style() {
        assert!(Config::parse(r#"style = "fancy""#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "width = \"wide\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn config_path_ends_with_crate_dir() {
        assert!(config_path().ends_with("mdgrid/config.toml"));
    }
}
