//! View configuration
//!
//! Defaults for how a file's hunks are displayed, loaded from .hunk-view.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How hunks are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Single pane, old and new lines interleaved.
    #[default]
    Unified,
    /// Two panes, old on the left and new on the right.
    Split,
}

impl DiffMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DiffMode::Unified => DiffMode::Split,
            DiffMode::Split => DiffMode::Unified,
        }
    }
}

/// View configuration loaded from .hunk-view.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Initial layout ("unified" or "split")
    #[serde(default)]
    pub diff_mode: DiffMode,

    /// Show old/new line number columns
    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,

    /// Record row anchors so a selected line can be persisted by the host
    #[serde(default)]
    pub persist_lines: bool,

    /// Use the light color theme
    #[serde(default)]
    pub light_theme: bool,

    /// Prefix for row anchor ids
    #[serde(default = "default_anchor_prefix")]
    pub anchor_prefix: String,
}

fn default_line_numbers() -> bool {
    true
}

fn default_anchor_prefix() -> String {
    "diff-".to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            diff_mode: DiffMode::default(),
            line_numbers: default_line_numbers(),
            persist_lines: false,
            light_theme: false,
            anchor_prefix: default_anchor_prefix(),
        }
    }
}

impl ViewConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded view config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default view config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse view config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewConfig::default();
        assert_eq!(config.diff_mode, DiffMode::Unified);
        assert!(config.line_numbers);
        assert!(!config.persist_lines);
        assert!(!config.light_theme);
        assert_eq!(config.anchor_prefix, "diff-");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            diff_mode = "split"
            line_numbers = false
            anchor_prefix = "file-3-"
        "#;
        let config = ViewConfig::parse(toml).unwrap();
        assert_eq!(config.diff_mode, DiffMode::Split);
        assert!(!config.line_numbers);
        assert_eq!(config.anchor_prefix, "file-3-");
        // persist_lines should use default
        assert!(!config.persist_lines);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = ViewConfig::parse("light_theme = true").unwrap();
        assert!(config.light_theme);
        assert_eq!(config.diff_mode, DiffMode::Unified);
        assert!(config.line_numbers);
    }

    #[test]
    fn test_config_rejects_unknown_mode() {
        let err = ViewConfig::parse(r#"diff_mode = "sideways""#).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse view config"));
    }

    #[test]
    fn test_diff_mode_toggle() {
        assert_eq!(DiffMode::Unified.toggled(), DiffMode::Split);
        assert_eq!(DiffMode::Split.toggled(), DiffMode::Unified);
    }
}
