//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hunk-view/config.toml`
//! - macOS: `~/Library/Application Support/hunk-view/config.toml`
//! - Windows: `%APPDATA%\hunk-view\config.toml`

use std::path::PathBuf;

const APP_NAME: &str = "hunk-view";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of the config file inside the platform config directory.
///
/// Lookup only: the directory is not created.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE_NAME))
}
