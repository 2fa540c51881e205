use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".hunk-view.toml";

/// Load config file content, first match wins
///
/// Searches for the config in:
/// 1. Current working directory as .hunk-view.toml
/// 2. Platform config directory as hunk-view/config.toml
/// 3. Home directory as .hunk-view.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let candidates = [crate::paths::config_file_path(), get_home_config_path()];
    for path in candidates.into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.hunk-view.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_config_path_uses_dotfile() {
        if let Some(path) = get_home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
