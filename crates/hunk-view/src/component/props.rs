use crate::model::{ExtensionInfo, Hunk};
use hunk_view_config::{DiffMode, ViewConfig};
use std::fmt;

/// Inputs of [`FileDiffHunks`](super::FileDiffHunks).
#[derive(Clone, Default)]
pub struct FileDiffHunksProps {
    /// Prefix of every row anchor, unique per file on the page.
    pub file_anchor: String,
    pub hunks: Vec<Hunk>,
    pub line_numbers: bool,
    /// Decorations and hovers are only wired while this is set.
    pub extension_info: Option<ExtensionInfo>,
    pub persist_lines: bool,
    pub diff_mode: DiffMode,
    pub is_light_theme: bool,
    /// Layout label, drawn as the table title.
    pub class_name: Option<String>,
}

impl FileDiffHunksProps {
    pub fn new(file_anchor: impl Into<String>, hunks: Vec<Hunk>) -> Self {
        Self {
            file_anchor: file_anchor.into(),
            hunks,
            line_numbers: true,
            ..Self::default()
        }
    }

    /// Props for `file_id` using the configured view defaults.
    ///
    /// The anchor is the configured prefix followed by `file_id` and a dash.
    pub fn from_config(config: &ViewConfig, file_id: &str, hunks: Vec<Hunk>) -> Self {
        Self {
            file_anchor: format!("{}{}-", config.anchor_prefix, file_id),
            hunks,
            line_numbers: config.line_numbers,
            extension_info: None,
            persist_lines: config.persist_lines,
            diff_mode: config.diff_mode,
            is_light_theme: config.light_theme,
            class_name: None,
        }
    }

    pub fn with_extension_info(mut self, info: ExtensionInfo) -> Self {
        self.extension_info = Some(info);
        self
    }

    pub fn with_diff_mode(mut self, diff_mode: DiffMode) -> Self {
        self.diff_mode = diff_mode;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl fmt::Debug for FileDiffHunksProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDiffHunksProps")
            .field("file_anchor", &self.file_anchor)
            .field("hunks", &self.hunks.len())
            .field("line_numbers", &self.line_numbers)
            .field("extension_info", &self.extension_info)
            .field("persist_lines", &self.persist_lines)
            .field("diff_mode", &self.diff_mode)
            .field("is_light_theme", &self.is_light_theme)
            .field("class_name", &self.class_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ViewConfig {
            diff_mode: DiffMode::Split,
            persist_lines: true,
            ..ViewConfig::default()
        };

        let props = FileDiffHunksProps::from_config(&config, "a3f", Vec::new());

        assert_eq!(props.file_anchor, "diff-a3f-");
        assert_eq!(props.diff_mode, DiffMode::Split);
        assert!(props.line_numbers);
        assert!(props.persist_lines);
        assert!(!props.is_light_theme);
        assert!(props.extension_info.is_none());
    }
}
