//! Text decorations contributed by extensions, grouped per line.

use super::DiffSide;
use ratatui::style::Color;
use std::collections::BTreeMap;

/// Line range a decoration applies to (0-based, inclusive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationRange {
    pub start_line: u32,
    pub end_line: u32,
}

/// Content rendered after the line text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationAttachment {
    pub content_text: Option<String>,
    pub hover_message: Option<String>,
    pub link_url: Option<String>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

/// A per-line annotation (highlight, badge) contributed by an extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDecoration {
    pub range: DecorationRange,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub is_whole_line: bool,
    pub after: Option<DecorationAttachment>,
}

impl TextDecoration {
    /// Decoration covering a single 0-based line.
    pub fn on_line(line: u32) -> Self {
        Self {
            range: DecorationRange {
                start_line: line,
                end_line: line,
            },
            ..Self::default()
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self.is_whole_line = true;
        self
    }

    /// Append `text` after the line content.
    pub fn with_after_text(mut self, text: impl Into<String>) -> Self {
        self.after
            .get_or_insert_with(DecorationAttachment::default)
            .content_text = Some(text.into());
        self
    }

    /// 1-based line number this decoration is grouped under.
    pub fn line_number(&self) -> u32 {
        self.range.start_line + 1
    }
}

/// Decorations keyed by 1-based line number, in the order they were received.
pub type DecorationMapByLine = BTreeMap<u32, Vec<TextDecoration>>;

/// Group a raw decoration list by line. `None` yields an empty mapping.
pub fn group_decorations_by_line(decorations: Option<&[TextDecoration]>) -> DecorationMapByLine {
    let mut by_line = DecorationMapByLine::new();
    for decoration in decorations.unwrap_or_default() {
        by_line
            .entry(decoration.line_number())
            .or_default()
            .push(decoration.clone());
    }
    by_line
}

/// Decorations for both sides of the diff.
///
/// Both sides are always present; a side without decorations is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationState {
    pub base: DecorationMapByLine,
    pub head: DecorationMapByLine,
}

impl DecorationState {
    /// Group both raw lists independently.
    pub fn from_lists(base: Option<&[TextDecoration]>, head: Option<&[TextDecoration]>) -> Self {
        Self {
            base: group_decorations_by_line(base),
            head: group_decorations_by_line(head),
        }
    }

    pub fn side(&self, side: DiffSide) -> &DecorationMapByLine {
        match side {
            DiffSide::Base => &self.base,
            DiffSide::Head => &self.head,
        }
    }

    /// Decorations for a 1-based line on one side.
    pub fn for_line(&self, side: DiffSide, line: u32) -> &[TextDecoration] {
        self.side(side)
            .get(&line)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_by_line_keeps_order() {
        let first = TextDecoration::on_line(4).with_after_text("first");
        let second = TextDecoration::on_line(4).with_after_text("second");
        let other = TextDecoration::on_line(0).with_background(Color::Blue);

        let grouped =
            group_decorations_by_line(Some(&[first.clone(), other.clone(), second.clone()]));

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&5], vec![first, second]);
        assert_eq!(grouped[&1], vec![other]);
    }

    #[test]
    fn test_group_none_or_empty_is_empty() {
        assert!(group_decorations_by_line(None).is_empty());
        assert!(group_decorations_by_line(Some(&[])).is_empty());
    }

    #[test]
    fn test_state_sides_are_independent() {
        let head = vec![TextDecoration::on_line(2).with_after_text("blame")];
        let state = DecorationState::from_lists(None, Some(&head));

        assert!(state.base.is_empty());
        assert_eq!(state.for_line(DiffSide::Head, 3), head.as_slice());
        assert!(state.for_line(DiffSide::Base, 3).is_empty());
        assert!(state.for_line(DiffSide::Head, 1).is_empty());
    }
}
