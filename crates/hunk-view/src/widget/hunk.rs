//! Shared types for hunk renderers.

use crate::model::{DecorationState, DiffLine, DiffSide, LineKind, TextDecoration};

/// Inputs handed to a hunk renderer.
#[derive(Debug, Clone, Copy)]
pub struct HunkRenderProps<'a> {
    /// Prefix of every row anchor.
    pub file_anchor: &'a str,
    pub is_light_theme: bool,
    pub line_numbers: bool,
    /// Whether row anchors are kept for the host to persist.
    pub persist_lines: bool,
    pub decorations: &'a DecorationState,
}

/// One side of a diff line, ready to be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideCell {
    pub part: DiffSide,
    /// 1-based line number on `part`'s side.
    pub line: u32,
    pub kind: LineKind,
    pub content: String,
    /// `<file_anchor><L|R><line>`, present when lines are persisted.
    pub anchor: Option<String>,
    pub decorations: Vec<TextDecoration>,
}

impl SideCell {
    /// Cell for `line` on `part`, or `None` if the line does not exist there.
    pub fn for_line(line: &DiffLine, part: DiffSide, props: &HunkRenderProps<'_>) -> Option<Self> {
        let number = line.line_on(part)?;
        let anchor = props
            .persist_lines
            .then(|| format!("{}{}{}", props.file_anchor, part.anchor_letter(), number));
        Some(Self {
            part,
            line: number,
            kind: line.kind,
            content: line.content.clone(),
            anchor,
            decorations: props.decorations.for_line(part, number).to_vec(),
        })
    }
}

/// A table row produced by a hunk renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunkRow {
    /// The `@@ ... @@` line.
    Header { hunk_key: u32, text: String },
    /// A line in unified mode: both line numbers, one code cell.
    Unified {
        hunk_key: u32,
        old_line: Option<u32>,
        new_line: Option<u32>,
        cell: SideCell,
    },
    /// A line pair in split mode; either side may be empty.
    Split {
        hunk_key: u32,
        old: Option<SideCell>,
        new: Option<SideCell>,
    },
}

/// Turns a hunk into table rows.
pub trait HunkRenderer {
    fn rows(&self, hunk: &crate::model::Hunk, props: &HunkRenderProps<'_>) -> Vec<HunkRow>;

    /// Number of rows `rows` would produce, header included.
    fn row_count(&self, hunk: &crate::model::Hunk) -> usize;
}
