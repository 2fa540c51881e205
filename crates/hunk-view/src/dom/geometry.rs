use crate::model::DiffSide;
use ratatui::layout::{Position, Rect};

/// A drawn code cell: one side of one diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTarget {
    /// Screen area of the cell, including the diff indicator column.
    pub area: Rect,
    /// Key of the hunk the row belongs to.
    pub hunk_key: u32,
    pub part: DiffSide,
    /// 1-based line number on `part`'s side.
    pub line: u32,
    /// Row anchor, when anchors are persisted.
    pub anchor: Option<String>,
    /// Screen column of the first content character.
    pub code_x: u16,
    /// Raw line content, before tab expansion.
    pub text: String,
}

impl CellTarget {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// The outer element of the rendered table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerElement {
    pub area: Rect,
    pub title: String,
    pub anchor: String,
}

/// The scrollable code view: every code cell drawn in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeElement {
    pub area: Rect,
    /// Rows scrolled out of view above `area`.
    pub scroll_offset: usize,
    pub cells: Vec<CellTarget>,
}

impl CodeElement {
    pub fn new(area: Rect, scroll_offset: usize) -> Self {
        Self {
            area,
            scroll_offset,
            cells: Vec::new(),
        }
    }

    pub fn cell_at(&self, column: u16, row: u16) -> Option<&CellTarget> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        self.cells.iter().find(|cell| cell.contains(column, row))
    }

    pub fn cell_for_line(&self, line: u32, part: DiffSide) -> Option<&CellTarget> {
        self.cells
            .iter()
            .find(|cell| cell.line == line && cell.part == part)
    }
}
