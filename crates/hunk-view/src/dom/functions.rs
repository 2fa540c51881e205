//! Adapter functions for locating tokens in the rendered diff table.

use super::{CellTarget, CodeElement};
use crate::model::DiffSide;

/// Functions the hover engine uses to navigate a rendered code view.
pub trait DomFunctions: Send + Sync {
    /// The code cell under a screen position.
    fn code_cell_at(&self, element: &CodeElement, column: u16, row: u16) -> Option<CellTarget>;

    /// The code cell of a line on a side.
    fn code_cell_for_line(
        &self,
        element: &CodeElement,
        line: u32,
        part: Option<DiffSide>,
    ) -> Option<CellTarget>;

    /// 1-based line number of a cell.
    fn line_number_of(&self, cell: &CellTarget) -> u32;

    /// Side of a cell. `None` for views that are not diffs.
    fn diff_part_of(&self, cell: &CellTarget) -> Option<DiffSide>;

    /// Whether the first character of a code cell is the `+`/`-` indicator.
    fn is_first_character_diff_indicator(&self) -> bool;
}

/// [`DomFunctions`] for diff tables rendered by this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffDomFunctions;

impl DomFunctions for DiffDomFunctions {
    fn code_cell_at(&self, element: &CodeElement, column: u16, row: u16) -> Option<CellTarget> {
        element.cell_at(column, row).cloned()
    }

    fn code_cell_for_line(
        &self,
        element: &CodeElement,
        line: u32,
        part: Option<DiffSide>,
    ) -> Option<CellTarget> {
        element
            .cell_for_line(line, part.unwrap_or_default())
            .cloned()
    }

    fn line_number_of(&self, cell: &CellTarget) -> u32 {
        cell.line
    }

    fn diff_part_of(&self, cell: &CellTarget) -> Option<DiffSide> {
        Some(cell.part)
    }

    fn is_first_character_diff_indicator(&self) -> bool {
        true
    }
}
