//! Column layout of the diff table.

use hunk_view_config::DiffMode;

/// A column of the diff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    OldLineNumber,
    NewLineNumber,
    /// Code of the base side (split mode).
    OldContent,
    /// Code of the head side (split mode).
    NewContent,
    /// Interleaved code (unified mode).
    Content,
}

impl ColumnKind {
    fn is_line_number(self) -> bool {
        matches!(self, ColumnKind::OldLineNumber | ColumnKind::NewLineNumber)
    }
}

/// Declared columns of the table.
///
/// Columns are only declared when line numbers are shown; without them the
/// table is content only and [`TableLayout::column_count`] is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<ColumnKind>,
}

impl TableLayout {
    pub fn new(mode: DiffMode, line_numbers: bool) -> Self {
        let columns = match (line_numbers, mode) {
            (false, _) => Vec::new(),
            (true, DiffMode::Unified) => vec![
                ColumnKind::OldLineNumber,
                ColumnKind::NewLineNumber,
                ColumnKind::Content,
            ],
            (true, DiffMode::Split) => vec![
                ColumnKind::OldLineNumber,
                ColumnKind::OldContent,
                ColumnKind::NewLineNumber,
                ColumnKind::NewContent,
            ],
        };
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnKind] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Width of each column for a table `total` cells wide.
    ///
    /// Line-number columns take `number_width` plus a one-cell gap; content
    /// columns share what is left, the last one taking the remainder.
    pub fn widths(&self, total: u16, number_width: u16) -> Vec<u16> {
        let fixed = self
            .columns
            .iter()
            .filter(|c| c.is_line_number())
            .count() as u16
            * (number_width + 1);
        let content_columns = self.columns.iter().filter(|c| !c.is_line_number()).count() as u16;
        let rest = total.saturating_sub(fixed);
        let share = rest.checked_div(content_columns).unwrap_or(0);

        let mut seen_content = 0;
        self.columns
            .iter()
            .map(|c| {
                if c.is_line_number() {
                    return number_width + 1;
                }
                seen_content += 1;
                if seen_content == content_columns {
                    rest - share * (content_columns - 1)
                } else {
                    share
                }
            })
            .collect()
    }
}

/// Horizontal extent of a painted column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSpan {
    pub x: u16,
    pub width: u16,
}

impl ColumnSpan {
    pub fn new(x: u16, width: u16) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }
}

/// Where each part of a row is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowGeometry {
    Unified {
        old_number: Option<ColumnSpan>,
        new_number: Option<ColumnSpan>,
        code: ColumnSpan,
    },
    Split {
        old_number: Option<ColumnSpan>,
        old_code: ColumnSpan,
        new_number: Option<ColumnSpan>,
        new_code: ColumnSpan,
    },
}

impl RowGeometry {
    /// Geometry of rows painted from `x` over `width` cells.
    pub fn new(layout: &TableLayout, mode: DiffMode, x: u16, width: u16, number_width: u16) -> Self {
        if layout.column_count() == 0 {
            return match mode {
                DiffMode::Unified => RowGeometry::Unified {
                    old_number: None,
                    new_number: None,
                    code: ColumnSpan::new(x, width),
                },
                DiffMode::Split => {
                    let left = width / 2;
                    RowGeometry::Split {
                        old_number: None,
                        old_code: ColumnSpan::new(x, left),
                        new_number: None,
                        new_code: ColumnSpan::new(x + left, width - left),
                    }
                }
            };
        }

        let mut spans = [None; 2];
        let mut code = [ColumnSpan::default(); 2];
        let mut cursor = x;
        for (column, column_width) in layout.columns().iter().zip(layout.widths(width, number_width)) {
            let span = ColumnSpan::new(cursor, column_width);
            // Number spans exclude their trailing gap.
            let number = Some(ColumnSpan::new(cursor, column_width.saturating_sub(1)));
            match column {
                ColumnKind::OldLineNumber => spans[0] = number,
                ColumnKind::NewLineNumber => spans[1] = number,
                ColumnKind::OldContent | ColumnKind::Content => code[0] = span,
                ColumnKind::NewContent => code[1] = span,
            }
            cursor = cursor.saturating_add(column_width);
        }

        match mode {
            DiffMode::Unified => RowGeometry::Unified {
                old_number: spans[0],
                new_number: spans[1],
                code: code[0],
            },
            DiffMode::Split => RowGeometry::Split {
                old_number: spans[0],
                old_code: code[0],
                new_number: spans[1],
                new_code: code[1],
            },
        }
    }
}
