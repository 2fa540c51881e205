/// Kind of pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// The pointer moved over a cell.
    Move,
    /// A cell was clicked.
    Click,
}

/// A pointer event in screen coordinates.
///
/// The host forwards these (e.g. from terminal mouse events) to the
/// component; they are the source of hover positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn hover(column: u16, row: u16) -> Self {
        Self {
            kind: PointerEventKind::Move,
            column,
            row,
        }
    }

    pub fn click(column: u16, row: u16) -> Self {
        Self {
            kind: PointerEventKind::Click,
            column,
            row,
        }
    }
}
