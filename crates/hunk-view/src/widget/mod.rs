//! Ratatui widgets for the diff table.

mod diff_table;
mod hunk;
mod layout;
mod split_hunk;
mod unified_hunk;

pub use diff_table::{DiffTable, RenderedTable, EMPTY_STATE_MESSAGE};
pub use hunk::{HunkRenderProps, HunkRenderer, HunkRow, SideCell};
pub use layout::{ColumnKind, ColumnSpan, RowGeometry, TableLayout};
pub use split_hunk::SplitHunk;
pub use unified_hunk::UnifiedHunk;
