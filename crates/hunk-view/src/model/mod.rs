//! Data models for hunks, decorations and extension info.

mod decoration;
mod diff;
mod extension_info;
mod side;
mod uri;

pub use decoration::{
    group_decorations_by_line, DecorationAttachment, DecorationMapByLine, DecorationRange,
    DecorationState, TextDecoration,
};
pub use diff::{duplicate_hunk_keys, DiffLine, Hunk, HunkRange, LineKind};
pub use extension_info::{ExtensionInfo, SideInfo};
pub use side::DiffSide;
pub use uri::{DocumentUri, ViewerId};
