//! File Diff Hunks Actions
//!
//! Tagged actions that the component can process. The hosting application
//! turns key and mouse events into actions and dispatches them to
//! [`FileDiffHunks::handle_action`](crate::FileDiffHunks::handle_action).

use crate::event::PointerEvent;
use hunk_view_config::DiffMode;

/// Actions that can be performed on a file's diff hunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    // === Scrolling ===
    /// Scroll down by the given number of rows
    ScrollDown(usize),
    /// Scroll up by the given number of rows
    ScrollUp(usize),
    /// Scroll back to the first row
    ScrollTop,

    // === Layout ===
    /// Switch to the given diff mode
    SetDiffMode(DiffMode),
    /// Switch between unified and split mode
    ToggleDiffMode,
    /// Show or hide the line-number columns
    ToggleLineNumbers,

    // === Pointer ===
    /// Raw pointer event, forwarded to hover wiring
    Pointer(PointerEvent),
}

impl ViewAction {
    /// Check if this action is a scroll action
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ViewAction::ScrollDown(_) | ViewAction::ScrollUp(_) | ViewAction::ScrollTop
        )
    }

    /// Check if this action changes the table layout
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            ViewAction::SetDiffMode(_) | ViewAction::ToggleDiffMode | ViewAction::ToggleLineNumbers
        )
    }
}

impl From<PointerEvent> for ViewAction {
    fn from(event: PointerEvent) -> Self {
        ViewAction::Pointer(event)
    }
}
