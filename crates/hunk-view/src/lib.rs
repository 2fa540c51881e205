//! # hunk-view
//!
//! Renders the hunks of a single file's diff as a ratatui table, decorated
//! with text decorations from an extension host and wired to a hover engine.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**: it receives hunks and collaborator
//! handles and never calls external APIs itself. The extension host, the
//! viewer-id observer and the hover engine are traits the host implements.
//!
//! ## Reactive Pipelines
//!
//! Extension info is held in a [`reactive::Signal`]. Each distinct value
//! resolves viewer ids for both sides of the diff and subscribes to their
//! decorations; a newer value cancels the work of the one before it. Hovers
//! are wired once per value with a single live subscription.
//!
//! ## Action-Based Architecture
//!
//! The hosting application maps key and mouse events to [`ViewAction`]
//! variants and dispatches them to [`FileDiffHunks::handle_action`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hunk_view::{FileDiffHunks, FileDiffHunksProps, ViewAction, ViewConfig};
//!
//! let props = FileDiffHunksProps::from_config(&ViewConfig::load(), "a3f", hunks)
//!     .with_extension_info(extension_info);
//! let mut view = FileDiffHunks::mount(props)?;
//!
//! // In the draw loop
//! view.render(area, frame.buffer_mut());
//!
//! // From the event loop
//! view.handle_action(ViewAction::ScrollDown(1));
//! ```

pub mod action;
pub mod component;
pub mod dom;
pub mod event;
pub mod model;
pub mod pipeline;
pub mod reactive;
pub mod traits;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use action::ViewAction;
pub use component::{FileDiffHunks, FileDiffHunksProps, MountError};
pub use dom::{CellTarget, CodeElement, ContainerElement, DiffDomFunctions, DomFunctions};
pub use event::{PointerEvent, PointerEventKind};
pub use hunk_view_config::{DiffMode, ViewConfig};
pub use model::{
    DecorationState, DiffLine, DiffSide, DocumentUri, ExtensionInfo, Hunk, HunkRange, LineKind,
    SideInfo, TextDecoration, ViewerId,
};
pub use traits::{
    DefaultTheme, ExtensionError, ExtensionHost, ExtensionHostApi, HoverContextError,
    HoverSubscription, Hoverifier, HoverifyConfig, LightTheme, ThemeProvider, ViewerIdObserver,
};
pub use widget::{DiffTable, RenderedTable};
