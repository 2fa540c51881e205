//! Trait for the hover engine that shows tooltips and go-to-definition.

use crate::dom::{ContainerElement, DomFunctions, PositionEvent};
use crate::model::DiffSide;
use futures::stream::BoxStream;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A hovered token inside the diff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoveredToken {
    /// 1-based line number on `part`'s side.
    pub line: u32,
    /// 1-based character offset in the line content.
    pub character: u32,
    /// Side the token is on; `None` means head.
    pub part: Option<DiffSide>,
}

/// Request to move the hover to a line, e.g. after navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionJump {
    pub line: u32,
    pub part: Option<DiffSide>,
}

/// Repository coordinates a hover or definition lookup runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub repo_name: String,
    pub file_path: String,
    pub revision: String,
    pub commit_id: String,
}

/// Errors raised while resolving a hovered token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HoverContextError {
    /// The hovered side has no file (added or deleted file).
    #[error("No file on the {0} side of the diff")]
    MissingFilePath(DiffSide),
}

/// Maps a hovered token to the repository coordinates of its side.
pub type ContextResolver =
    Arc<dyn Fn(&HoveredToken) -> Result<RepoSpec, HoverContextError> + Send + Sync>;

/// Everything the hover engine needs to follow the pointer over the table.
pub struct HoverifyConfig {
    /// Locates code cells, line numbers and sides in the rendered table.
    pub dom: Arc<dyn DomFunctions>,
    /// Positions under the pointer.
    pub position_events: BoxStream<'static, PositionEvent>,
    /// Programmatic jumps; `None` when unsupported.
    pub position_jumps: Option<BoxStream<'static, PositionJump>>,
    /// Elements the hover overlay is positioned relative to.
    pub relative_elements: BoxStream<'static, ContainerElement>,
    pub resolve_context: ContextResolver,
}

impl fmt::Debug for HoverifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverifyConfig")
            .field("position_jumps", &self.position_jumps.is_some())
            .finish_non_exhaustive()
    }
}

/// Sets up hover handling over a rendered table.
pub trait Hoverifier: Send + Sync {
    /// Start following `config`; hover handling stops when the subscription is
    /// unsubscribed or dropped.
    fn hoverify(&self, config: HoverifyConfig) -> HoverSubscription;
}

/// Handle to active hover wiring. Dropping it tears the wiring down.
#[must_use = "hover wiring is torn down when the subscription is dropped"]
pub struct HoverSubscription {
    teardown: Option<Box<dyn FnOnce() + Send>>,
}

impl HoverSubscription {
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for HoverSubscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for HoverSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverSubscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}
