//! Traits for talking to the extension host.

use crate::model::{DocumentUri, TextDecoration, ViewerId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by extension host streams.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtensionError {
    /// The viewer id for a document could not be resolved.
    #[error("Failed to resolve viewer for {uri}: {reason}")]
    ViewerResolution { uri: String, reason: String },

    /// A decoration stream failed.
    #[error("Decoration stream for viewer {viewer} failed: {reason}")]
    DecorationStream { viewer: String, reason: String },

    /// The extension host API is not available.
    #[error("Extension host unavailable: {0}")]
    HostUnavailable(String),
}

/// Viewer ids for a document, updated as the host opens and closes viewers.
pub type ViewerIdStream = BoxStream<'static, Result<Option<ViewerId>, ExtensionError>>;

/// Decorations for a viewer; every item replaces the previous list.
pub type DecorationStream = BoxStream<'static, Result<Option<Vec<TextDecoration>>, ExtensionError>>;

/// Resolves documents to the viewer ids that name them in the extension host.
pub trait ViewerIdObserver: Send + Sync {
    /// Observe the viewer id for `uri`. `None` means no viewer is open.
    fn observe_viewer_id(&self, uri: &DocumentUri) -> ViewerIdStream;
}

/// Gives access to the extension host API once it is ready.
#[async_trait]
pub trait ExtensionHost: Send + Sync {
    /// Wait for the extension host and return its API handle.
    async fn api(&self) -> Result<Arc<dyn ExtensionHostApi>, ExtensionError>;
}

/// The subset of the extension host API used by the diff table.
pub trait ExtensionHostApi: Send + Sync {
    /// Subscribe to text decorations of an open viewer.
    fn text_decorations(&self, viewer_id: &ViewerId) -> DecorationStream;
}

/// An extension host for when extensions are disabled.
pub struct NoOpExtensionHost;

#[async_trait]
impl ExtensionHost for NoOpExtensionHost {
    async fn api(&self) -> Result<Arc<dyn ExtensionHostApi>, ExtensionError> {
        Err(ExtensionError::HostUnavailable(
            "Extensions are disabled".to_string(),
        ))
    }
}
