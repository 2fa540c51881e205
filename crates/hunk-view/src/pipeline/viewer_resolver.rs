//! Resolves the viewer ids of both diff sides.

use crate::model::{DiffSide, DocumentUri, ExtensionInfo, SideInfo, ViewerId};
use crate::reactive::{constant, try_combine_latest};
use crate::traits::{ExtensionError, ExtensionHostApi, ViewerIdObserver, ViewerIdStream};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::fmt;
use std::sync::Arc;

/// Viewer ids of both sides plus the API to request their decorations.
#[derive(Clone)]
pub struct ResolvedViewers {
    pub base: Option<ViewerId>,
    pub head: Option<ViewerId>,
    pub api: Arc<dyn ExtensionHostApi>,
}

impl fmt::Debug for ResolvedViewers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedViewers")
            .field("base", &self.base)
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

/// Stream of resolved viewers for one extension-info value.
///
/// Returns `None` when the value cannot resolve viewer ids. A side without a
/// file resolves to `None` without asking the observer.
pub fn resolve_viewers(
    info: &ExtensionInfo,
) -> Option<BoxStream<'static, Result<ResolvedViewers, ExtensionError>>> {
    let observer = info.viewer_ids.clone()?;
    let [base, head] = [DiffSide::Base, DiffSide::Head]
        .map(|side| observe_side(observer.as_ref(), info.side(side)));

    let host = info.extension_host.clone();
    let api = stream::once(async move { host.api().await }).boxed();

    let resolved = try_combine_latest(try_combine_latest(base, head), api)
        .map_ok(|((base, head), api)| ResolvedViewers { base, head, api })
        .boxed();
    Some(resolved)
}

fn observe_side(observer: &dyn ViewerIdObserver, side: &SideInfo) -> ViewerIdStream {
    match DocumentUri::for_side(side) {
        Some(uri) => {
            log::debug!("Observing viewer id for {}", uri);
            observer.observe_viewer_id(&uri)
        }
        None => constant(Ok(None)),
    }
}
