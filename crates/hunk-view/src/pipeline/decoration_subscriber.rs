//! Subscribes to decorations of resolved viewers and publishes them per line.

use super::ResolvedViewers;
use crate::model::{DecorationState, TextDecoration, ViewerId};
use crate::reactive::{constant, try_combine_latest, Signal, SwitchTask};
use crate::traits::{DecorationStream, ExtensionError, ExtensionHostApi};
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Decoration state for a pair of viewers, regrouped on every update.
pub fn decoration_states(
    resolved: &ResolvedViewers,
) -> BoxStream<'static, Result<DecorationState, ExtensionError>> {
    let base = observe_viewer(resolved.api.as_ref(), resolved.base.as_ref());
    let head = observe_viewer(resolved.api.as_ref(), resolved.head.as_ref());
    try_combine_latest(base, head)
        .map_ok(|(base, head): (Option<Vec<TextDecoration>>, Option<Vec<TextDecoration>>)| {
            DecorationState::from_lists(base.as_deref(), head.as_deref())
        })
        .boxed()
}

fn observe_viewer(api: &dyn ExtensionHostApi, viewer_id: Option<&ViewerId>) -> DecorationStream {
    match viewer_id {
        Some(viewer_id) => api.text_decorations(viewer_id),
        None => constant(Ok(None)),
    }
}

/// Follows resolved viewers and keeps the decoration state current.
///
/// Each resolution replaces the subscription of the one before it.
pub struct DecorationSubscriber {
    state: Signal<DecorationState>,
    subscription: SwitchTask,
}

impl DecorationSubscriber {
    pub fn new(state: Signal<DecorationState>, handle: Handle, parent: &CancellationToken) -> Self {
        Self {
            state,
            subscription: SwitchTask::new("decorations", handle, parent),
        }
    }

    /// Subscribe to the decorations of `resolved`, dropping the previous
    /// subscription.
    pub fn subscribe(&mut self, resolved: &ResolvedViewers) {
        log::debug!("Subscribing to decorations of {:?}", resolved);
        let states = decoration_states(resolved);
        let state = self.state.clone();
        self.subscription
            .switch_to(move |token| publish_states(states, state, token));
    }

    /// Subscribe to every resolution until `token` is cancelled.
    ///
    /// The latest subscription stays active after the resolutions end.
    pub async fn follow(
        mut self,
        mut resolutions: BoxStream<'static, Result<ResolvedViewers, ExtensionError>>,
        token: CancellationToken,
    ) {
        while let Some(resolution) = resolutions.next().await {
            match resolution {
                Ok(resolved) => self.subscribe(&resolved),
                Err(err) => {
                    log::warn!("Viewer resolution failed: {}", err);
                    break;
                }
            }
        }
        token.cancelled().await;
    }
}

async fn publish_states(
    mut states: BoxStream<'static, Result<DecorationState, ExtensionError>>,
    state: Signal<DecorationState>,
    token: CancellationToken,
) {
    while let Some(next) = states.next().await {
        match next {
            Ok(next) => {
                if !state.replace_unless_cancelled(next, &token) {
                    break;
                }
            }
            Err(err) => {
                log::warn!("Decoration stream ended: {}", err);
                break;
            }
        }
    }
}
