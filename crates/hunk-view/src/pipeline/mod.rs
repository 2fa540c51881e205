//! The pipelines that connect extension info to decorations and hovers.

mod decoration_subscriber;
mod hover_wiring;
mod viewer_resolver;

pub use decoration_subscriber::{decoration_states, DecorationSubscriber};
pub use hover_wiring::{context_resolver, HoverSources, HoverWiring};
pub use viewer_resolver::{resolve_viewers, ResolvedViewers};

use crate::model::{DecorationState, ExtensionInfo};
use crate::reactive::SwitchTask;
use futures::stream::{BoxStream, StreamExt};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Keep `decorations` in sync with the latest usable extension info.
///
/// Values that cannot resolve viewers (absent, or without a viewer id
/// observer) are skipped and leave the current subscription in place. A
/// usable value cancels resolution of the previous one.
pub async fn follow_extension_info(
    mut infos: BoxStream<'static, Option<ExtensionInfo>>,
    decorations: crate::reactive::Signal<DecorationState>,
    handle: Handle,
    token: CancellationToken,
) {
    let mut resolution = SwitchTask::new("viewer-resolution", handle.clone(), &token);
    while let Some(info) = infos.next().await {
        let Some(info) = info else {
            log::debug!("Extension info cleared");
            continue;
        };
        let Some(resolutions) = resolve_viewers(&info) else {
            log::debug!("Extension info cannot resolve viewer ids, skipping");
            continue;
        };

        let decorations = decorations.clone();
        let handle = handle.clone();
        resolution.switch_to(move |token| {
            let subscriber = DecorationSubscriber::new(decorations, handle, &token);
            subscriber.follow(resolutions, token)
        });
    }
}
