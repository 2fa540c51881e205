//! Fake collaborators for tests.

use crate::model::{DocumentUri, ExtensionInfo, SideInfo, TextDecoration, ViewerId};
use crate::reactive::constant;
use crate::traits::{
    DecorationStream, ExtensionError, ExtensionHost, ExtensionHostApi, HoverSubscription,
    Hoverifier, HoverifyConfig, ViewerIdObserver, ViewerIdStream,
};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Viewer id the fake observer assigns to `path` at `commit` of `acme/api`.
pub(crate) fn viewer_for(commit: &str, path: &str) -> ViewerId {
    viewer_id_for(&format!("git://acme/api?{}#{}", commit, path))
}

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `future`, failing the test if it takes longer than a few seconds.
pub(crate) async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(TEST_TIMEOUT, future)
        .await
        .expect("timed out")
}

/// Yield to other tasks until `condition` holds.
pub(crate) async fn eventually(mut condition: impl FnMut() -> bool) {
    let reached = tokio::time::timeout(TEST_TIMEOUT, async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await;
    assert!(reached.is_ok(), "condition not reached");
}

/// Decrements a counter when dropped.
struct ActiveGuard(Arc<AtomicUsize>);

impl ActiveGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

type ViewerIdSender = mpsc::UnboundedSender<Result<Option<ViewerId>, ExtensionError>>;

/// Names every document `viewer:<uri>`. URIs containing a held fragment stay
/// pending until released.
#[derive(Default)]
pub(crate) struct FakeViewerIds {
    requested: Mutex<Vec<String>>,
    held: Mutex<Vec<String>>,
    pending: Mutex<Vec<(String, ViewerIdSender)>>,
}

impl FakeViewerIds {
    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub(crate) fn hold(&self, fragment: &str) {
        self.held.lock().unwrap().push(fragment.to_string());
    }

    pub(crate) fn release(&self, fragment: &str) {
        self.held.lock().unwrap().retain(|held| held != fragment);
        for (uri, tx) in self.pending.lock().unwrap().iter() {
            if uri.contains(fragment) {
                let _ = tx.send(Ok(Some(viewer_id_for(uri))));
            }
        }
    }
}

fn viewer_id_for(uri: &str) -> ViewerId {
    ViewerId::new(format!("viewer:{}", uri))
}

impl ViewerIdObserver for FakeViewerIds {
    fn observe_viewer_id(&self, uri: &DocumentUri) -> ViewerIdStream {
        let uri = uri.as_str().to_string();
        self.requested.lock().unwrap().push(uri.clone());

        let is_held = self.held.lock().unwrap().iter().any(|h| uri.contains(h));
        if !is_held {
            return constant(Ok(Some(viewer_id_for(&uri))));
        }
        let (tx, rx) = mpsc::unbounded_channel();
        self.pending.lock().unwrap().push((uri, tx));
        stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|item| (item, rx)) }).boxed()
    }
}

type DecorationSender = mpsc::UnboundedSender<Result<Option<Vec<TextDecoration>>, ExtensionError>>;

/// Decoration streams driven by [`FakeApi::push`] and [`FakeApi::fail`].
///
/// Every stream starts with `Ok(None)`, like a host's current-value stream
/// for a viewer without decorations yet.
#[derive(Default)]
pub(crate) struct FakeApi {
    senders: Mutex<Vec<(ViewerId, DecorationSender)>>,
    active: Arc<AtomicUsize>,
}

impl FakeApi {
    pub(crate) fn push(&self, viewer_id: &ViewerId, decorations: Option<Vec<TextDecoration>>) {
        self.send(viewer_id, Ok(decorations));
    }

    pub(crate) fn fail(&self, viewer_id: &ViewerId, reason: &str) {
        self.send(
            viewer_id,
            Err(ExtensionError::DecorationStream {
                viewer: viewer_id.to_string(),
                reason: reason.to_string(),
            }),
        );
    }

    /// Number of decoration streams not yet dropped.
    pub(crate) fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Number of open decoration streams for `viewer_id`.
    pub(crate) fn watching(&self, viewer_id: &ViewerId) -> usize {
        self.senders
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, tx)| id == viewer_id && !tx.is_closed())
            .count()
    }

    fn send(
        &self,
        viewer_id: &ViewerId,
        item: Result<Option<Vec<TextDecoration>>, ExtensionError>,
    ) {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|(_, tx)| !tx.is_closed());
        for (id, tx) in senders.iter() {
            if id == viewer_id {
                let _ = tx.send(item.clone());
            }
        }
    }
}

impl ExtensionHostApi for FakeApi {
    fn text_decorations(&self, viewer_id: &ViewerId) -> DecorationStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(Ok(None));
        self.senders.lock().unwrap().push((viewer_id.clone(), tx));
        let guard = ActiveGuard::new(self.active.clone());
        stream::unfold((rx, guard), |(mut rx, guard)| async move {
            rx.recv().await.map(|item| (item, (rx, guard)))
        })
        .boxed()
    }
}

pub(crate) struct FakeHost {
    api: Arc<FakeApi>,
}

#[async_trait]
impl ExtensionHost for FakeHost {
    async fn api(&self) -> Result<Arc<dyn ExtensionHostApi>, ExtensionError> {
        Ok(self.api.clone())
    }
}

/// Records hoverify calls and how many subscriptions are alive.
#[derive(Default)]
pub(crate) struct RecordingHoverifier {
    calls: AtomicUsize,
    active: Arc<AtomicUsize>,
    max_active: AtomicUsize,
    last_config: Mutex<Option<HoverifyConfig>>,
}

impl RecordingHoverifier {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub(crate) fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    pub(crate) fn take_config(&self) -> Option<HoverifyConfig> {
        self.last_config.lock().unwrap().take()
    }
}

impl Hoverifier for RecordingHoverifier {
    fn hoverify(&self, config: HoverifyConfig) -> HoverSubscription {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let guard = ActiveGuard::new(self.active.clone());
        self.max_active.fetch_max(self.active(), Ordering::SeqCst);
        *self.last_config.lock().unwrap() = Some(config);
        HoverSubscription::new(move || drop(guard))
    }
}

/// One set of fakes shared by every extension info it builds.
pub(crate) struct Fixture {
    pub(crate) viewer_ids: Arc<FakeViewerIds>,
    pub(crate) api: Arc<FakeApi>,
    pub(crate) host: Arc<FakeHost>,
    pub(crate) hoverifier: Arc<RecordingHoverifier>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let api = Arc::new(FakeApi::default());
        Self {
            viewer_ids: Arc::new(FakeViewerIds::default()),
            host: Arc::new(FakeHost { api: api.clone() }),
            api,
            hoverifier: Arc::new(RecordingHoverifier::default()),
        }
    }

    /// Extension info for `acme/api` between commits `base111` and `head222`.
    pub(crate) fn extension_info(
        &self,
        base_path: Option<&str>,
        head_path: Option<&str>,
    ) -> ExtensionInfo {
        ExtensionInfo {
            base: SideInfo::new("acme/api", "base111", base_path),
            head: SideInfo::new("acme/api", "head222", head_path),
            viewer_ids: Some(self.viewer_ids.clone()),
            hoverifier: self.hoverifier.clone(),
            extension_host: self.host.clone(),
        }
    }
}
