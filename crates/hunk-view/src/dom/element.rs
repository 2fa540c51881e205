//! Last-known-handle holder for rendered elements.

use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Holds the current handle of a rendered element.
///
/// The element is attached after each render and detached when it is no
/// longer drawn. Subscribers receive the latest attached element immediately
/// and every later one; detaching is not forwarded.
pub struct ElementRef<T> {
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for ElementRef<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> Default for ElementRef<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementRef<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Make `element` the current handle. Re-attaching an equal element does
    /// not notify subscribers.
    pub fn attach(&self, element: T) {
        self.tx.send_if_modified(|current| {
            if current.as_ref() == Some(&element) {
                false
            } else {
                *current = Some(element);
                true
            }
        });
    }

    pub fn detach(&self) {
        self.tx.send_if_modified(|current| current.take().is_some());
    }

    pub fn current(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    /// Receiver of the raw handle, including detachment.
    pub fn watch(&self) -> watch::Receiver<Option<T>> {
        self.tx.subscribe()
    }

    /// Stream of attached elements, starting with the current one if any.
    pub fn elements(&self) -> BoxStream<'static, T> {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        stream::unfold(rx, |mut rx| async move {
            loop {
                rx.changed().await.ok()?;
                let element = rx.borrow_and_update().clone();
                if let Some(element) = element {
                    return Some((element, rx));
                }
            }
        })
        .boxed()
    }
}

impl<T: fmt::Debug> fmt::Debug for ElementRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementRef").field(&*self.tx.borrow()).finish()
    }
}
