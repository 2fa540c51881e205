use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// A value with subscribers. Subscribers always observe the latest value;
/// intermediate values may be skipped when they change faster than they are
/// read.
pub struct Signal<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Store `value` if it differs from the current one.
    ///
    /// Returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Store `value` and notify subscribers even if it is unchanged.
    pub fn replace(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Store `value` and notify subscribers unless `token` is cancelled.
    ///
    /// The check and the store happen under the signal's lock, so no value
    /// lands after [`close_with`](Self::close_with) on the same token returns.
    pub fn replace_unless_cancelled(&self, value: T, token: &CancellationToken) -> bool {
        self.tx.send_if_modified(|current| {
            if token.is_cancelled() {
                return false;
            }
            *current = value;
            true
        })
    }

    /// Cancel `token` while holding the signal's lock.
    ///
    /// Waits for an in-flight [`replace_unless_cancelled`](Self::replace_unless_cancelled)
    /// to finish; later ones guarded by `token` or its children are rejected.
    pub fn close_with(&self, token: &CancellationToken) {
        self.tx.send_if_modified(|_| {
            token.cancel();
            false
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Stream of values, starting with the current one.
    pub fn changes(&self) -> BoxStream<'static, T> {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let value = rx.borrow_and_update().clone();
            Some((value, rx))
        })
        .boxed()
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&*self.tx.borrow()).finish()
    }
}
