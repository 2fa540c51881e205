use std::future::Future;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// A slot running at most one task at a time.
///
/// Starting a task cancels the one before it, so only the most recent
/// request makes progress. Every task is a child of the parent token and is
/// cancelled with it; dropping the slot cancels its task.
pub struct SwitchTask {
    name: &'static str,
    handle: Handle,
    parent: CancellationToken,
    current: Option<CancellationToken>,
}

impl SwitchTask {
    pub fn new(name: &'static str, handle: Handle, parent: &CancellationToken) -> Self {
        Self {
            name,
            handle,
            parent: parent.clone(),
            current: None,
        }
    }

    /// Cancel the running task and spawn the future built by `task`.
    ///
    /// `task` receives the new task's token; nested slots should use it as
    /// their parent. The future is not polled again once the token is
    /// cancelled.
    pub fn switch_to<F, Fut>(&mut self, task: F)
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        if self.parent.is_cancelled() {
            log::debug!("{}: parent cancelled, not starting task", self.name);
            return;
        }

        let token = self.parent.child_token();
        let future = task(token.clone());
        self.current = Some(token.clone());
        log::debug!("{}: switched to new task", self.name);

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = future => {}
            }
        });
    }

    /// Cancel the running task, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
            log::debug!("{}: cancelled running task", self.name);
        }
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Drop for SwitchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
