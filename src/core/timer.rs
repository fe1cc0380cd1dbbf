use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a scheduled one-shot callback
///
/// Dropping the handle leaves the timer running; call [`TimerHandle::cancel`]
/// to stop it.
#[derive(Debug)]
pub struct TimerHandle {
    join: JoinHandle<()>,
}

/// Run `f` once after `delay` on the current tokio runtime
pub fn schedule<F>(delay: Duration, f: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let join = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        f();
    });

    TimerHandle { join }
}

impl TimerHandle {
    /// Cancel the timer. No-op if it already fired or was cancelled.
    pub fn cancel(&self) {
        self.join.abort();
    }

    /// Whether the callback ran or the timer was cancelled
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
