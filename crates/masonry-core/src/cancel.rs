use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owning side of a cancellation flag.
///
/// Whoever holds the handle decides the lifetime of the work it launched:
/// calling [`TaskHandle::cancel`] or dropping the handle flips every
/// [`CancelToken`] obtained from it to "cancelled".
#[derive(Debug)]
pub struct TaskHandle {
    active: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns a token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken::new(Arc::clone(&self.active))
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Cooperative cancellation token passed into background work.
///
/// The token flips to "cancelled" when its [`TaskHandle`] is cancelled or
/// dropped. Long-running work should check [`CancelToken::is_cancelled`] and
/// exit early; blocking I/O will not be interrupted automatically.
#[derive(Clone, Debug)]
pub struct CancelToken {
    active: Arc<AtomicBool>,
}

impl CancelToken {
    fn new(active: Arc<AtomicBool>) -> Self {
        Self { active }
    }

    /// Returns `true` once the owning handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        !self.active.load(Ordering::SeqCst)
    }

    /// Returns whether the owning handle is still active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
