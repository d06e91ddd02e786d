//! Delivery of background results to the thread that owns the UI state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

struct UiDispatcherInner<M> {
    tx: mpsc::Sender<M>,
    pending: AtomicUsize,
}

impl<M> UiDispatcherInner<M> {
    fn post(&self, message: M) -> bool {
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(message).is_err() {
            // Receiver is gone; nobody will ever drain this message.
            self.pending.fetch_sub(1, Ordering::SeqCst);
            return false;
        }
        true
    }
}

struct PendingGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
    fn new(counter: &'a AtomicUsize) -> Self {
        Self { counter }
    }
}

impl<'a> Drop for PendingGuard<'a> {
    fn drop(&mut self) {
        let previous = self.counter.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "UI dispatcher pending count underflowed");
    }
}

/// Sending half of a [`UiQueue`]. Cheap to clone and safe to move to workers.
pub struct UiDispatcher<M> {
    inner: Arc<UiDispatcherInner<M>>,
}

impl<M> Clone for UiDispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Send + 'static> UiDispatcher<M> {
    /// Posts a message for the owning thread. Returns `false` when the queue
    /// has been dropped.
    pub fn post(&self, message: M) -> bool {
        self.inner.post(message)
    }

    pub fn has_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }
}

/// Receiving half, owned by the UI thread.
pub struct UiQueue<M> {
    rx: mpsc::Receiver<M>,
    inner: Arc<UiDispatcherInner<M>>,
}

impl<M: Send + 'static> UiQueue<M> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            inner: Arc::new(UiDispatcherInner {
                tx,
                pending: AtomicUsize::new(0),
            }),
        }
    }

    pub fn dispatcher(&self) -> UiDispatcher<M> {
        UiDispatcher {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Hands every queued message to `handle` without blocking. Returns the
    /// number of messages drained.
    pub fn drain(&self, mut handle: impl FnMut(M)) -> usize {
        let mut drained = 0;
        while let Ok(message) = self.rx.try_recv() {
            let _guard = PendingGuard::new(&self.inner.pending);
            handle(message);
            drained += 1;
        }
        drained
    }

    /// Blocks for at most `timeout` waiting for the next message.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<M> {
        let message = self.rx.recv_timeout(timeout).ok()?;
        let _guard = PendingGuard::new(&self.inner.pending);
        Some(message)
    }

    pub fn has_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }
}

impl<M: Send + 'static> Default for UiQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}
