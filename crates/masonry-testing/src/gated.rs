use crate::lock;
use masonry_core::CancelToken;
use masonry_foundation::{ContentLoader, LoadError};
use masonry_ui_graphics::Size;
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

const POLL: Duration = Duration::from_millis(5);

#[derive(Default)]
struct Gate {
    started: Vec<String>,
    released: HashMap<String, Result<Size, String>>,
    cancelled: Vec<String>,
}

#[derive(Default)]
struct Shared {
    gate: Mutex<Gate>,
    changed: Condvar,
}

/// Loader that parks every acquisition until the test releases its source.
///
/// A parked acquisition whose token gets cancelled gives up and is recorded
/// in [`GatedLoader::cancelled`].
#[derive(Clone, Default)]
pub struct GatedLoader {
    shared: Arc<Shared>,
}

impl GatedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets the parked (or future) acquisition of `source` finish with
    /// `outcome`; `Err` carries the failure reason.
    pub fn release(&self, source: &str, outcome: Result<Size, String>) {
        lock(&self.shared.gate)
            .released
            .insert(source.to_owned(), outcome);
        self.shared.changed.notify_all();
    }

    /// Waits until an acquisition of `source` has started.
    pub fn wait_started(&self, source: &str, timeout: Duration) -> bool {
        self.wait_until(timeout, |gate| gate.started.iter().any(|s| s == source))
    }

    /// Waits until the parked acquisition of `source` observed cancellation.
    pub fn wait_cancelled(&self, source: &str, timeout: Duration) -> bool {
        self.wait_until(timeout, |gate| gate.cancelled.iter().any(|s| s == source))
    }

    pub fn started(&self) -> Vec<String> {
        lock(&self.shared.gate).started.clone()
    }

    pub fn cancelled(&self) -> Vec<String> {
        lock(&self.shared.gate).cancelled.clone()
    }

    fn wait_until(&self, timeout: Duration, done: impl Fn(&Gate) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        let mut gate = lock(&self.shared.gate);
        while !done(&*gate) {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            gate = match self.shared.changed.wait_timeout(gate, deadline - now) {
                Ok((gate, _)) => gate,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
        true
    }
}

impl ContentLoader for GatedLoader {
    type Content = Size;

    fn load(&self, source: &str, token: &CancelToken) -> Result<Size, LoadError> {
        let mut gate = lock(&self.shared.gate);
        gate.started.push(source.to_owned());
        self.shared.changed.notify_all();
        loop {
            if let Some(outcome) = gate.released.remove(source) {
                return outcome.map_err(|reason| LoadError::unavailable(source, reason));
            }
            if token.is_cancelled() {
                gate.cancelled.push(source.to_owned());
                self.shared.changed.notify_all();
                return Err(LoadError::unavailable(source, "cancelled"));
            }
            gate = match self.shared.changed.wait_timeout(gate, POLL) {
                Ok((gate, _)) => gate,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }
}
