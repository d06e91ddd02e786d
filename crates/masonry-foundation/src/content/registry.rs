use super::{ContentLoader, ContentPhase, LoadError, LoadErrorKind};
use indexmap::map::Entry;
use indexmap::IndexMap;
use masonry_core::{spawn_background, TaskHandle, UiQueue};
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use web_time::Instant;

struct ContentSlot<C> {
    source: String,
    phase: ContentPhase<C>,
    generation: u64,
    // Held while the acquisition is in flight; dropping it cancels the work.
    task: Option<TaskHandle>,
    started: Instant,
}

struct Completion<K, C> {
    key: K,
    generation: u64,
    result: Result<C, LoadError>,
}

// Wait slice used when the caller's timeout has no representable deadline.
const UNBOUNDED_WAIT_SLICE: Duration = Duration::from_secs(3600);

type SlotMap<K, C> = IndexMap<K, ContentSlot<C>, FxBuildHasher>;

/// Content phases of the displayed items, keyed by item identity.
///
/// The registry is owned by the thread that renders the grid. Acquisitions
/// run on worker threads and their results come back through a UI queue;
/// [`ContentRegistry::pump`] applies them. A result is only ever written to
/// the phase of the item that requested it, and is discarded when that item
/// has been removed or retried in the meantime.
pub struct ContentRegistry<K, C> {
    loader: Arc<dyn ContentLoader<Content = C>>,
    slots: SlotMap<K, C>,
    queue: UiQueue<Completion<K, C>>,
    next_generation: u64,
}

impl<K, C> ContentRegistry<K, C>
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
    C: Send + 'static,
{
    pub fn new<L>(loader: L) -> Self
    where
        L: ContentLoader<Content = C>,
    {
        Self {
            loader: Arc::new(loader),
            slots: SlotMap::default(),
            queue: UiQueue::new(),
            next_generation: 0,
        }
    }

    /// Current phase for `key`, starting an acquisition of `source` when the
    /// item has no phase yet.
    ///
    /// A key whose source changed is treated as new content and restarts in
    /// `Pending`.
    pub fn phase(&mut self, key: &K, source: &str) -> &ContentPhase<C> {
        let generation = self.next_generation;
        match self.slots.entry(key.clone()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if slot.source != source {
                    log::debug!("content source for {key:?} changed, restarting");
                    self.next_generation += 1;
                    *slot = launch(&self.loader, &self.queue, key.clone(), source, generation);
                }
                &slot.phase
            }
            Entry::Vacant(entry) => {
                self.next_generation += 1;
                let slot = launch(&self.loader, &self.queue, key.clone(), source, generation);
                &entry.insert(slot).phase
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&ContentPhase<C>> {
        self.slots.get(key).map(|slot| &slot.phase)
    }

    /// Applies every acquisition result delivered so far without blocking.
    /// Returns the number of phases that settled.
    pub fn pump(&mut self) -> usize {
        let slots = &mut self.slots;
        let mut applied = 0;
        self.queue.drain(|completion| {
            if apply(slots, completion) {
                applied += 1;
            }
        });
        applied
    }

    /// Blocks until no phase is pending or `timeout` elapses. Returns whether
    /// everything settled.
    ///
    /// A timeout too large to express as a deadline waits without one.
    pub fn wait_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        self.pump();
        while self.pending_count() > 0 {
            let wait = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    deadline - now
                }
                None => UNBOUNDED_WAIT_SLICE,
            };
            if let Some(completion) = self.queue.recv_timeout(wait) {
                apply(&mut self.slots, completion);
                self.pump();
            }
        }
        true
    }

    /// Drops the phase of every item not in `displayed`, cancelling its
    /// in-flight acquisition. Returns how many phases were dropped.
    pub fn retain_keys<'a, I>(&mut self, displayed: I) -> usize
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let keep: FxHashSet<&K> = displayed.into_iter().collect();
        let before = self.slots.len();
        self.slots.retain(|key, slot| {
            let shown = keep.contains(key);
            if !shown && slot.phase.is_pending() {
                log::debug!("{key:?} left the grid; cancelling its acquisition");
            }
            shown
        });
        before - self.slots.len()
    }

    /// Restarts acquisition for a failed item. Returns `false` when the item
    /// is unknown or has not failed.
    pub fn retry(&mut self, key: &K) -> bool {
        let Some(slot) = self.slots.get_mut(key) else {
            return false;
        };
        if !slot.phase.is_failed() {
            return false;
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        let source = std::mem::take(&mut slot.source);
        log::debug!("retrying {key:?} from {source}");
        *slot = launch(&self.loader, &self.queue, key.clone(), &source, generation);
        true
    }

    /// Items with an acquisition still in flight.
    pub fn pending_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.phase.is_pending())
            .count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Phases in the order their items first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &ContentPhase<C>)> + '_ {
        self.slots.iter().map(|(key, slot)| (key, &slot.phase))
    }
}

fn launch<K, C>(
    loader: &Arc<dyn ContentLoader<Content = C>>,
    queue: &UiQueue<Completion<K, C>>,
    key: K,
    source: &str,
    generation: u64,
) -> ContentSlot<C>
where
    K: Debug + Send + 'static,
    C: Send + 'static,
{
    log::debug!("acquiring {source} for {key:?}");
    let task = TaskHandle::new();
    let loader = Arc::clone(loader);
    let request = source.to_owned();
    spawn_background(&queue.dispatcher(), task.token(), move |token| {
        let result = panic::catch_unwind(AssertUnwindSafe(|| loader.load(&request, token)))
            .unwrap_or_else(|_| Err(LoadError::new(request.as_str(), LoadErrorKind::Panicked)));
        Completion {
            key,
            generation,
            result,
        }
    });
    ContentSlot {
        source: source.to_owned(),
        phase: ContentPhase::Pending,
        generation,
        task: Some(task),
        started: Instant::now(),
    }
}

fn apply<K, C>(slots: &mut SlotMap<K, C>, completion: Completion<K, C>) -> bool
where
    K: Eq + Hash + Debug,
{
    let Completion {
        key,
        generation,
        result,
    } = completion;
    let Some(slot) = slots.get_mut(&key) else {
        log::debug!("discarding result for {key:?}: no longer displayed");
        return false;
    };
    if slot.generation != generation {
        log::debug!("discarding stale result for {key:?} (generation {generation})");
        return false;
    }
    if let Err(error) = &result {
        log::warn!("content for {key:?} failed: {error}");
    }
    let settled = slot.phase.complete(result);
    if settled {
        slot.task = None;
        log::debug!(
            "{key:?} {} after {:?}",
            slot.phase.label(),
            slot.started.elapsed()
        );
    }
    settled
}
