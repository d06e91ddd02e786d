//! Runtime primitives for masonry grids.
//!
//! Layout is synchronous; the only asynchronous work in a grid is content
//! acquisition. This crate holds the plumbing that work runs on: cooperative
//! cancellation, a queue that delivers background results to the owning
//! thread, and a helper that launches work on a worker thread.

mod cancel;
mod dispatcher;
pub mod hash;
mod task;

pub use cancel::*;
pub use dispatcher::*;
pub use task::*;

use std::hash::{Hash, Hasher};

/// Stable 64-bit key for any hashable value.
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = hash::default::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
