//! Testing utilities for masonry grids.
//!
//! [`TestItem`] is a minimal grid item. [`ScriptedLoader`] answers every
//! acquisition immediately according to a script, while [`GatedLoader`]
//! parks each acquisition until the test releases it, which lets tests
//! control completion order and observe cancellation.

mod gated;
mod items;
mod scripted;

pub use gated::GatedLoader;
pub use items::{items_with_heights, TestItem};
pub use scripted::ScriptedLoader;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
