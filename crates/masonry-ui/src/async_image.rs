//! Image cell bound to the content registry

#![allow(non_snake_case)]

use crate::phase_view::{render_phase, ContentSize, Drawable};
use masonry_foundation::ContentRegistry;
use masonry_ui_graphics::Rect;
use std::fmt::Debug;
use std::hash::Hash;

/// Renders the current content phase of `key` into `frame`.
///
/// The first call for a key starts acquiring `source`; later calls only read
/// the phase, so the cell shows a placeholder until [`ContentRegistry::pump`]
/// applies the result.
pub fn AsyncImage<K, C>(
    registry: &mut ContentRegistry<K, C>,
    key: &K,
    source: &str,
    frame: Rect,
) -> Drawable
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
    C: ContentSize + Send + 'static,
{
    render_phase(registry.phase(key, source), frame)
}

#[cfg(test)]
#[path = "tests/async_image_tests.rs"]
mod tests;
