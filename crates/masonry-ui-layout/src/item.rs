use std::hash::Hash;

/// An item that can be placed in a masonry grid.
///
/// Implementations must be immutable for the duration of a layout pass and
/// keys must be unique within one item list.
pub trait MasonryItem {
    /// Identity of the item, used to key per-item content state.
    type Key: Clone + Eq + Hash;

    fn key(&self) -> Self::Key;

    /// Height hint used to size the item's frame and, with
    /// [`BalanceStrategy::DeclaredHeight`](crate::BalanceStrategy), to
    /// balance columns.
    fn declared_height(&self) -> f32;
}

impl<T: MasonryItem> MasonryItem for &T {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }

    fn declared_height(&self) -> f32 {
        (**self).declared_height()
    }
}

/// Clamps a declared height to a usable, non-negative finite value.
pub fn sanitize_height(height: f32) -> f32 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
