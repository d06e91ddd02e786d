//! Masonry grid rendering
//!
//! [`MasonryGrid`] balances items across columns, stacks each column and
//! hands every item to a caller-supplied content callback. The per-item
//! content phase is turned into something drawable by [`render_phase`], and
//! [`AsyncImage`] binds that to a [`ContentRegistry`].

mod async_image;
mod grid;
mod layout;
mod phase_view;

pub use async_image::*;
pub use grid::*;
pub use layout::*;
pub use phase_view::*;

pub use masonry_foundation::{
    loader_fn, ContentLoader, ContentPhase, ContentRegistry, LoadError, LoadErrorKind,
};
pub use masonry_ui_graphics::{Color, CornerRadii, Point, Rect, Size};
pub use masonry_ui_layout::{
    balance_columns, sanitize_height, BalanceStrategy, ColumnPartition, ConfigError, Constraints,
    LayoutError, MasonryItem, PartitionMemo,
};

pub mod prelude {
    pub use crate::async_image::AsyncImage;
    pub use crate::grid::{MasonryGrid, MasonrySpec};
    pub use crate::layout::{GridLayout, RenderedGrid};
    pub use crate::phase_view::{render_phase, Drawable};
    pub use masonry_foundation::prelude::*;
    pub use masonry_ui_graphics::prelude::*;
    pub use masonry_ui_layout::prelude::*;
}
