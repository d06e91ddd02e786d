//! Pure math/data for masonry grids
//!
//! Geometry primitives and colors shared by the layout pass and the
//! per-item drawables.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, Point, Rect, Size};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
