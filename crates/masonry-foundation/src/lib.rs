//! Content loading for masonry grid items.
//!
//! Each displayed item owns one [`ContentPhase`] that starts `Pending`,
//! settles exactly once into `Loaded` or `Failed`, and is discarded when the
//! item leaves the grid. [`ContentRegistry`] keeps those phases keyed by item
//! identity and runs every acquisition on its own worker.

pub mod content;

pub use content::*;

pub mod prelude {
    pub use crate::content::{
        ContentLoader, ContentPhase, ContentRegistry, LoadError, LoadErrorKind,
    };
}
