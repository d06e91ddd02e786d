//! Layout contracts & policies for masonry grids
//!
//! [`ColumnBalancer`] distributes items across a fixed number of columns,
//! [`GridGeometry`] turns a content width into column widths and offsets, and
//! [`PartitionMemo`] optionally reuses a partition between passes whose
//! inputs did not change.

mod arrangement;
mod balancer;
mod constraints;
mod error;
mod geometry;
mod item;
mod memo;

pub use arrangement::*;
pub use balancer::*;
pub use constraints::*;
pub use error::*;
pub use geometry::*;
pub use item::*;
pub use memo::*;

pub mod prelude {
    pub use crate::balancer::{balance_columns, BalanceStrategy, ColumnBalancer, ColumnPartition};
    pub use crate::constraints::Constraints;
    pub use crate::error::{ConfigError, LayoutError};
    pub use crate::geometry::GridGeometry;
    pub use crate::item::MasonryItem;
}
