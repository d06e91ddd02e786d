//! Distribution of items across columns.

use crate::{sanitize_height, ConfigError, LayoutError, MasonryItem};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::ops::AddAssign;

/// Cost metric used to pick the shortest column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BalanceStrategy {
    /// Every item adds one unit to its column. Column item counts never
    /// differ by more than one.
    #[default]
    ItemCount,
    /// Every item adds its declared height to its column.
    DeclaredHeight,
}

impl BalanceStrategy {
    /// Whether the strategy reads declared heights.
    pub fn reads_heights(self) -> bool {
        matches!(self, BalanceStrategy::DeclaredHeight)
    }
}

/// Assignment of input indices to columns.
///
/// Every input index appears in exactly one column and indices within a
/// column are increasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPartition {
    columns: SmallVec<[Vec<usize>; 4]>,
}

impl ColumnPartition {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Indices assigned to `column`, top to bottom.
    pub fn column(&self, column: usize) -> Option<&[usize]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Total number of items across all columns.
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.binary_search(&index).is_ok())
    }

    /// Maps every column back onto references into `items`.
    ///
    /// `items` must be the list the partition was computed from.
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.columns
            .iter()
            .map(|column| column.iter().map(|&index| &items[index]).collect())
            .collect()
    }
}

/// Greedy shortest-column balancer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnBalancer {
    strategy: BalanceStrategy,
}

impl ColumnBalancer {
    pub fn new(strategy: BalanceStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> BalanceStrategy {
        self.strategy
    }

    /// Partitions `items` into `columns` ordered sequences.
    ///
    /// Items are visited in input order; each goes to the column with the
    /// lowest load, ties resolved to the lowest column index. Fails only when
    /// `columns` is zero.
    pub fn balance<T: MasonryItem>(
        &self,
        items: &[T],
        columns: usize,
    ) -> Result<ColumnPartition, LayoutError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns.into());
        }

        let per_column = items.len() / columns + 1;
        let mut slots: SmallVec<[Vec<usize>; 4]> = (0..columns)
            .map(|_| Vec::with_capacity(per_column))
            .collect();

        // Item counts stay integral so they remain exact for any list length.
        match self.strategy {
            BalanceStrategy::ItemCount => {
                fill_shortest(items, vec![0usize; columns], &mut slots, |_| 1)
            }
            BalanceStrategy::DeclaredHeight => {
                fill_shortest(items, vec![0.0f32; columns], &mut slots, |item| {
                    sanitize_height(item.declared_height())
                })
            }
        }

        Ok(ColumnPartition { columns: slots })
    }
}

fn fill_shortest<T, L>(
    items: &[T],
    mut loads: Vec<L>,
    slots: &mut [Vec<usize>],
    weight: impl Fn(&T) -> L,
) where
    L: PartialOrd + Copy + AddAssign + Debug,
{
    for (index, item) in items.iter().enumerate() {
        let column = find_shortest_column(&loads);
        slots[column].push(index);
        loads[column] += weight(item);
    }
    log::trace!(
        "balanced {} items into {} columns: loads {:?}",
        items.len(),
        loads.len(),
        loads
    );
}

/// Convenience wrapper around [`ColumnBalancer::balance`].
pub fn balance_columns<T: MasonryItem>(
    items: &[T],
    columns: usize,
    strategy: BalanceStrategy,
) -> Result<ColumnPartition, LayoutError> {
    ColumnBalancer::new(strategy).balance(items, columns)
}

/// Index of the smallest load; the first one wins on ties. An empty slice
/// yields `0`.
pub fn find_shortest_column<L: PartialOrd + Copy>(loads: &[L]) -> usize {
    let mut index = 0;
    let mut best = match loads.first() {
        Some(&load) => load,
        None => return 0,
    };
    for (i, &load) in loads.iter().enumerate().skip(1) {
        if load < best {
            best = load;
            index = i;
        }
    }
    index
}

#[cfg(test)]
#[path = "tests/balancer_tests.rs"]
mod tests;
