//! Opt-in reuse of a partition between layout passes

use crate::{
    sanitize_height, BalanceStrategy, ColumnBalancer, ColumnPartition, LayoutError, MasonryItem,
};
use std::hash::{Hash, Hasher};

/// Single-entry memo of the last computed partition.
///
/// The entry is keyed by a fingerprint of the item identity sequence, the
/// column count, the strategy and, when the strategy reads them, the
/// declared heights. A miss recomputes from scratch and replaces the entry;
/// a stored partition is never modified.
#[derive(Debug, Default)]
pub struct PartitionMemo {
    entry: Option<(u64, ColumnPartition)>,
    hits: u64,
    misses: u64,
}

impl PartitionMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition<T: MasonryItem>(
        &mut self,
        items: &[T],
        columns: usize,
        strategy: BalanceStrategy,
    ) -> Result<&ColumnPartition, LayoutError> {
        let fingerprint = fingerprint(items, columns, strategy);
        let entry = match self.entry.take() {
            Some((stored, partition)) if stored == fingerprint => {
                self.hits += 1;
                (stored, partition)
            }
            previous => match ColumnBalancer::new(strategy).balance(items, columns) {
                Ok(partition) => {
                    self.misses += 1;
                    (fingerprint, partition)
                }
                Err(error) => {
                    // A failed pass leaves the previous entry in place.
                    self.entry = previous;
                    return Err(error);
                }
            },
        };
        Ok(&self.entry.insert(entry).1)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn fingerprint<T: MasonryItem>(items: &[T], columns: usize, strategy: BalanceStrategy) -> u64 {
    let mut hasher = masonry_core::hash::default::new();
    columns.hash(&mut hasher);
    strategy.hash(&mut hasher);
    items.len().hash(&mut hasher);
    for item in items {
        item.key().hash(&mut hasher);
        if strategy.reads_heights() {
            sanitize_height(item.declared_height())
                .to_bits()
                .hash(&mut hasher);
        }
    }
    hasher.finish()
}

#[cfg(test)]
#[path = "tests/memo_tests.rs"]
mod tests;
