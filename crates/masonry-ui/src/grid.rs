//! The masonry grid: balance, lay out, then render every item

use crate::layout::{GridLayout, RenderedGrid, RenderedItem};
use masonry_ui_layout::{
    balance_columns, BalanceStrategy, GridGeometry, LayoutError, MasonryItem, PartitionMemo,
};
use web_time::Instant;

/// Column count, spacing and balancing of a masonry grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasonrySpec {
    pub columns: usize,
    pub spacing: f32,
    pub strategy: BalanceStrategy,
}

impl MasonrySpec {
    pub const DEFAULT_COLUMNS: usize = 2;
    pub const DEFAULT_SPACING: f32 = 12.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn strategy(mut self, strategy: BalanceStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for MasonrySpec {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            spacing: Self::DEFAULT_SPACING,
            strategy: BalanceStrategy::default(),
        }
    }
}

/// A masonry grid over borrowed items.
///
/// The grid holds no layout state between passes: every call to
/// [`layout`](Self::layout) or [`render`](Self::render) recomputes the
/// partition and frames from the current items, spec and width.
pub struct MasonryGrid<'a, T, F> {
    items: &'a [T],
    spec: MasonrySpec,
    content: F,
}

impl<'a, T, F> MasonryGrid<'a, T, F>
where
    T: MasonryItem,
{
    pub fn new<O>(items: &'a [T], spec: MasonrySpec, content: F) -> Self
    where
        F: FnMut(&T, f32) -> O,
    {
        Self {
            items,
            spec,
            content,
        }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn spec(&self) -> &MasonrySpec {
        &self.spec
    }

    /// Computes every item frame for a content width of `width`.
    pub fn layout(&self, width: f32) -> Result<GridLayout, LayoutError> {
        let geometry = self.geometry(width)?;
        let partition = balance_columns(self.items, self.spec.columns, self.spec.strategy)?;
        Ok(GridLayout::build(self.items, &partition, geometry))
    }

    /// Like [`layout`](Self::layout), reusing the partition held by `memo`
    /// when the items, column count and strategy did not change.
    pub fn layout_in(
        &self,
        width: f32,
        memo: &mut PartitionMemo,
    ) -> Result<GridLayout, LayoutError> {
        let geometry = self.geometry(width)?;
        let partition = memo.partition(self.items, self.spec.columns, self.spec.strategy)?;
        Ok(GridLayout::build(self.items, partition, geometry))
    }

    /// Identities of the items in this pass, in input order.
    pub fn displayed_keys(&self) -> Vec<T::Key> {
        self.items.iter().map(|item| item.key()).collect()
    }

    fn geometry(&self, width: f32) -> Result<GridGeometry, LayoutError> {
        GridGeometry::resolve(width, self.spec.spacing, self.spec.columns).map_err(|error| {
            log::warn!("masonry grid of {} items: {error}", self.items.len());
            error
        })
    }
}

impl<'a, T, F, O> MasonryGrid<'a, T, F>
where
    T: MasonryItem,
    F: FnMut(&T, f32) -> O,
{
    /// Lays the grid out, then calls the content callback once per item with
    /// the column width, column by column and top to bottom.
    ///
    /// When the layout fails the callback is not called at all.
    pub fn render(&mut self, width: f32) -> Result<RenderedGrid<O>, LayoutError> {
        let layout = self.layout(width)?;
        Ok(self.emit(layout))
    }

    /// [`render`](Self::render) with a memoized partition.
    pub fn render_in(
        &mut self,
        width: f32,
        memo: &mut PartitionMemo,
    ) -> Result<RenderedGrid<O>, LayoutError> {
        let layout = self.layout_in(width, memo)?;
        Ok(self.emit(layout))
    }

    fn emit(&mut self, layout: GridLayout) -> RenderedGrid<O> {
        let started = Instant::now();
        let items = self.items;
        let content = &mut self.content;
        let column_width = layout.column_width();
        let rendered: Vec<RenderedItem<O>> = layout
            .placed_items()
            .map(|placed| RenderedItem {
                index: placed.index,
                column: placed.column,
                frame: placed.frame,
                output: content(&items[placed.index], column_width),
            })
            .collect();
        log::trace!(
            "rendered {} items in {} columns of {column_width} in {:?}",
            rendered.len(),
            layout.columns().len(),
            started.elapsed()
        );
        RenderedGrid::new(layout, rendered)
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
