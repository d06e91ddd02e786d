//! Positioned output of one grid pass

use masonry_ui_graphics::{Rect, Size};
use masonry_ui_layout::{
    sanitize_height, ColumnPartition, Constraints, GridGeometry, MasonryItem, SpacedBy,
};
use smallvec::SmallVec;

/// An item with its place in the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedItem {
    /// Position of the item in the input list.
    pub index: usize,
    pub column: usize,
    /// Position of the item inside its column.
    pub row: usize,
    pub frame: Rect,
    pub constraints: Constraints,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    pub index: usize,
    /// Leading edge of the column.
    pub x: f32,
    pub width: f32,
    pub items: Vec<PlacedItem>,
    /// Extent of the stacked items, spacing included.
    pub height: f32,
}

/// Frames of every item for one width, column count and spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    geometry: GridGeometry,
    columns: SmallVec<[ColumnLayout; 4]>,
    // Input index -> (column, row).
    locations: Vec<(usize, usize)>,
    content_height: f32,
}

impl GridLayout {
    pub(crate) fn build<T: MasonryItem>(
        items: &[T],
        partition: &ColumnPartition,
        geometry: GridGeometry,
    ) -> Self {
        let offsets = geometry.column_offsets();
        let stack = SpacedBy(geometry.spacing());
        let column_width = geometry.column_width();
        let mut locations = vec![(0, 0); items.len()];
        let mut columns: SmallVec<[ColumnLayout; 4]> = SmallVec::with_capacity(offsets.len());

        for ((column, indices), x) in partition.columns().enumerate().zip(offsets) {
            let heights: SmallVec<[f32; 16]> = indices
                .iter()
                .map(|&index| sanitize_height(items[index].declared_height()))
                .collect();
            let mut ys: SmallVec<[f32; 16]> = SmallVec::from_elem(0.0, heights.len());
            let height = stack.arrange(&heights, &mut ys);

            let placed = indices
                .iter()
                .zip(heights.iter().zip(ys.iter()))
                .enumerate()
                .map(|(row, (&index, (&item_height, &y)))| {
                    locations[index] = (column, row);
                    PlacedItem {
                        index,
                        column,
                        row,
                        frame: Rect::new(x, y, column_width, item_height),
                        constraints: geometry.item_constraints(item_height),
                    }
                })
                .collect();

            columns.push(ColumnLayout {
                index: column,
                x,
                width: column_width,
                items: placed,
                height,
            });
        }

        let content_height = columns
            .iter()
            .map(|column| column.height)
            .fold(0.0, f32::max);

        Self {
            geometry,
            columns,
            locations,
            content_height,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn column_width(&self) -> f32 {
        self.geometry.column_width()
    }

    pub fn spacing(&self) -> f32 {
        self.geometry.spacing()
    }

    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnLayout> {
        self.columns.get(index)
    }

    /// Height of the tallest column.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.geometry.total_width(), self.content_height)
    }

    pub fn item_count(&self) -> usize {
        self.locations.len()
    }

    pub fn placement_of(&self, index: usize) -> Option<&PlacedItem> {
        let &(column, row) = self.locations.get(index)?;
        self.columns.get(column)?.items.get(row)
    }

    /// Frame of the item at `index` in the input list.
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.placement_of(index).map(|placed| placed.frame)
    }

    /// Every placed item, column by column, top to bottom.
    pub fn placed_items(&self) -> impl Iterator<Item = &PlacedItem> + '_ {
        self.columns.iter().flat_map(|column| column.items.iter())
    }
}

/// One content callback result with the frame it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<O> {
    pub index: usize,
    pub column: usize,
    pub frame: Rect,
    pub output: O,
}

/// Layout of a pass plus the callback output of every item, in invocation
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedGrid<O> {
    layout: GridLayout,
    items: Vec<RenderedItem<O>>,
}

impl<O> RenderedGrid<O> {
    pub(crate) fn new(layout: GridLayout, items: Vec<RenderedItem<O>>) -> Self {
        Self { layout, items }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn items(&self) -> &[RenderedItem<O>] {
        &self.items
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &RenderedItem<O>> + '_ {
        self.items.iter().filter(move |item| item.column == column)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_outputs(self) -> Vec<O> {
        self.items.into_iter().map(|item| item.output).collect()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
