//! Horizontal geometry of a grid pass

use crate::{sanitize_height, ConfigError, Constraints, LayoutError, SpacedBy};

/// Validated column geometry for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    total_width: f32,
    spacing: f32,
    columns: usize,
    column_width: f32,
}

impl GridGeometry {
    /// Splits `total_width` into `columns` equal columns separated by
    /// `spacing`.
    ///
    /// Fails when there are no columns, when an input is not finite, when
    /// spacing is negative, or when the resulting column width is not
    /// positive.
    pub fn resolve(total_width: f32, spacing: f32, columns: usize) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns.into());
        }
        if !total_width.is_finite() || !spacing.is_finite() {
            return Err(ConfigError::NonFiniteGeometry {
                total_width,
                spacing,
            }
            .into());
        }
        if spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing { spacing }.into());
        }

        let total_spacing = spacing * (columns - 1) as f32;
        let column_width = (total_width - total_spacing) / columns as f32;
        if column_width <= 0.0 {
            return Err(ConfigError::NonPositiveColumnWidth {
                total_width,
                spacing,
                columns,
            }
            .into());
        }

        Ok(Self {
            total_width,
            spacing,
            columns,
            column_width,
        })
    }

    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Leading x offset of every column, left to right.
    pub fn column_offsets(&self) -> Vec<f32> {
        let widths = vec![self.column_width; self.columns];
        let mut offsets = vec![0.0; self.columns];
        SpacedBy(self.spacing).arrange(&widths, &mut offsets);
        offsets
    }

    /// Constraints for an item of the given declared height.
    pub fn item_constraints(&self, declared_height: f32) -> Constraints {
        Constraints::tight(self.column_width, sanitize_height(declared_height))
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
