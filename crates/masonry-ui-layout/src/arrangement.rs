//! Placement of consecutive children along one axis

/// Places children consecutively with a fixed gap between neighbours.
///
/// Used both for columns across the grid and for items down a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacedBy(pub f32);

impl SpacedBy {
    /// Writes the leading-edge position of each child into `out_positions`
    /// and returns the extent covered, from the first leading edge to the
    /// last trailing edge.
    pub fn arrange(&self, sizes: &[f32], out_positions: &mut [f32]) -> f32 {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let mut cursor = 0.0;
        for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
            *position = cursor;
            cursor += size;
            if index + 1 < sizes.len() {
                cursor += self.0;
            }
        }
        cursor
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
