//! Square filtering: keep only the cells that get painted.

use crate::types::GridCell;

/// Drop every cell with an odd value, preserving order.
///
/// An all-odd grid yields an empty vector, which renders as a blank
/// image.
#[must_use = "returns the filtered grid"]
pub fn filter_odd_squares(grid: Vec<GridCell>) -> Vec<GridCell> {
    grid.into_iter().filter(GridCell::is_even).collect()
}
