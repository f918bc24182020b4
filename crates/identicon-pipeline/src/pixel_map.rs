//! Pixel mapping: turn grid indices into 50x50 canvas rectangles.

use crate::types::{CELL_COUNT, CELL_SIZE, GridCell, PixelPoint, PixelRect};

/// Map each retained cell to its rectangle, preserving order.
///
/// Only reachable with cells produced by [`build_grid`](crate::grid::build_grid),
/// whose indices are always below [`CELL_COUNT`].
#[must_use = "returns the pixel map"]
pub(crate) fn build_pixel_map(grid: &[GridCell]) -> Vec<PixelRect> {
    let rects: Vec<PixelRect> = grid.iter().copied().filter_map(cell_rect).collect();
    debug_assert_eq!(rects.len(), grid.len());
    rects
}

/// The rectangle covered by `cell`, or `None` if its index lies outside
/// the 5x5 grid.
///
/// `horizontal = column * 50`, `vertical = row * 50`; the rectangle
/// spans `(horizontal, vertical)` to `(horizontal + 50, vertical + 50)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_rect(cell: GridCell) -> Option<PixelRect> {
    if cell.index >= CELL_COUNT {
        return None;
    }
    let horizontal = cell.column() as u32 * CELL_SIZE;
    let vertical = cell.row() as u32 * CELL_SIZE;
    Some(PixelRect::new(
        PixelPoint::new(horizontal, vertical),
        PixelPoint::new(horizontal + CELL_SIZE, vertical + CELL_SIZE),
    ))
}
