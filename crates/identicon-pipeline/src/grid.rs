//! Grid construction: expand the digest into a 5x5 row-mirrored grid.
//!
//! The digest is split into consecutive 3-byte chunks. Each chunk
//! `[a, b, c]` becomes the row `[a, b, c, b, a]`, so every row is
//! symmetric about the centre column. 16 bytes give five full chunks.
//! The trailing byte has no chunk and is dropped.

use crate::types::{CELL_COUNT, CHUNK_LEN, GRID_SIZE, GridCell, HashBytes};

/// Build the 25-cell grid in row-major order, top row first.
///
/// Each cell carries its position `0..25` as `index`, so
/// `row = index / 5` and `column = index % 5`.
#[must_use = "returns the built grid"]
pub fn build_grid(hash: &HashBytes) -> Vec<GridCell> {
    let grid: Vec<GridCell> = hash
        .as_bytes()
        .chunks_exact(CHUNK_LEN)
        .flat_map(mirror_row)
        .enumerate()
        .map(|(index, value)| GridCell::new(value, index))
        .collect();

    debug_assert_eq!(grid.len(), CELL_COUNT, "grid must have 25 cells");
    grid
}

/// Reflect a 3-value chunk into a symmetric 5-value row.
fn mirror_row(chunk: &[u8]) -> [u8; GRID_SIZE] {
    [chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_hash() -> HashBytes {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = u8::try_from((i + 1) * 10).unwrap_or(u8::MAX);
        }
        HashBytes::new(bytes)
    }

    fn values(grid: &[GridCell]) -> Vec<u8> {
        grid.iter().map(|c| c.value).collect()
    }

    #[test]
    fn has_twenty_five_cells() {
        assert_eq!(build_grid(&counting_hash()).len(), CELL_COUNT);
    }

    #[test]
    fn indices_are_sequential() {
        let grid = build_grid(&counting_hash());
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index, i);
        }
    }

    #[test]
    fn first_row_is_mirrored() {
        let grid = build_grid(&counting_hash());
        assert_eq!(values(&grid[..5]), vec![10, 20, 30, 20, 10]);
    }

    #[test]
    fn every_row_is_symmetric() {
        let grid = build_grid(&counting_hash());
        for row in 0..GRID_SIZE {
            let base = row * GRID_SIZE;
            assert_eq!(grid[base].value, grid[base + 4].value, "row {row}");
            assert_eq!(grid[base + 1].value, grid[base + 3].value, "row {row}");
        }
    }

    #[test]
    fn trailing_byte_is_dropped() {
        // Byte 16 (value 160) belongs to no chunk.
        let grid = build_grid(&counting_hash());
        assert!(grid.iter().all(|c| c.value != 160));
        assert_eq!(values(&grid[20..]), vec![130, 140, 150, 140, 130]);
    }

    #[test]
    fn elixir_grid() {
        let hash = HashBytes::new([
            116, 181, 101, 134, 90, 25, 44, 200, 105, 60, 83, 13, 72, 235, 56, 58,
        ]);
        let grid = build_grid(&hash);
        assert_eq!(values(&grid[..5]), vec![116, 181, 101, 181, 116]);
        assert_eq!(values(&grid[5..10]), vec![134, 90, 25, 90, 134]);
        assert_eq!(grid[24], GridCell::new(72, 24));
    }

    #[test]
    fn mirror_row_pattern() {
        assert_eq!(mirror_row(&[1, 2, 3]), [1, 2, 3, 2, 1]);
    }
}
