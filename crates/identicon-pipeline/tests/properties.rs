//! Integration test: pipeline invariants over a spread of inputs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use identicon_pipeline::{
    CANVAS_SIZE, CELL_COUNT, CELL_SIZE, GRID_SIZE, GridCell, HASH_LEN, Md5Hasher, Pipeline,
    process,
};

fn inputs() -> Vec<String> {
    let mut inputs: Vec<String> = (0..200).map(|i| format!("user-{i}")).collect();
    inputs.extend(
        ["", " ", "elixir", "Elixir", "ünïcödé", "a/b/c", "\0", "🦀🦀🦀"]
            .iter()
            .map(ToString::to_string),
    );
    inputs.push("x".repeat(10_000));
    inputs
}

#[test]
fn pipeline_is_deterministic() {
    for input in inputs() {
        let a = process(input.as_bytes()).unwrap();
        let b = process(input.as_bytes()).unwrap();
        assert_eq!(a, b, "input {input:?}");
    }
}

#[test]
fn digest_has_sixteen_bytes() {
    for input in inputs() {
        let hashed = Pipeline::new(input.into_bytes()).hash(&Md5Hasher).unwrap();
        assert_eq!(hashed.hash().as_bytes().len(), HASH_LEN);
    }
}

#[test]
fn built_grid_is_mirrored() {
    for input in inputs() {
        let built = Pipeline::new(input.clone().into_bytes())
            .hash(&Md5Hasher)
            .unwrap()
            .pick_color()
            .build_grid();
        let grid = built.grid();
        assert_eq!(grid.len(), CELL_COUNT);
        for row in 0..GRID_SIZE {
            let base = row * GRID_SIZE;
            assert_eq!(grid[base].value, grid[base + 4].value, "{input:?} row {row}");
            assert_eq!(
                grid[base + 1].value,
                grid[base + 3].value,
                "{input:?} row {row}"
            );
        }
    }
}

#[test]
fn filter_keeps_exactly_the_even_cells() {
    for input in inputs() {
        let built = Pipeline::new(input.into_bytes())
            .hash(&Md5Hasher)
            .unwrap()
            .pick_color()
            .build_grid();
        let expected: Vec<GridCell> = built
            .grid()
            .iter()
            .copied()
            .filter(|c| c.value % 2 == 0)
            .collect();
        let filtered = built.filter_odd_squares();
        assert_eq!(filtered.grid(), expected.as_slice());
    }
}

#[test]
fn pixel_map_is_bounded_and_disjoint() {
    for input in inputs() {
        let descriptor = process(input.as_bytes()).unwrap();
        assert_eq!(descriptor.pixel_map().len(), descriptor.grid().len());

        for (cell, rect) in descriptor.grid().iter().zip(descriptor.pixel_map()) {
            assert!(cell.index < CELL_COUNT);
            assert!(rect.fits_within(CANVAS_SIZE, CANVAS_SIZE));
            assert_eq!(rect.width(), CELL_SIZE);
            assert_eq!(rect.height(), CELL_SIZE);
            assert_eq!(rect.top_left.x, u32::try_from(cell.column()).unwrap() * CELL_SIZE);
        }

        let rects = descriptor.pixel_map();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }
}

#[test]
fn filled_squares_are_mirror_symmetric() {
    for input in inputs() {
        let descriptor = process(input.as_bytes()).unwrap();
        let filled: Vec<usize> = descriptor.grid().iter().map(|c| c.index).collect();
        for &index in &filled {
            let row = index / GRID_SIZE;
            let mirrored = row * GRID_SIZE + (GRID_SIZE - 1 - index % GRID_SIZE);
            assert!(filled.contains(&mirrored), "{input:?}: {index} without {mirrored}");
        }
    }
}

#[test]
fn color_comes_from_the_digest_prefix() {
    for input in inputs() {
        let descriptor = process(input.as_bytes()).unwrap();
        let bytes = descriptor.hash().as_bytes();
        assert_eq!(descriptor.color().to_array(), [bytes[0], bytes[1], bytes[2]]);
    }
}

#[test]
fn descriptor_round_trips_through_json() {
    let descriptor = process(b"elixir").unwrap();
    let json = serde_json::to_string_pretty(&descriptor).unwrap();
    let back: identicon_pipeline::ImageDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, descriptor);
}
