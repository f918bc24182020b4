//! Integration test: run "elixir" through the pipeline, encode to PNG,
//! and check the decoded pixels cell by cell.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use identicon_pipeline::{CANVAS_SIZE, CELL_COUNT, CELL_SIZE, GRID_SIZE};

/// Centre pixel of the cell at `index`.
fn cell_centre(index: usize) -> (u32, u32) {
    let column = u32::try_from(index % GRID_SIZE).unwrap();
    let row = u32::try_from(index / GRID_SIZE).unwrap();
    (
        column * CELL_SIZE + CELL_SIZE / 2,
        row * CELL_SIZE + CELL_SIZE / 2,
    )
}

#[test]
fn elixir_pipeline_to_png() {
    let descriptor = identicon_pipeline::process(b"elixir").expect("pipeline should succeed");
    let png = identicon_export::to_png(&descriptor).expect("encoding should succeed");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));

    let filled = [0, 4, 5, 6, 8, 9, 10, 11, 13, 14, 15, 19, 20, 22, 24];
    let fill = image::Rgba([116, 181, 101, 255]);
    let background = identicon_export::raster::BACKGROUND;

    for index in 0..CELL_COUNT {
        let (x, y) = cell_centre(index);
        let expected = if filled.contains(&index) {
            fill
        } else {
            background
        };
        assert_eq!(*decoded.get_pixel(x, y), expected, "cell {index}");
    }
}

#[test]
fn rendered_image_is_left_right_symmetric() {
    for input in ["alice", "bob", "carol", "dave", ""] {
        let descriptor = identicon_pipeline::process(input.as_bytes()).unwrap();
        let img = identicon_export::render(&descriptor).unwrap();
        for y in (0..CANVAS_SIZE).step_by(10) {
            for x in 0..CANVAS_SIZE / 2 {
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(CANVAS_SIZE - 1 - x, y),
                    "{input:?} at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn blank_descriptor_renders_white() {
    let descriptor =
        identicon_pipeline::process_with(b"", &|_: &[u8]| vec![3u8; 16]).unwrap();
    assert!(descriptor.is_blank());
    let img = identicon_export::render(&descriptor).unwrap();
    assert!(img.pixels().all(|p| *p == identicon_export::raster::BACKGROUND));
}
