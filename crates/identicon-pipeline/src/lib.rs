//! identicon-pipeline: Pure identicon pipeline (sans-IO).
//!
//! Converts an input string into the description of a 250x250
//! identicon through:
//! hash -> color -> mirrored grid -> odd-square filter -> pixel map.
//!
//! This crate has **no I/O dependencies**. It operates on in-memory
//! byte slices and returns an [`ImageDescriptor`]. Rasterizing and
//! encoding live in `identicon-export`, and filesystem access lives in
//! the `identicon` binary.

pub mod color;
pub mod diagnostics;
pub mod filter;
pub mod grid;
pub mod hash;
pub mod pipeline;
pub mod pixel_map;
pub mod types;

pub use hash::{Hasher, Md5Hasher};
pub use pipeline::Pipeline;
pub use types::{
    CANVAS_SIZE, CELL_COUNT, CELL_SIZE, CHUNK_LEN, Color, GRID_SIZE, GridCell, HASH_LEN,
    HashBytes, ImageDescriptor, PipelineError, PixelPoint, PixelRect,
};

/// Run the full pipeline with MD5.
///
/// # Pipeline steps
///
/// 1. MD5 digest of `input` (16 bytes)
/// 2. Fill color from the first three digest bytes
/// 3. 5x5 grid, each row mirrored from three digest bytes
/// 4. Drop odd-valued cells
/// 5. Map retained cells to 50x50 rectangles
///
/// # Errors
///
/// MD5 always yields 16 bytes, so this only fails if that contract is
/// broken. See [`process_with`].
pub fn process(input: &[u8]) -> Result<ImageDescriptor, PipelineError> {
    process_with(input, &Md5Hasher)
}

/// Run the full pipeline with an injected [`Hasher`].
///
/// # Errors
///
/// Returns [`PipelineError::DigestLength`] if `hasher` does not produce
/// exactly 16 bytes.
pub fn process_with<H: Hasher + ?Sized>(
    input: &[u8],
    hasher: &H,
) -> Result<ImageDescriptor, PipelineError> {
    Ok(Pipeline::new(input.to_vec())
        .hash(hasher)?
        .pick_color()
        .build_grid()
        .filter_odd_squares()
        .build_pixel_map()
        .into_descriptor())
}
