//! Shared types for the identicon pipeline.

use serde::{Deserialize, Serialize};

/// Number of cells along each side of the grid.
pub const GRID_SIZE: usize = 5;

/// Total number of cells in the grid (`GRID_SIZE * GRID_SIZE`).
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of independent hash values that seed one mirrored row.
pub const CHUNK_LEN: usize = 3;

/// Length of the digest the pipeline consumes, in bytes.
pub const HASH_LEN: usize = 16;

/// Side length of one grid cell in pixels.
pub const CELL_SIZE: u32 = 50;

/// Side length of the square output canvas in pixels.
#[allow(clippy::cast_possible_truncation)]
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_SIZE as u32;

/// The 16-byte digest of the input string.
///
/// The length is fixed by the type, so every downstream stage may index
/// the first [`CHUNK_LEN`] `*` [`GRID_SIZE`] bytes without checking.
/// Construction from an arbitrary byte vector goes through
/// [`TryFrom`], which rejects anything other than exactly
/// [`HASH_LEN`] bytes instead of truncating or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct HashBytes([u8; HASH_LEN]);

impl HashBytes {
    /// Wrap an already fixed-length digest.
    #[must_use]
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// The digest bytes in order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// The digest as lowercase hexadecimal.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<Vec<u8>> for HashBytes {
    type Error = PipelineError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for HashBytes {
    type Error = PipelineError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; HASH_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| PipelineError::DigestLength {
                expected: HASH_LEN,
                actual: bytes.len(),
            })
    }
}

impl From<HashBytes> for Vec<u8> {
    fn from(hash: HashBytes) -> Self {
        hash.0.to_vec()
    }
}

/// An opaque RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// One cell of the 5x5 grid: a hash-derived value and its row-major
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// The mirrored hash value occupying this cell.
    pub value: u8,
    /// Row-major position in `0..CELL_COUNT`.
    pub index: usize,
}

impl GridCell {
    /// Create a new grid cell.
    #[must_use]
    pub const fn new(value: u8, index: usize) -> Self {
        Self { value, index }
    }

    /// Grid row of this cell (`index / GRID_SIZE`).
    #[must_use]
    pub const fn row(self) -> usize {
        self.index / GRID_SIZE
    }

    /// Grid column of this cell (`index % GRID_SIZE`).
    #[must_use]
    pub const fn column(self) -> usize {
        self.index % GRID_SIZE
    }

    /// Whether the value is even, i.e. whether the cell gets filled.
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.value % 2 == 0
    }
}

/// An integer pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal position (pixels from left edge).
    pub x: u32,
    /// Vertical position (pixels from top edge).
    pub y: u32,
}

impl PixelPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left and bottom-right
/// corners. The bottom-right corner is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    /// Inclusive top-left corner.
    pub top_left: PixelPoint,
    /// Exclusive bottom-right corner.
    pub bottom_right: PixelPoint,
}

impl PixelRect {
    /// Create a new rectangle from its corners.
    #[must_use]
    pub const fn new(top_left: PixelPoint, bottom_right: PixelPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// Whether the two rectangles share any pixel.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.top_left.y < other.bottom_right.y
            && other.top_left.y < self.bottom_right.y
    }

    /// Whether the rectangle lies entirely within a `width` x `height`
    /// canvas anchored at the origin.
    #[must_use]
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.top_left.x <= self.bottom_right.x
            && self.top_left.y <= self.bottom_right.y
            && self.bottom_right.x <= width
            && self.bottom_right.y <= height
    }
}

/// The fully populated result of one pipeline run.
///
/// Holds the digest, the fill color, the filtered grid (even-valued
/// cells only), and one rectangle per retained cell. Produced by
/// [`Mapped::into_descriptor`](crate::pipeline::Mapped::into_descriptor)
/// or the [`process`](crate::process) shortcut.
///
/// Deserializing re-derives every field from the digest and rejects a
/// descriptor that does not match, so a decoded value upholds the same
/// invariants as one the pipeline built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImageDescriptor")]
pub struct ImageDescriptor {
    hash: HashBytes,
    color: Color,
    grid: Vec<GridCell>,
    pixel_map: Vec<PixelRect>,
}

impl ImageDescriptor {
    pub(crate) const fn new(
        hash: HashBytes,
        color: Color,
        grid: Vec<GridCell>,
        pixel_map: Vec<PixelRect>,
    ) -> Self {
        Self {
            hash,
            color,
            grid,
            pixel_map,
        }
    }

    /// The 16-byte input digest.
    #[must_use]
    pub const fn hash(&self) -> &HashBytes {
        &self.hash
    }

    /// The digest as lowercase hexadecimal.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        self.hash.to_hex()
    }

    /// The fill color shared by every square.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Retained (even-valued) grid cells in row-major order.
    #[must_use]
    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    /// One rectangle per retained cell, in the same order as [`grid`](Self::grid).
    #[must_use]
    pub fn pixel_map(&self) -> &[PixelRect] {
        &self.pixel_map
    }

    /// Whether no square survived filtering, leaving a blank image.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixel_map.is_empty()
    }
}

/// Unchecked wire form of [`ImageDescriptor`].
#[derive(Deserialize)]
struct RawImageDescriptor {
    hash: HashBytes,
    color: Color,
    grid: Vec<GridCell>,
    pixel_map: Vec<PixelRect>,
}

impl TryFrom<RawImageDescriptor> for ImageDescriptor {
    type Error = PipelineError;

    fn try_from(raw: RawImageDescriptor) -> Result<Self, Self::Error> {
        let color = crate::color::pick_color(&raw.hash);
        if raw.color != color {
            return Err(PipelineError::InconsistentDescriptor { field: "color" });
        }
        let grid = crate::filter::filter_odd_squares(crate::grid::build_grid(&raw.hash));
        if raw.grid != grid {
            return Err(PipelineError::InconsistentDescriptor { field: "grid" });
        }
        let pixel_map = crate::pixel_map::build_pixel_map(&grid);
        if raw.pixel_map != pixel_map {
            return Err(PipelineError::InconsistentDescriptor { field: "pixel_map" });
        }
        Ok(Self::new(raw.hash, color, grid, pixel_map))
    }
}

/// Errors that can occur during pipeline processing.
///
/// Every stage after hashing is infallible. A run fails only when a
/// [`Hasher`](crate::hash::Hasher) breaks the 16-byte contract.
/// Decoding an [`ImageDescriptor`] can also fail when its fields
/// disagree with its digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// The digest did not have the required length.
    #[error("digest must be {expected} bytes, got {actual}")]
    DigestLength {
        /// Required digest length.
        expected: usize,
        /// Length the hasher actually produced.
        actual: usize,
    },

    /// A decoded descriptor field does not follow from its digest.
    #[error("descriptor {field} does not match its digest")]
    InconsistentDescriptor {
        /// Name of the first mismatching field.
        field: &'static str,
    },
}
