//! Incremental pipeline: advance stage-by-stage, inspecting each
//! intermediate result before continuing.
//!
//! Unlike [`crate::process`] which runs every stage in one call,
//! [`Pipeline`] lets the caller drive execution one step at a time:
//!
//! ```rust
//! # use identicon_pipeline::{Md5Hasher, Pipeline, PipelineError};
//! # fn run() -> Result<(), PipelineError> {
//! let descriptor = Pipeline::new(b"elixir".to_vec())
//!     .hash(&Md5Hasher)?
//!     .pick_color()
//!     .build_grid()
//!     .filter_odd_squares()
//!     .build_pixel_map()
//!     .into_descriptor();
//!
//! assert_eq!(descriptor.color().to_array(), [116, 181, 101]);
//! # Ok(())
//! # }
//! ```
//!
//! Each stage method consumes `self` and returns the next pipeline state
//! (or `Result` for the one fallible stage), carrying everything computed
//! so far. Earlier values are moved, never shared, so no stage can
//! observe a later stage's changes.

use crate::diagnostics::StageMetrics;
use crate::hash::{Hasher, hash_input};
use crate::types::{
    CELL_COUNT, CELL_SIZE, Color, GridCell, HashBytes, ImageDescriptor, PipelineError, PixelRect,
};

// ───────────────────────── Stage 0: Pending ──────────────────────────

/// Pipeline state before any processing has occurred.
///
/// Call [`hash`](Self::hash) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing (call .hash() to continue)"]
pub struct Pending {
    source: Vec<u8>,
}

impl Pending {
    /// The raw input bytes.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Hash the input and advance to the [`Hashed`] stage.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::DigestLength`] if `hasher` does not
    /// produce exactly 16 bytes.
    pub fn hash<H: Hasher + ?Sized>(self, hasher: &H) -> Result<Hashed, PipelineError> {
        let hash = hash_input(hasher, &self.source)?;
        log::debug!("hashed {} input bytes", self.source.len());
        Ok(Hashed {
            source_len: self.source.len(),
            hash,
        })
    }
}

// ───────────────────────── Stage 1: Hashed ───────────────────────────

/// Pipeline state after hashing.
///
/// Call [`pick_color`](Self::pick_color) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing (call .pick_color() to continue)"]
pub struct Hashed {
    source_len: usize,
    hash: HashBytes,
}

impl Hashed {
    /// The 16-byte digest.
    #[must_use]
    pub const fn hash(&self) -> &HashBytes {
        &self.hash
    }

    /// Select the fill color.
    pub fn pick_color(self) -> Colored {
        let color = crate::color::pick_color(&self.hash);
        log::debug!(
            "picked color rgb({}, {}, {})",
            color.red,
            color.green,
            color.blue
        );
        Colored {
            hash: self.hash,
            color,
        }
    }
}

// ───────────────────────── Stage 2: Colored ──────────────────────────

/// Pipeline state after color selection.
///
/// Call [`build_grid`](Self::build_grid) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing (call .build_grid() to continue)"]
pub struct Colored {
    hash: HashBytes,
    color: Color,
}

impl Colored {
    /// The selected fill color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Expand the digest into the mirrored 25-cell grid.
    pub fn build_grid(self) -> GridBuilt {
        let grid = crate::grid::build_grid(&self.hash);
        log::debug!("built {} grid cells", grid.len());
        GridBuilt {
            hash: self.hash,
            color: self.color,
            grid,
        }
    }
}

// ───────────────────────── Stage 3: GridBuilt ────────────────────────

/// Pipeline state after grid construction.
///
/// Call [`filter_odd_squares`](Self::filter_odd_squares) to advance to
/// the next stage.
#[must_use = "pipeline stages are consumed by advancing (call .filter_odd_squares() to continue)"]
pub struct GridBuilt {
    hash: HashBytes,
    color: Color,
    grid: Vec<GridCell>,
}

impl GridBuilt {
    /// All 25 cells in row-major order.
    #[must_use]
    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    /// Drop odd-valued cells.
    pub fn filter_odd_squares(self) -> Filtered {
        let grid = crate::filter::filter_odd_squares(self.grid);
        log::debug!("kept {} of {CELL_COUNT} cells", grid.len());
        Filtered {
            hash: self.hash,
            color: self.color,
            grid,
        }
    }
}

// ───────────────────────── Stage 4: Filtered ─────────────────────────

/// Pipeline state after odd cells have been removed.
///
/// Call [`build_pixel_map`](Self::build_pixel_map) to advance to the
/// final stage.
#[must_use = "pipeline stages are consumed by advancing (call .build_pixel_map() to continue)"]
pub struct Filtered {
    hash: HashBytes,
    color: Color,
    grid: Vec<GridCell>,
}

impl Filtered {
    /// Retained cells in row-major order.
    #[must_use]
    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    /// Convert retained cells to canvas rectangles.
    pub fn build_pixel_map(self) -> Mapped {
        let pixel_map = crate::pixel_map::build_pixel_map(&self.grid);
        for (cell, rect) in self.grid.iter().zip(&pixel_map) {
            log::trace!("cell {} -> {rect:?}", cell.index);
        }
        Mapped {
            hash: self.hash,
            color: self.color,
            grid: self.grid,
            pixel_map,
        }
    }
}

// ───────────────────────── Stage 5: Mapped ───────────────────────────

/// Final pipeline state: every field of the descriptor is populated.
#[must_use = "call .into_descriptor() to obtain the result"]
pub struct Mapped {
    hash: HashBytes,
    color: Color,
    grid: Vec<GridCell>,
    pixel_map: Vec<PixelRect>,
}

impl Mapped {
    /// Rectangles to fill, one per retained cell.
    #[must_use]
    pub fn pixel_map(&self) -> &[PixelRect] {
        &self.pixel_map
    }

    /// Consume the pipeline and return the finished descriptor.
    pub fn into_descriptor(self) -> ImageDescriptor {
        ImageDescriptor::new(self.hash, self.color, self.grid, self.pixel_map)
    }
}

// ──────────────────────────── Stage trait ────────────────────────────

/// Total number of stages in the pipeline, including [`Pending`].
pub const STAGE_COUNT: usize = 6;

/// Trait implemented by every pipeline stage for uniform inspection.
pub trait PipelineStage {
    /// Human-readable name of this stage (e.g. `"hash"`, `"grid"`).
    const NAME: &str;

    /// Zero-based index of this stage (`0` for Pending through `5` for
    /// Mapped).
    const INDEX: usize;

    /// Counts describing the work done to reach this state.
    fn metrics(&self) -> StageMetrics;
}

impl PipelineStage for Pending {
    const NAME: &str = "source";
    const INDEX: usize = 0;

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Source {
            input_bytes: self.source.len(),
        }
    }
}

impl PipelineStage for Hashed {
    const NAME: &str = "hash";
    const INDEX: usize = 1;

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Hash {
            input_bytes: self.source_len,
            digest_hex: self.hash.to_hex(),
        }
    }
}

impl PipelineStage for Colored {
    const NAME: &str = "color";
    const INDEX: usize = 2;

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Color {
            rgb: self.color.to_array(),
        }
    }
}

impl PipelineStage for GridBuilt {
    const NAME: &str = "grid";
    const INDEX: usize = 3;

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Grid {
            cell_count: self.grid.len(),
        }
    }
}

impl PipelineStage for Filtered {
    const NAME: &str = "filter";
    const INDEX: usize = 4;

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Filter {
            kept: self.grid.len(),
            dropped: CELL_COUNT - self.grid.len(),
        }
    }
}

impl PipelineStage for Mapped {
    const NAME: &str = "pixel_map";
    const INDEX: usize = 5;

    fn metrics(&self) -> StageMetrics {
        let area = u64::from(CELL_SIZE) * u64::from(CELL_SIZE);
        StageMetrics::PixelMap {
            rect_count: self.pixel_map.len(),
            filled_pixels: self.pixel_map.len() as u64 * area,
        }
    }
}

// ─────────────────────────── Entry point ─────────────────────────────

/// Entry point for the stage-by-stage API.
pub struct Pipeline;

impl Pipeline {
    /// Create a new pipeline from the input bytes.
    ///
    /// No processing is performed; the bytes are simply stored. Call
    /// [`.hash()`](Pending::hash) to begin.
    #[allow(clippy::new_ret_no_self)]
    pub const fn new(input: Vec<u8>) -> Pending {
        Pending { source: input }
    }
}
