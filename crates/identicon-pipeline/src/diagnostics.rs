//! Pipeline diagnostics: timing and counts for each stage.
//!
//! Time is read through the injected [`Clock`] trait so this crate stays
//! free of platform clocks. The binary supplies an
//! [`std::time::Instant`]-backed implementation.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hash::Hasher;
use crate::pipeline::{Pipeline, PipelineStage};
use crate::types::{ImageDescriptor, PipelineError};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Source of monotonic time for stage measurements.
pub trait Clock {
    /// Opaque point in time.
    type Instant;

    /// The current instant.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Diagnostics collected from a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// Stage 1: hashing.
    pub hash: StageDiagnostics,
    /// Stage 2: color selection.
    pub color: StageDiagnostics,
    /// Stage 3: grid construction.
    pub grid: StageDiagnostics,
    /// Stage 4: odd-square filtering.
    pub filter: StageDiagnostics,
    /// Stage 5: pixel mapping.
    pub pixel_map: StageDiagnostics,
    /// Total wall-clock duration of the entire pipeline (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
}

/// Diagnostics for a single pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Stage name as reported by [`PipelineStage::NAME`].
    pub name: String,
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

impl StageDiagnostics {
    fn of<S: PipelineStage>(stage: &S, duration: Duration) -> Self {
        Self {
            name: S::NAME.to_owned(),
            duration,
            metrics: stage.metrics(),
        }
    }
}

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Input not yet processed.
    Source {
        /// Size of the input in bytes.
        input_bytes: usize,
    },
    /// Hashing metrics.
    Hash {
        /// Size of the input in bytes.
        input_bytes: usize,
        /// The digest as lowercase hex.
        digest_hex: String,
    },
    /// Color selection metrics.
    Color {
        /// The selected `[r, g, b]`.
        rgb: [u8; 3],
    },
    /// Grid construction metrics.
    Grid {
        /// Number of cells built (always 25).
        cell_count: usize,
    },
    /// Filter metrics.
    Filter {
        /// Even-valued cells retained.
        kept: usize,
        /// Odd-valued cells removed.
        dropped: usize,
    },
    /// Pixel mapping metrics.
    PixelMap {
        /// Number of rectangles produced.
        rect_count: usize,
        /// Total pixels covered by the rectangles.
        filled_pixels: u64,
    },
}

impl PipelineDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Pipeline Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());
        lines.push(format!("{:<12} {:>10}  {}", "Stage", "Duration", "Details"));
        lines.push("-".repeat(60));

        for stage in [
            &self.hash,
            &self.color,
            &self.grid,
            &self.filter,
            &self.pixel_map,
        ] {
            let ms = duration_ms(stage.duration);
            let details = format_metrics(&stage.metrics);
            lines.push(format!("{:<12} {ms:>8.3}ms  {details}", stage.name));
        }

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Source { input_bytes } => format!("{input_bytes} bytes"),
        StageMetrics::Hash {
            input_bytes,
            digest_hex,
        } => format!("{input_bytes} bytes -> {digest_hex}"),
        StageMetrics::Color { rgb: [r, g, b] } => format!("rgb({r}, {g}, {b})"),
        StageMetrics::Grid { cell_count } => format!("{cell_count} cells"),
        StageMetrics::Filter { kept, dropped } => format!("kept={kept} dropped={dropped}"),
        StageMetrics::PixelMap {
            rect_count,
            filled_pixels,
        } => format!("{rect_count} rects, {filled_pixels} px"),
    }
}

/// Run the full pipeline, timing every stage with `clock`.
///
/// # Errors
///
/// Returns [`PipelineError::DigestLength`] if `hasher` does not produce
/// exactly 16 bytes.
pub fn process_with_diagnostics<H, C>(
    input: &[u8],
    hasher: &H,
    clock: &C,
) -> Result<(ImageDescriptor, PipelineDiagnostics), PipelineError>
where
    H: Hasher + ?Sized,
    C: Clock,
{
    let pipeline_start = clock.now();

    let start = clock.now();
    let hashed = Pipeline::new(input.to_vec()).hash(hasher)?;
    let hash = StageDiagnostics::of(&hashed, clock.elapsed(&start));

    let start = clock.now();
    let colored = hashed.pick_color();
    let color = StageDiagnostics::of(&colored, clock.elapsed(&start));

    let start = clock.now();
    let built = colored.build_grid();
    let grid = StageDiagnostics::of(&built, clock.elapsed(&start));

    let start = clock.now();
    let filtered = built.filter_odd_squares();
    let filter = StageDiagnostics::of(&filtered, clock.elapsed(&start));

    let start = clock.now();
    let mapped = filtered.build_pixel_map();
    let pixel_map = StageDiagnostics::of(&mapped, clock.elapsed(&start));

    let diagnostics = PipelineDiagnostics {
        hash,
        color,
        grid,
        filter,
        pixel_map,
        total_duration: clock.elapsed(&pipeline_start),
    };
    Ok((mapped.into_descriptor(), diagnostics))
}
