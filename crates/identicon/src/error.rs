//! Errors surfaced by the binary.

use std::path::PathBuf;

use identicon_export::ExportError;
use identicon_pipeline::PipelineError;

/// Errors that terminate a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `--output` names one file but several inputs were given.
    #[error("--output can only be used with a single input (got {0})")]
    OutputWithMultipleInputs(usize),

    /// Writing the image file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The pipeline rejected the digest.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Rendering or PNG encoding failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The `--json` report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
