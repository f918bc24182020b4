//! identicon-export: Pure raster serializers (sans-IO)
//!
//! Draws an [`ImageDescriptor`](identicon_pipeline::ImageDescriptor)
//! onto a 250x250 canvas and encodes it as PNG bytes. Writing the bytes
//! anywhere is the caller's job.

pub mod png;
pub mod raster;

pub use png::{encode_png, to_png, to_png_with};
pub use raster::{ImageprocRasterizer, Rasterizer, render, render_with};

/// Errors that can occur while rasterizing or encoding.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    /// A rectangle extends past the canvas.
    #[error("rectangle {rect:?} does not fit a {width}x{height} canvas")]
    OutOfBounds {
        /// The offending rectangle.
        rect: identicon_pipeline::PixelRect,
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
}
