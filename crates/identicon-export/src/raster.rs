//! Rasterization: fill the pixel map on a square canvas.
//!
//! The [`Rasterizer`] trait is the seam between the pure pipeline and a
//! concrete drawing backend. [`ImageprocRasterizer`] draws into an
//! [`RgbaImage`] with `imageproc`. The canvas starts opaque white and
//! every rectangle is filled with the single descriptor color.

use identicon_pipeline::{CANVAS_SIZE, Color, ImageDescriptor, PixelRect};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::ExportError;

/// Opaque white, used for unfilled cells.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Trait for drawing backends.
///
/// Input: one fill color and a list of axis-aligned rectangles.
/// Output: whatever raster representation the backend produces.
pub trait Rasterizer {
    /// The rendered raster.
    type Output;

    /// Fill every rectangle in `rects` with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::OutOfBounds`] if a rectangle does not fit
    /// the canvas.
    fn rasterize(&self, color: Color, rects: &[PixelRect]) -> Result<Self::Output, ExportError>;
}

/// Draws onto an [`RgbaImage`] via `imageproc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageprocRasterizer {
    /// Canvas side length in pixels.
    pub size: u32,
}

impl Default for ImageprocRasterizer {
    fn default() -> Self {
        Self { size: CANVAS_SIZE }
    }
}

impl Rasterizer for ImageprocRasterizer {
    type Output = RgbaImage;

    fn rasterize(&self, color: Color, rects: &[PixelRect]) -> Result<RgbaImage, ExportError> {
        let mut canvas = RgbaImage::from_pixel(self.size, self.size, BACKGROUND);
        let fill = Rgba([color.red, color.green, color.blue, 255]);

        for rect in rects {
            if !rect.fits_within(self.size, self.size) {
                return Err(ExportError::OutOfBounds {
                    rect: *rect,
                    width: self.size,
                    height: self.size,
                });
            }
            // imageproc rejects zero-sized rectangles.
            if rect.width() == 0 || rect.height() == 0 {
                continue;
            }
            draw_filled_rect_mut(&mut canvas, to_imageproc_rect(rect), fill);
        }

        log::debug!("rasterized {} rectangles", rects.len());
        Ok(canvas)
    }
}

/// Convert a bounds-checked rectangle to `imageproc`'s representation.
#[allow(clippy::cast_possible_wrap)]
fn to_imageproc_rect(rect: &PixelRect) -> Rect {
    Rect::at(rect.top_left.x as i32, rect.top_left.y as i32).of_size(rect.width(), rect.height())
}

/// Render a descriptor with the default 250x250 [`ImageprocRasterizer`].
///
/// # Errors
///
/// Returns [`ExportError::OutOfBounds`] if the descriptor holds a
/// rectangle outside the canvas (never the case for pipeline output).
pub fn render(descriptor: &ImageDescriptor) -> Result<RgbaImage, ExportError> {
    render_with(descriptor, &ImageprocRasterizer::default())
}

/// Render a descriptor with an injected [`Rasterizer`].
///
/// # Errors
///
/// Propagates whatever `rasterizer` reports.
pub fn render_with<R: Rasterizer + ?Sized>(
    descriptor: &ImageDescriptor,
    rasterizer: &R,
) -> Result<R::Output, ExportError> {
    rasterizer.rasterize(descriptor.color(), descriptor.pixel_map())
}
