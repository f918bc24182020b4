//! PNG encoding.
//!
//! Produces an in-memory byte buffer. This is a pure function with no
//! I/O.

use identicon_pipeline::ImageDescriptor;
use image::{ImageEncoder, RgbaImage};

use crate::ExportError;
use crate::raster::{ImageprocRasterizer, Rasterizer, render_with};

/// File extension for the encoded output.
pub const EXTENSION: &str = "png";

/// Encode an RGBA canvas as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::PngEncode`] if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Render a descriptor and encode it as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError`] if rendering or encoding fails.
pub fn to_png(descriptor: &ImageDescriptor) -> Result<Vec<u8>, ExportError> {
    to_png_with(descriptor, &ImageprocRasterizer::default())
}

/// Render a descriptor with `rasterizer` and encode it as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError`] if rendering or encoding fails.
pub fn to_png_with<R>(descriptor: &ImageDescriptor, rasterizer: &R) -> Result<Vec<u8>, ExportError>
where
    R: Rasterizer<Output = RgbaImage> + ?Sized,
{
    let canvas = render_with(descriptor, rasterizer)?;
    let bytes = encode_png(&canvas)?;
    log::debug!("encoded {} PNG bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn output_starts_with_png_signature() {
        let bytes = encode_png(&RgbaImage::new(4, 4)).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn encoded_image_decodes_to_same_pixels() {
        let img = RgbaImage::from_fn(3, 2, |x, y| {
            image::Rgba([u8::try_from(x * 40).unwrap(), u8::try_from(y * 90).unwrap(), 7, 255])
        });
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), img.dimensions());
        assert_eq!(decoded.as_raw(), img.as_raw());
    }

    /// Paints the whole canvas in the fill color.
    struct Swatch;

    impl Rasterizer for Swatch {
        type Output = RgbaImage;

        fn rasterize(
            &self,
            color: identicon_pipeline::Color,
            _rects: &[identicon_pipeline::PixelRect],
        ) -> Result<RgbaImage, ExportError> {
            Ok(RgbaImage::from_pixel(
                2,
                2,
                image::Rgba([color.red, color.green, color.blue, 255]),
            ))
        }
    }

    #[test]
    fn to_png_with_uses_injected_rasterizer() {
        let descriptor = identicon_pipeline::process(b"elixir").unwrap();
        let bytes = to_png_with(&descriptor, &Swatch).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert!(decoded.pixels().all(|p| *p == image::Rgba([116, 181, 101, 255])));
    }

    #[test]
    fn to_png_is_deterministic() {
        let descriptor = identicon_pipeline::process(b"stable").unwrap();
        assert_eq!(to_png(&descriptor).unwrap(), to_png(&descriptor).unwrap());
    }
}
