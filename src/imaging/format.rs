//! Source format detection and per-format encoding.
//!
//! The format is sniffed from the file's content signature, never from its
//! extension, and the output is always written in that same format.

use super::backend::BackendError;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat, ImageResult};
use std::io::Write;

/// Formats we can both read and write back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Gif,
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Map a sniffed format onto the supported set.
    ///
    /// Anything outside GIF/JPEG/PNG is `UnsupportedFormat`, named the way
    /// the format is usually written as a file extension (`bmp`, `webp`, ...).
    pub fn from_detected(format: ImageFormat) -> Result<Self, BackendError> {
        match format {
            ImageFormat::Gif => Ok(Self::Gif),
            ImageFormat::Jpeg => Ok(Self::Jpeg),
            ImageFormat::Png => Ok(Self::Png),
            other => Err(BackendError::UnsupportedFormat(format_name(other))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    /// Encode `image` into `writer` with this format's default options.
    pub fn encode<W: Write>(self, image: &DynamicImage, writer: W) -> ImageResult<()> {
        match self {
            Self::Gif => encode_gif(image, writer),
            Self::Jpeg => {
                let converted = to_jpeg_color(image);
                converted
                    .as_ref()
                    .unwrap_or(image)
                    .write_with_encoder(JpegEncoder::new(writer))
            }
            Self::Png => image.write_with_encoder(PngEncoder::new(writer)),
        }
    }
}

fn format_name(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| ext.to_string())
        .unwrap_or_else(|| format!("{format:?}").to_lowercase())
}

// The JPEG encoder only takes L8 and Rgb8.
fn to_jpeg_color(image: &DynamicImage) -> Option<DynamicImage> {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => None,
        other if other.color().has_color() => Some(DynamicImage::ImageRgb8(other.to_rgb8())),
        other => Some(DynamicImage::ImageLuma8(other.to_luma8())),
    }
}

// GifEncoder doesn't implement ImageEncoder, so the frame goes through
// `encode` with an explicit RGBA8 buffer. The trailer is written on drop.
fn encode_gif<W: Write>(image: &DynamicImage, writer: W) -> ImageResult<()> {
    let rgba = image.to_rgba8();
    let mut encoder = GifEncoder::new(writer);
    encoder.encode(rgba.as_raw(), rgba.width(), rgba.height(), ExtendedColorType::Rgba8)
}
