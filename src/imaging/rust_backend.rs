//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format sniffing | `image::ImageReader::with_guessed_format` (magic bytes) |
//! | Decode (GIF, JPEG, PNG) | `image` crate decoders |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode | `GifEncoder` / `JpegEncoder` / `PngEncoder`, default options |

use super::backend::{BackendError, ImageBackend, ThumbnailParams};
use super::calculations::fit_within;
use super::format::SourceFormat;
use crate::types::Dimensions;
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path`, sniff its format from content and decode it.
///
/// Known-but-unsupported signatures are rejected before decoding, so a BMP
/// reports `UnsupportedFormat("bmp")` rather than a decoder error.
fn load_image(path: &Path) -> Result<(DynamicImage, SourceFormat), BackendError> {
    // `ImageReader::open` would seed the format from the extension.
    let file = File::open(path).map_err(|e| BackendError::io(path, e))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| BackendError::io(path, e))?;

    let Some(detected) = reader.format() else {
        return Err(BackendError::Decode {
            path: path.to_path_buf(),
            source: unknown_format(),
        });
    };
    let format = SourceFormat::from_detected(detected)?;

    let image = reader.decode().map_err(|source| BackendError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((image, format))
}

fn unknown_format() -> ImageError {
    ImageError::Unsupported(UnsupportedError::from_format_and_kind(
        ImageFormatHint::Unknown,
        UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
    ))
}

/// Shrink to fit `bounds`, or hand the image back untouched if it already fits.
fn shrink_to_fit(image: DynamicImage, bounds: Dimensions) -> DynamicImage {
    let source = Dimensions::new(image.width(), image.height());
    let target = fit_within(source, bounds);
    if target == source {
        return image;
    }
    image.resize_exact(target.width, target.height, FilterType::Lanczos3)
}

/// Create (or truncate) `path` and encode `image` into it.
fn save_image(image: &DynamicImage, path: &Path, format: SourceFormat) -> Result<(), BackendError> {
    let file = File::create(path).map_err(|e| BackendError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    format
        .encode(image, &mut writer)
        .map_err(|source| BackendError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    // Dropping the BufWriter would swallow write errors.
    writer.flush().map_err(|e| BackendError::Encode {
        path: path.to_path_buf(),
        source: ImageError::IoError(e),
    })
}

impl ImageBackend for RustBackend {
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError> {
        let (image, format) = load_image(&params.source)?;
        debug!(
            source = %params.source.display(),
            format = format.name(),
            width = image.width(),
            height = image.height(),
            "decoded"
        );

        let resized = shrink_to_fit(image, params.bounds);
        let written = Dimensions::new(resized.width(), resized.height());
        save_image(&resized, &params.output, format)?;

        debug!(output = %params.output.display(), size = %written, "encoded");
        Ok(written)
    }
}
