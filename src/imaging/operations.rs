//! High-level image operations.
//!
//! These functions decide where output goes and hand the pixel work to a
//! backend.

use super::backend::{BackendError, ImageBackend, ThumbnailParams};
use crate::types::Dimensions;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan a resize without executing it.
///
/// The output lands directly in `dest_dir` under the source's file name;
/// any directory structure in `source` is dropped.
pub fn plan_thumbnail(source: &Path, dest_dir: &Path, bounds: Dimensions) -> Result<ThumbnailParams> {
    let file_name = source
        .file_name()
        .ok_or_else(|| BackendError::MissingFileName(source.to_path_buf()))?;

    Ok(ThumbnailParams {
        source: source.to_path_buf(),
        output: dest_dir.join(file_name),
        bounds,
    })
}

/// Shrink `source` to fit `bounds` and write it into `dest_dir`.
///
/// Returns the path that was written.
pub fn resize_into(
    backend: &impl ImageBackend,
    source: &Path,
    dest_dir: &Path,
    bounds: Dimensions,
) -> Result<PathBuf> {
    let params = plan_thumbnail(source, dest_dir, bounds)?;
    backend.thumbnail(&params)?;
    Ok(params.output)
}
