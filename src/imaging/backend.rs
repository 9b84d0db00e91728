//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between "which file goes where"
//! ([`operations`](super::operations)) and the actual pixel work. The
//! production implementation is [`RustBackend`](super::rust_backend::RustBackend).

use crate::types::Dimensions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format: '{0}'")]
    UnsupportedFormat(String),
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("no file name in path: {}", .0.display())]
    MissingFileName(PathBuf),
}

impl BackendError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parameters for a bounded thumbnail: read `source`, shrink it to fit
/// `bounds`, write it to `output` in the source's own format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub bounds: Dimensions,
}

pub trait ImageBackend {
    /// Execute a thumbnail operation. Returns the dimensions actually written.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError>;
}
