//! The batch run: prepare the destination, then resize every input in order.
//!
//! Processing is strictly sequential and fail-fast. The first error stops the
//! run; outputs written before it stay on disk and later inputs are never
//! opened.
//!
//! ```text
//! resimg -s small a/photo.jpg b/cat.gif
//!
//! /tmp/small/
//! ├── photo.jpg    # ≤ 320x240, JPEG
//! └── cat.gif      # ≤ 320x240, GIF
//! ```

use crate::config::RunConfig;
use crate::imaging::{BackendError, ImageBackend, RustBackend, resize_into};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("cannot create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

/// What [`prepare_destination`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Outputs of a successful run, in input order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub converted: Vec<PathBuf>,
}

/// Make sure `dir` exists. An existing directory only earns a warning.
pub fn prepare_destination(dir: &Path) -> Result<DirStatus, ProcessError> {
    info!("creating directory '{}'", dir.display());

    if dir.is_dir() {
        warn!("directory '{}' already exists", dir.display());
        return Ok(DirStatus::Existing);
    }

    std::fs::create_dir_all(dir).map_err(|source| ProcessError::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(DirStatus::Created)
}

pub fn run(config: &RunConfig, files: &[PathBuf]) -> Result<RunSummary, ProcessError> {
    run_with_backend(&RustBackend::new(), config, files)
}

/// Run using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    config: &RunConfig,
    files: &[PathBuf],
) -> Result<RunSummary, ProcessError> {
    if config.bounds.is_degenerate() {
        warn!("size {} has a zero side; output will be 1 pixel wide or tall", config.bounds);
    }

    prepare_destination(&config.dest_dir)?;

    let mut summary = RunSummary::default();
    for file in files {
        info!("converting '{}'", file.display());
        let written = resize_into(backend, file, &config.dest_dir, config.bounds)?;
        summary.converted.push(written);
    }
    Ok(summary)
}
