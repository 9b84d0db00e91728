//! Image processing — pure Rust, no external tools.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Sniff format** | `image::ImageReader::with_guessed_format` |
//! | **Thumbnail** | fit-within math + `resize_exact` with Lanczos3 |
//! | **Encode** | same format as the source (GIF, JPEG, PNG) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Format**: the closed set of supported formats and their encoders
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining path planning + backend

pub mod backend;
mod calculations;
pub mod format;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, ThumbnailParams};
pub use calculations::fit_within;
pub use format::SourceFormat;
pub use operations::{plan_thumbnail, resize_into};
pub use rust_backend::RustBackend;
