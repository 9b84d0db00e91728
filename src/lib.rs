//! # resimg
//!
//! Shrinks a batch of photos so they are small enough to mail. Every input is
//! scaled down to fit a bounding box, keeping its aspect ratio, and written
//! under the same file name into a destination directory in the same format
//! it came in (GIF, JPEG or PNG, detected from the file's content).
//!
//! ```text
//! resimg [-d DIR] [-s SIZE] [-v] FILE...
//!
//! -s small   → fit into 320x240
//! -s m       → fit into 640x480 (prefix of "medium", the default)
//! -s 300x200 → fit into 300x200
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`size`] | Size token → [`types::Dimensions`] (presets, prefixes, `WxH`) |
//! | [`imaging`] | Format sniffing, fit-within math, Lanczos3 resize, same-format encode |
//! | [`process`] | Destination directory setup and the fail-fast loop over inputs |
//! | [`config`] | Defaults, optional TOML file and CLI overrides → immutable [`config::RunConfig`] |
//! | [`logger`] | `tracing` subscriber setup |
//! | [`types`] | Shared [`types::Dimensions`] |
//!
//! # Design Decisions
//!
//! ## Never Enlarge
//!
//! Images already inside the box are re-encoded at their own size. Blowing a
//! 200px icon up to 640px only makes the attachment bigger, which defeats the
//! point of the tool.
//!
//! ## Content Decides the Format
//!
//! The output format is whatever the source's magic bytes say, not what its
//! extension claims. A PNG named `photo.jpg` comes back out as a PNG named
//! `photo.jpg`.
//!
//! ## Fail Fast
//!
//! The first bad file stops the run. Outputs written before it are kept;
//! nothing is rolled back and nothing after it is attempted.

pub mod config;
pub mod imaging;
pub mod logger;
pub mod process;
pub mod size;
pub mod types;
