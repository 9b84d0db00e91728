//! Size specification parsing.
//!
//! The `--size` flag accepts either a named preset or a literal `WxH` pair:
//!
//! ```text
//! small   → 320x240
//! medium  → 640x480
//! large   → 800x600
//! 300x200 → 300x200
//! ```
//!
//! Preset names may be abbreviated to any non-empty prefix (`m`, `med`).
//! Presets are checked in the order listed above and the first one whose name
//! starts with the token wins, so abbreviation is deterministic.

use crate::types::Dimensions;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("invalid size spec: {0:?}")]
    InvalidSizeSpec(String),
}

/// Named presets, in matching order.
pub const PRESETS: &[(&str, Dimensions)] = &[
    ("small", Dimensions::new(320, 240)),
    ("medium", Dimensions::new(640, 480)),
    ("large", Dimensions::new(800, 600)),
];

/// Resolve a size token into concrete dimensions.
///
/// Zero is not rejected: `"0x0"` resolves to `0x0`.
///
/// ```
/// use resimg::size::resolve;
/// use resimg::types::Dimensions;
///
/// assert_eq!(resolve("med").unwrap(), Dimensions::new(640, 480));
/// assert_eq!(resolve("300x200").unwrap(), Dimensions::new(300, 200));
/// assert!(resolve("300x").is_err());
/// ```
pub fn resolve(token: &str) -> Result<Dimensions, SizeError> {
    if let Some(dims) = lookup_preset(token) {
        return Ok(dims);
    }
    parse_literal(token).ok_or_else(|| SizeError::InvalidSizeSpec(token.to_string()))
}

fn lookup_preset(token: &str) -> Option<Dimensions> {
    if token.is_empty() {
        return None;
    }
    PRESETS
        .iter()
        .find(|(name, _)| name.starts_with(token))
        .map(|&(_, dims)| dims)
}

fn parse_literal(token: &str) -> Option<Dimensions> {
    let mut parts = token.split('x');
    let width = parse_side(parts.next()?)?;
    let height = parse_side(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Dimensions::new(width, height))
}

// `u32::from_str` accepts a leading '+', the flag syntax does not.
fn parse_side(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Dimensions {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}
