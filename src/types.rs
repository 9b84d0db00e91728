//! Shared types used by the size resolver, the imaging backend and the run driver.

use std::fmt;

/// A width/height pair in pixels.
///
/// Used both for the target bounding box and for the actual size of a
/// decoded or written raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero. Such bounds are accepted but almost
    /// certainly a typo on the command line.
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `self` is no larger than `bounds` on both axes.
    pub fn fits_within(self, bounds: Dimensions) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
