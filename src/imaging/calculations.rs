//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::Dimensions;

/// Calculate the largest size that fits inside `bounds` while keeping the
/// source aspect ratio. Never enlarges.
///
/// Sides are scaled with integer truncation, width first, then height:
///
/// ```text
/// 3000x2000 in 320x240 → 320x213
/// 2000x3000 in 320x240 → 160x240
///  100x80   in 320x240 → 100x80   (already fits)
/// ```
///
/// A side is never reported smaller than 1, so a zero bound still produces
/// an encodable raster.
pub fn fit_within(source: Dimensions, bounds: Dimensions) -> Dimensions {
    if source.fits_within(bounds) || source.is_degenerate() {
        return source;
    }

    let (mut w, mut h) = (source.width as u64, source.height as u64);
    let (max_w, max_h) = (bounds.width as u64, bounds.height as u64);

    if w > max_w {
        h = (h * max_w / w).max(1);
        w = max_w;
    }
    if h > max_h {
        w = (w * max_h / h).max(1);
        h = max_h;
    }

    Dimensions::new(w.max(1) as u32, h.max(1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(src: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
        let d = fit_within(src.into(), bounds.into());
        (d.width, d.height)
    }

    #[test]
    fn landscape_photo_into_small_preset() {
        // 3:2 → width-limited, 2000 * 320 / 3000 = 213.33
        assert_eq!(fit((3000, 2000), (320, 240)), (320, 213));
    }

    #[test]
    fn portrait_photo_is_height_limited() {
        // width step leaves 320x480, height step scales to 160x240
        assert_eq!(fit((2000, 3000), (320, 240)), (160, 240));
    }

    #[test]
    fn same_aspect_fills_box_exactly() {
        assert_eq!(fit((1600, 1200), (640, 480)), (640, 480));
    }

    #[test]
    fn smaller_source_is_not_enlarged() {
        assert_eq!(fit((100, 80), (320, 240)), (100, 80));
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(fit((320, 240), (320, 240)), (320, 240));
    }

    #[test]
    fn only_one_side_too_large() {
        // fits horizontally, too tall: 300 * 240 / 1000 = 72
        assert_eq!(fit((300, 1000), (320, 240)), (72, 240));
    }

    #[test]
    fn extreme_panorama_keeps_at_least_one_pixel() {
        assert_eq!(fit((10000, 10), (100, 100)), (100, 1));
    }

    #[test]
    fn zero_bounds_clamp_to_one_pixel() {
        assert_eq!(fit((640, 480), (0, 0)), (1, 1));
        assert_eq!(fit((640, 480), (0, 480)), (1, 1));
    }

    #[test]
    fn large_values_do_not_overflow() {
        assert_eq!(fit((u32::MAX, u32::MAX), (800, 600)), (600, 600));
    }

    #[test]
    fn output_always_fits_and_keeps_ratio() {
        let sources = [(3000, 2000), (1024, 768), (4000, 3000), (5000, 1200), (999, 1001)];
        let bounds = [(320, 240), (640, 480), (800, 600), (123, 456)];
        for &src in &sources {
            for &b in &bounds {
                let (w, h) = fit(src, b);
                assert!(w <= b.0 && h <= b.1, "{src:?} in {b:?} gave {w}x{h}");
                // ratio check: h ≈ w * src_h / src_w within one pixel
                let expected_h = w as f64 * src.1 as f64 / src.0 as f64;
                assert!(
                    (h as f64 - expected_h).abs() <= 1.0,
                    "{src:?} in {b:?} gave {w}x{h}, expected height ≈ {expected_h}"
                );
            }
        }
    }
}
