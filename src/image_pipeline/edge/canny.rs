use tracing::debug;

use crate::image_pipeline::color::GrayImage;
use crate::image_pipeline::edge::gradient::{gaussian_blur, sobel_gradients};
use crate::image_pipeline::edge::hysteresis::hysteresis;
use crate::image_pipeline::edge::suppression::non_max_suppression;
use crate::image_pipeline::edge::types::{EdgeMask, EdgeThresholds};

/// Runs the full detector and returns a mask the size of `image`.
///
/// Deterministic for a given image and threshold pair. Border pixels are
/// never edges.
pub fn detect_edges(image: &GrayImage, thresholds: EdgeThresholds) -> EdgeMask {
    debug!(
        "Detecting edges in {}x{} image, thresholds {}..{}",
        image.width(),
        image.height(),
        thresholds.low(),
        thresholds.high()
    );

    let smoothed = gaussian_blur(image);
    let gradients = sobel_gradients(&smoothed);
    let candidates = non_max_suppression(&gradients);
    let mask = hysteresis(&candidates, thresholds);

    debug!("Found {} edge pixels", mask.edge_count());
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> GrayImage {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        GrayImage::from_raw(width, height, data).unwrap()
    }

    fn edge_pixels(mask: &EdgeMask) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                if mask.is_edge(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        for value in [0u8, 128, 255] {
            let mask = detect_edges(&gray(16, 12, |_, _| value), EdgeThresholds::default());
            assert_eq!(mask.edge_count(), 0);
        }
    }

    #[test]
    fn test_vertical_step_yields_single_column() {
        let img = gray(10, 8, |x, _| if x < 5 { 0 } else { 255 });
        let mask = detect_edges(&img, EdgeThresholds::default());

        let expected: Vec<_> = (1..7).map(|y| (4, y)).collect();
        assert_eq!(edge_pixels(&mask), expected);
    }

    #[test]
    fn test_horizontal_step_yields_single_row() {
        let img = gray(8, 10, |_, y| if y < 4 { 255 } else { 0 });
        let mask = detect_edges(&img, EdgeThresholds::default());

        let expected: Vec<_> = (1..7).map(|x| (x, 3)).collect();
        assert_eq!(edge_pixels(&mask), expected);
    }

    #[test]
    fn test_faint_step_below_low_threshold() {
        // 10 gray levels -> L1 magnitude ~30
        let img = gray(10, 8, |x, _| if x < 5 { 100 } else { 110 });
        assert_eq!(detect_edges(&img, EdgeThresholds::default()).edge_count(), 0);
        assert!(detect_edges(&img, EdgeThresholds::new(10, 20)).edge_count() > 0);
    }

    #[test]
    fn test_border_never_marked() {
        let img = gray(12, 12, |x, y| ((x * 37 + y * 91) % 256) as u8);
        let mask = detect_edges(&img, EdgeThresholds::new(1, 2));
        for i in 0..12 {
            assert!(!mask.is_edge(i, 0));
            assert!(!mask.is_edge(i, 11));
            assert!(!mask.is_edge(0, i));
            assert!(!mask.is_edge(11, i));
        }
        assert!(mask.as_bytes().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_deterministic() {
        let img = gray(32, 24, |x, y| ((x * x + 3 * y * y) % 251) as u8);
        let t = EdgeThresholds::default();
        assert_eq!(detect_edges(&img, t), detect_edges(&img, t));
    }

    #[test]
    fn test_tiny_images() {
        for (w, h) in [(1, 1), (2, 2), (2, 4), (4, 2)] {
            let img = gray(w, h, |x, y| if (x + y) % 2 == 0 { 0 } else { 255 });
            let mask = detect_edges(&img, EdgeThresholds::default());
            assert_eq!((mask.width(), mask.height()), (w, h));
            assert_eq!(mask.edge_count(), 0);
        }
    }
}
