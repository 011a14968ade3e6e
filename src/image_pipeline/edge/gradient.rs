use crate::image_pipeline::color::GrayImage;
use crate::image_pipeline::edge::types::{Direction, GradientField};

/// tan(22.5°) in Q15
const TAN_22_5_Q15: i64 = 13573;

/// Smooths with the 3x3 binomial kernel `[1 2 1]ᵀ[1 2 1] / 16`.
///
/// Edge pixels are replicated outward, so the output has the input's size.
pub fn gaussian_blur(image: &GrayImage) -> GrayImage {
    let width = image.width();
    let height = image.height();
    if width == 0 || height == 0 {
        return image.clone();
    }

    // Horizontal pass, max 4 * 255
    let mut horizontal = vec![0u16; width * height];
    for y in 0..height {
        let row = image.row(y);
        for x in 0..width {
            let left = row[x.saturating_sub(1)] as u16;
            let right = row[(x + 1).min(width - 1)] as u16;
            horizontal[y * width + x] = left + 2 * row[x] as u16 + right;
        }
    }

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        let above = y.saturating_sub(1) * width;
        let here = y * width;
        let below = (y + 1).min(height - 1) * width;
        for x in 0..width {
            let sum = horizontal[above + x] + 2 * horizontal[here + x] + horizontal[below + x];
            data[here + x] = ((sum + 8) >> 4) as u8;
        }
    }

    GrayImage::new(width, height, data)
}

/// Quantizes a gradient vector to the nearest neighbor axis.
pub(crate) fn quantize_direction(gx: i32, gy: i32) -> Direction {
    let ax = (gx as i64).abs();
    let ay = (gy as i64).abs() << 15;

    let tan22 = ax * TAN_22_5_Q15;
    if ay < tan22 {
        return Direction::Deg0;
    }
    // tan(67.5°) = tan(22.5°) + 2
    let tan67 = tan22 + (ax << 16);
    if ay > tan67 {
        return Direction::Deg90;
    }
    if (gx ^ gy) < 0 {
        Direction::Deg135
    } else {
        Direction::Deg45
    }
}

/// 3x3 Sobel response at every interior pixel.
///
/// The outermost rows and columns are left at zero magnitude; a kernel
/// centered there would read outside the image.
pub fn sobel_gradients(image: &GrayImage) -> GradientField {
    let width = image.width();
    let height = image.height();
    let mut field = GradientField::zeroed(width, height);
    if width < 3 || height < 3 {
        return field;
    }

    let px = |x: usize, y: usize| image.get(x, y) as i32;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = (px(x + 1, y - 1) + 2 * px(x + 1, y) + px(x + 1, y + 1))
                - (px(x - 1, y - 1) + 2 * px(x - 1, y) + px(x - 1, y + 1));
            let gy = (px(x - 1, y + 1) + 2 * px(x, y + 1) + px(x + 1, y + 1))
                - (px(x - 1, y - 1) + 2 * px(x, y - 1) + px(x + 1, y - 1));

            let i = y * width + x;
            field.magnitude[i] = gx.unsigned_abs() + gy.unsigned_abs();
            field.direction[i] = quantize_direction(gx, gy);
        }
    }

    field
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

    #[test]
    fn test_blur_keeps_flat_image() {
        let img = gray(5, 4, |_, _| 173);
        assert_eq!(gaussian_blur(&img), img);
    }

    #[test]
    fn test_blur_softens_step() {
        let img = gray(6, 3, |x, _| if x < 3 { 0 } else { 255 });
        let blurred = gaussian_blur(&img);
        for y in 0..3 {
            assert_eq!(blurred.row(y), &[0, 0, 64, 191, 255, 255]);
        }
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let img = gray(3, 3, |x, y| if (x, y) == (1, 1) { 160 } else { 0 });
        let blurred = gaussian_blur(&img);
        assert_eq!(blurred.as_bytes(), &[10, 20, 10, 20, 40, 20, 10, 20, 10]);
    }

    #[test]
    fn test_blur_single_pixel() {
        let img = gray(1, 1, |_, _| 9);
        assert_eq!(gaussian_blur(&img).as_bytes(), &[9]);
    }

    #[test]
    fn test_quantize_direction() {
        assert_eq!(quantize_direction(10, 0), Direction::Deg0);
        assert_eq!(quantize_direction(-10, 3), Direction::Deg0);
        assert_eq!(quantize_direction(0, 10), Direction::Deg90);
        assert_eq!(quantize_direction(2, -10), Direction::Deg90);
        assert_eq!(quantize_direction(10, 10), Direction::Deg45);
        assert_eq!(quantize_direction(-7, -8), Direction::Deg45);
        assert_eq!(quantize_direction(10, -10), Direction::Deg135);
        assert_eq!(quantize_direction(-9, 8), Direction::Deg135);
    }

    #[test]
    fn test_sobel_vertical_step() {
        let img = gray(5, 3, |x, _| if x < 2 { 0 } else { 100 });
        let field = sobel_gradients(&img);

        assert_eq!(field.magnitude_at(1, 1), 400);
        assert_eq!(field.magnitude_at(2, 1), 400);
        assert_eq!(field.magnitude_at(3, 1), 0);
        assert_eq!(field.direction[1 * 5 + 1], Direction::Deg0);
        // border
        for x in 0..5 {
            assert_eq!(field.magnitude_at(x, 0), 0);
            assert_eq!(field.magnitude_at(x, 2), 0);
        }
        assert_eq!(field.magnitude_at(0, 1), 0);
        assert_eq!(field.magnitude_at(4, 1), 0);
    }

    #[test]
    fn test_sobel_horizontal_step() {
        let img = gray(3, 4, |_, y| if y < 2 { 50 } else { 0 });
        let field = sobel_gradients(&img);
        assert_eq!(field.magnitude_at(1, 1), 200);
        assert_eq!(field.direction[1 * 3 + 1], Direction::Deg90);
    }

    #[test]
    fn test_sobel_small_images_have_no_interior() {
        let img = gray(2, 2, |x, y| (x * 200 + y * 50) as u8);
        let field = sobel_gradients(&img);
        assert!(field.magnitude.iter().all(|&m| m == 0));
    }
}
