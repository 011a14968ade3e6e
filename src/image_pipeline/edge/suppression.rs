use crate::image_pipeline::edge::types::{Direction, EdgeCandidates, GradientField};

/// Thins gradient ridges to single-pixel width.
///
/// A pixel keeps its magnitude only if it is a local maximum along its
/// quantized direction. On the horizontal and vertical axes the pixel must
/// beat the previous neighbor and at least tie the next one, so a two-pixel
/// plateau keeps exactly one pixel.
pub fn non_max_suppression(field: &GradientField) -> EdgeCandidates {
    let width = field.width;
    let height = field.height;
    let mut magnitude = vec![0u32; width * height];

    if width >= 3 && height >= 3 {
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let i = y * width + x;
                let m = field.magnitude[i];
                if m == 0 {
                    continue;
                }

                let dir = field.direction[i];
                let [(px, py), (nx, ny)] = dir.neighbors();
                let prev = field.magnitude_at(x.wrapping_add_signed(px), y.wrapping_add_signed(py));
                let next = field.magnitude_at(x.wrapping_add_signed(nx), y.wrapping_add_signed(ny));

                let is_max = match dir {
                    Direction::Deg0 | Direction::Deg90 => m > prev && m >= next,
                    Direction::Deg45 | Direction::Deg135 => m > prev && m > next,
                };
                if is_max {
                    magnitude[i] = m;
                }
            }
        }
    }

    EdgeCandidates {
        width,
        height,
        magnitude,
    }
}
