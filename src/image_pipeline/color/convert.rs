use tracing::debug;

use crate::image_pipeline::color::types::{GrayImage, RgbaImage};
use crate::image_pipeline::yuv::PlanarYuvFrame;

// ITU-R BT.601, full range, coefficients in thousandths
const CR_TO_R: i32 = 1402;
const CB_TO_G: i32 = 344;
const CR_TO_G: i32 = 714;
const CB_TO_B: i32 = 1772;

const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

const SCALE: i32 = 1000;

/// Divides a value in thousandths by 1000, rounding halves away from zero,
/// and clamps to the 8-bit range.
#[inline]
fn to_u8(thousandths: i32) -> u8 {
    let half = if thousandths < 0 { -SCALE / 2 } else { SCALE / 2 };
    ((thousandths + half) / SCALE).clamp(0, 255) as u8
}

/// Converts one full-range YUV sample to RGBA with opaque alpha.
#[inline]
pub(crate) fn yuv_pixel_to_rgba(y: u8, u: u8, v: u8) -> [u8; 4] {
    let y = y as i32 * SCALE;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    [
        to_u8(y + CR_TO_R * v),
        to_u8(y - CB_TO_G * u - CR_TO_G * v),
        to_u8(y + CB_TO_B * u),
        u8::MAX,
    ]
}

/// BT.601 luma of one pixel, rounded half up.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((weighted + SCALE as u32 / 2) / SCALE as u32) as u8
}

/// Expands an I420 frame to interleaved RGBA.
///
/// Every 2x2 block of luma samples shares the chroma pair at `(x / 2, y / 2)`.
pub fn yuv_to_rgba(frame: &PlanarYuvFrame<'_>) -> RgbaImage {
    let width = frame.width();
    let height = frame.height();
    debug!("Converting I420 {}x{} to RGBA", width, height);

    let y_plane = frame.y_plane();
    let u_plane = frame.u_plane();
    let v_plane = frame.v_plane();

    let mut data = Vec::with_capacity(width * height * RgbaImage::CHANNELS);
    for row in 0..height {
        let luma = y_plane.row(row);
        let cb = u_plane.row(row / 2);
        let cr = v_plane.row(row / 2);
        for (col, &y) in luma.iter().enumerate() {
            data.extend_from_slice(&yuv_pixel_to_rgba(y, cb[col / 2], cr[col / 2]));
        }
    }

    RgbaImage::new(width, height, data)
}

/// Reduces RGBA to luma with BT.601 weights; alpha is ignored.
pub fn rgba_to_gray(image: &RgbaImage) -> GrayImage {
    debug!("Converting RGBA {}x{} to grayscale", image.width(), image.height());

    let data: Vec<u8> = image
        .pixels()
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();

    GrayImage::new(image.width(), image.height(), data)
}
