//! Colorspace conversion module
//!
//! Planar YUV to interleaved RGBA (BT.601 full range), then RGBA to
//! single-channel luma.

mod convert;
pub mod types;

pub use convert::{rgba_to_gray, yuv_to_rgba};
pub use types::{GrayImage, RgbaImage};
