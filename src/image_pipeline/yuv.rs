//! Planar YUV input module
//!
//! Validates caller buffers and exposes them as strided plane views so the
//! converters never do raw offset arithmetic.

mod adapter;
pub mod types;

pub use types::{Plane, PlanarYuvFrame};
pub use adapter::{wrap, i420_len};
