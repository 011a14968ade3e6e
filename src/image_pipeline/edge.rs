//! Edge detection module
//!
//! Canny-style detector over 8-bit grayscale: binomial smoothing, Sobel
//! gradients, non-maximum suppression and double-threshold hysteresis.

mod canny;
mod gradient;
mod hysteresis;
mod suppression;
pub mod types;

pub use canny::detect_edges;
pub use gradient::{gaussian_blur, sobel_gradients};
pub use hysteresis::hysteresis;
pub use suppression::non_max_suppression;
pub use types::{Direction, EdgeCandidates, EdgeMask, EdgeThresholds, GradientField};
