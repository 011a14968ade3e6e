//! Types for edge detection

/// Default lower hysteresis threshold, in L1 Sobel magnitude units.
pub const DEFAULT_LOW_THRESHOLD: u32 = 80;
/// Default upper hysteresis threshold, in L1 Sobel magnitude units.
pub const DEFAULT_HIGH_THRESHOLD: u32 = 200;

/// Hysteresis threshold pair. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeThresholds {
    low: u32,
    high: u32,
}

impl EdgeThresholds {
    /// Swaps the values if they arrive in the wrong order.
    pub fn new(low: u32, high: u32) -> Self {
        if low > high {
            Self { low: high, high: low }
        } else {
            Self { low, high }
        }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_THRESHOLD, DEFAULT_HIGH_THRESHOLD)
    }
}

/// Gradient direction quantized to the four neighbor axes of a 3x3 window.
///
/// Angles follow image coordinates (y grows downward): `Deg45` pairs the
/// up-left and down-right neighbors, `Deg135` the up-right and down-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl Direction {
    /// Neighbor offsets `(dx, dy)` along the gradient, "previous" first.
    pub fn neighbors(self) -> [(isize, isize); 2] {
        match self {
            Direction::Deg0 => [(-1, 0), (1, 0)],
            Direction::Deg45 => [(-1, -1), (1, 1)],
            Direction::Deg90 => [(0, -1), (0, 1)],
            Direction::Deg135 => [(1, -1), (-1, 1)],
        }
    }
}

/// Per-pixel Sobel response. Border pixels carry zero magnitude.
#[derive(Debug, Clone)]
pub struct GradientField {
    pub width: usize,
    pub height: usize,
    /// L1 magnitude `|gx| + |gy|`
    pub magnitude: Vec<u32>,
    pub direction: Vec<Direction>,
}

impl GradientField {
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            magnitude: vec![0; width * height],
            direction: vec![Direction::Deg0; width * height],
        }
    }

    pub fn magnitude_at(&self, x: usize, y: usize) -> u32 {
        self.magnitude[y * self.width + x]
    }
}

/// Gradient magnitudes that survived non-maximum suppression; every other
/// pixel is zero.
#[derive(Debug, Clone)]
pub struct EdgeCandidates {
    pub width: usize,
    pub height: usize,
    pub magnitude: Vec<u32>,
}

/// Binary edge map: [`EdgeMask::EDGE`] or [`EdgeMask::NONE`] per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl EdgeMask {
    pub const EDGE: u8 = 255;
    pub const NONE: u8 = 0;

    pub(crate) fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Self::EDGE
    }

    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == Self::EDGE).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = EdgeThresholds::default();
        assert_eq!((t.low(), t.high()), (80, 200));
    }

    #[test]
    fn test_thresholds_are_ordered() {
        let t = EdgeThresholds::new(200, 80);
        assert_eq!((t.low(), t.high()), (80, 200));
    }

    #[test]
    fn test_direction_neighbors_are_opposite() {
        for dir in [Direction::Deg0, Direction::Deg45, Direction::Deg90, Direction::Deg135] {
            let [(ax, ay), (bx, by)] = dir.neighbors();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }
}
