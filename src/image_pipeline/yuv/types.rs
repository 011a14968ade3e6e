//! Planar YUV frame types

/// Read-only view of one image plane inside a shared frame buffer.
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    data: &'a [u8],
    offset: usize,
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Plane<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize, width: usize, height: usize, stride: usize) -> Self {
        debug_assert!(stride >= width);
        debug_assert!(height == 0 || offset + (height - 1) * stride + width <= data.len());
        Self {
            data,
            offset,
            width,
            height,
            stride,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of the plane's first sample in the frame buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Samples of row `y`, without stride padding.
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = self.offset + y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn sample(&self, x: usize, y: usize) -> u8 {
        self.data[self.offset + y * self.stride + x]
    }
}

/// A validated I420 frame borrowed from the caller.
///
/// Layout: full resolution Y plane, then the U plane, then the V plane, each
/// chroma plane subsampled by two in both directions.
#[derive(Debug, Clone, Copy)]
pub struct PlanarYuvFrame<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PlanarYuvFrame<'a> {
    /// Caller must have checked that `data` holds exactly `width * height * 3 / 2`
    /// bytes with even dimensions; `wrap` does this.
    pub(crate) fn new_unchecked(data: &'a [u8], width: usize, height: usize) -> Self {
        Self { data, width, height }
    }

    /// Width of the luma plane in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the luma plane in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn y_plane(&self) -> Plane<'a> {
        Plane::new(self.data, 0, self.width, self.height, self.width)
    }

    pub fn u_plane(&self) -> Plane<'a> {
        let (cw, ch) = self.chroma_dimensions();
        Plane::new(self.data, self.width * self.height, cw, ch, cw)
    }

    pub fn v_plane(&self) -> Plane<'a> {
        let (cw, ch) = self.chroma_dimensions();
        Plane::new(self.data, self.width * self.height + cw * ch, cw, ch, cw)
    }

    fn chroma_dimensions(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }
}
