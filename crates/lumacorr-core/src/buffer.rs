use rayon::prelude::*;

use crate::consts::BYTES_PER_PIXEL;
use crate::error::{CorrectionError, Result};

/// A row-major BGRA image with 8 bits per channel.
///
/// Every pixel occupies exactly 4 bytes in B, G, R, A order. Rows are `stride`
/// bytes apart; the bytes between `width * 4` and `stride` are padding and are
/// never read or written by a correction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap an existing byte buffer. `data` must hold at least `stride * height` bytes.
    pub fn new(width: usize, height: usize, stride: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidBuffer(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        let row_len = row_bytes(width)?;
        if stride < row_len {
            return Err(CorrectionError::InvalidBuffer(format!(
                "stride {stride} is smaller than row length {row_len}"
            )));
        }
        let required = stride.checked_mul(height).ok_or_else(|| {
            CorrectionError::InvalidBuffer(format!("{height} rows of stride {stride} overflow"))
        })?;
        if data.len() < required {
            return Err(CorrectionError::InvalidBuffer(format!(
                "{} bytes cannot hold {height} rows of stride {stride}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Tightly packed BGRA data (`stride == width * 4`).
    pub fn from_bgra(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, row_bytes(width)?, data)
    }

    /// A tightly packed buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: [u8; 4]) -> Result<Self> {
        let len = row_bytes(width)?.checked_mul(height).ok_or_else(|| {
            CorrectionError::InvalidBuffer(format!("{width}x{height} pixels overflow"))
        })?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Self::from_bgra(width, height, data)
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

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// The B, G, R, A bytes of pixel `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let row = self.row(y);
        let k = x * BYTES_PER_PIXEL;
        [row[k], row[k + 1], row[k + 2], row[k + 3]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [u8; 4]) {
        let k = x * BYTES_PER_PIXEL;
        self.row_mut(y)[k..k + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Pixel bytes of row `y`, without padding.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width * BYTES_PER_PIXEL]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let start = y * self.stride;
        let end = start + self.width * BYTES_PER_PIXEL;
        &mut self.data[start..end]
    }

    /// The whole backing store, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterate rows (without padding) in order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.width * BYTES_PER_PIXEL;
        self.data[..self.stride * self.height]
            .chunks(self.stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Rows (without padding) in parallel.
    pub(crate) fn par_rows(&self) -> impl IndexedParallelIterator<Item = &[u8]> + '_ {
        let row_bytes = self.width * BYTES_PER_PIXEL;
        self.data[..self.stride * self.height]
            .par_chunks(self.stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Rows (without padding) as disjoint mutable slices, in parallel.
    pub(crate) fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u8]> + '_ {
        let row_bytes = self.width * BYTES_PER_PIXEL;
        self.data[..self.stride * self.height]
            .par_chunks_mut(self.stride)
            .map(move |row| &mut row[..row_bytes])
    }

    /// Rows (without padding) as disjoint mutable slices, sequentially.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let row_bytes = self.width * BYTES_PER_PIXEL;
        self.data[..self.stride * self.height]
            .chunks_mut(self.stride)
            .map(move |row| &mut row[..row_bytes])
    }
}

/// Bytes of pixel data in a row of `width` pixels.
fn row_bytes(width: usize) -> Result<usize> {
    width.checked_mul(BYTES_PER_PIXEL).ok_or_else(|| {
        CorrectionError::InvalidBuffer(format!("row of {width} pixels overflows"))
    })
}
