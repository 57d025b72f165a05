use std::fmt;

use ndarray::Array3;
use rayon::prelude::*;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::consts::{BLUE, BYTES_PER_PIXEL, DEFAULT_WINDOW, GREEN, PARALLEL_PIXEL_THRESHOLD, RED};
use crate::error::{CorrectionError, Result};

/// Blur window in pixels. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowSize {
    width: usize,
    height: usize,
}

impl WindowSize {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::config(
                "window size",
                format!("must be at least 1x1, got {width}x{height}"),
            ));
        }
        Ok(Self { width, height })
    }

    /// A `size x size` window.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW,
            height: DEFAULT_WINDOW,
        }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// In-place neighbourhood smoothing used to build the local reference image.
pub trait BlurKernel: Send + Sync {
    /// Replace each pixel's colour channels with a statistic of its `window`
    /// neighbourhood. Alpha and padding must be left untouched.
    fn blur_in_place(&self, buffer: &mut PixelBuffer, window: WindowSize);
}

/// Mean filter over a rectangular window, clipped at the image border.
///
/// Uses a summed-area table so the cost does not depend on the window size.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxBlur;

const BLURRED: [usize; 3] = [BLUE, GREEN, RED];

impl BlurKernel for BoxBlur {
    fn blur_in_place(&self, buffer: &mut PixelBuffer, window: WindowSize) {
        let (w, h) = buffer.dimensions();
        debug!(width = w, height = h, window = %window, "Box blur");
        let table = summed_area_table(buffer);

        // Pixels before and after the centre covered by the window.
        let (before_w, after_w) = window_reach(window.width);
        let (before_h, after_h) = window_reach(window.height);

        let blur_row = |y: usize, row: &mut [u8]| {
            let y0 = y.saturating_sub(before_h);
            let y1 = y.saturating_add(after_h).min(h - 1);
            for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let x0 = x.saturating_sub(before_w);
                let x1 = x.saturating_add(after_w).min(w - 1);
                let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as u64;
                for (c, &k) in BLURRED.iter().enumerate() {
                    let sum = table[[y1 + 1, x1 + 1, c]] + table[[y0, x0, c]]
                        - table[[y0, x1 + 1, c]]
                        - table[[y1 + 1, x0, c]];
                    px[k] = ((sum + count / 2) / count) as u8;
                }
            }
        };

        if buffer.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            buffer
                .par_rows_mut()
                .enumerate()
                .for_each(|(y, row)| blur_row(y, row));
        } else {
            for (y, row) in buffer.rows_mut().enumerate() {
                blur_row(y, row);
            }
        }
    }
}

/// Split a window side into the reach before and after the centre pixel.
fn window_reach(size: usize) -> (usize, usize) {
    let before = size / 2;
    (before, size - before - 1)
}

/// Inclusive prefix sums of B, G, R with a zero border row and column.
fn summed_area_table(buffer: &PixelBuffer) -> Array3<u64> {
    let (w, h) = buffer.dimensions();
    let mut table = Array3::<u64>::zeros((h + 1, w + 1, BLURRED.len()));
    for (y, row) in buffer.rows().enumerate() {
        let mut running = [0u64; 3];
        for (x, px) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            for (c, &k) in BLURRED.iter().enumerate() {
                running[c] += px[k] as u64;
                table[[y + 1, x + 1, c]] = table[[y, x + 1, c]] + running[c];
            }
        }
    }
    table
}
