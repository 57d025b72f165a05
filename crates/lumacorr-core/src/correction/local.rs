use rayon::prelude::*;
use tracing::debug;

use crate::blur::{BlurKernel, BoxBlur, WindowSize};
use crate::buffer::PixelBuffer;
use crate::consts::{BLUE, BYTES_PER_PIXEL, GREEN, PARALLEL_PIXEL_THRESHOLD, RED};
use crate::error::{CorrectionError, Result};
use crate::lut::{LookupTable, LutCache, LutStrategy};
use crate::scope::{luma, Channel, ChannelScope};

/// Per-pixel rule of a local correction.
pub trait LocalStrategy: LutStrategy + Sync {
    /// Whether `combine` reads the global channel means.
    fn needs_means(&self) -> bool {
        false
    }

    /// Output intensity for a source value and its blurred neighbourhood value.
    ///
    /// `mean` is the global mean of the channel (0 when not requested) and
    /// `lut` the strategy's current table.
    fn combine(&self, source: u8, reference: u8, mean: f64, lut: &LookupTable) -> u8;
}

/// Global per-channel means of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelMeans {
    pub blue: f64,
    pub green: f64,
    pub red: f64,
    pub luma: f64,
}

impl ChannelMeans {
    pub fn of(buffer: &PixelBuffer) -> Self {
        let sums = buffer
            .par_rows()
            .map(|row| {
                let mut acc = [0.0f64; 4];
                for px in row.chunks_exact(BYTES_PER_PIXEL) {
                    acc[0] += px[BLUE] as f64;
                    acc[1] += px[GREEN] as f64;
                    acc[2] += px[RED] as f64;
                    acc[3] += luma(px);
                }
                acc
            })
            .reduce(
                || [0.0f64; 4],
                |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]],
            );

        let total = buffer.pixel_count() as f64;
        Self {
            blue: sums[0] / total,
            green: sums[1] / total,
            red: sums[2] / total,
            luma: sums[3] / total,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Blue => self.blue,
            Channel::Green => self.green,
            Channel::Red => self.red,
            Channel::Luma => self.luma,
        }
    }
}

/// Two-phase correction: blur a copy of the source, then combine each source
/// pixel with its blurred counterpart.
#[derive(Clone, Debug)]
pub struct LocalCorrection<S, B = BoxBlur> {
    cache: LutCache<S>,
    window: WindowSize,
    scope: ChannelScope,
    blur: B,
}

impl<S: LocalStrategy> LocalCorrection<S, BoxBlur> {
    pub fn from_params(params: S, window: WindowSize, scope: ChannelScope) -> Self {
        Self {
            cache: LutCache::new(params),
            window,
            scope,
            blur: BoxBlur,
        }
    }
}

impl<S: LocalStrategy, B: BlurKernel> LocalCorrection<S, B> {
    /// Replace the blur used to build the local reference.
    pub fn with_blur<K: BlurKernel>(self, blur: K) -> LocalCorrection<S, K> {
        LocalCorrection {
            cache: self.cache,
            window: self.window,
            scope: self.scope,
            blur,
        }
    }

    pub fn params(&self) -> &S {
        self.cache.params()
    }

    pub(crate) fn update_params<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        self.cache.update(f)
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn set_window(&mut self, window: WindowSize) {
        self.window = window;
    }

    pub fn scope(&self) -> ChannelScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: ChannelScope) {
        self.scope = scope;
    }

    pub fn lut(&mut self) -> &LookupTable {
        self.cache.ensure_fresh()
    }

    pub fn rebuild_count(&self) -> usize {
        self.cache.rebuild_count()
    }

    /// Correct `source` into `destination`.
    ///
    /// Only in-scope channels of `destination` are written. Fails before
    /// touching `destination` when the two buffers differ in size.
    pub fn apply(&mut self, destination: &mut PixelBuffer, source: &PixelBuffer) -> Result<()> {
        if destination.dimensions() != source.dimensions() {
            return Err(CorrectionError::DimensionMismatch {
                expected: source.dimensions(),
                actual: destination.dimensions(),
            });
        }

        let mut reference = source.clone();
        self.blur.blur_in_place(&mut reference, self.window);

        let scope = self.scope;
        let (strategy, lut) = self.cache.fresh();
        let means = if strategy.needs_means() {
            ChannelMeans::of(source)
        } else {
            ChannelMeans::default()
        };
        debug!(window = %self.window, scope = %scope, ?means, "Local correction");

        let combine_row = |((dst, src), blurred): ((&mut [u8], &[u8]), &[u8])| {
            scope.combine_row(dst, src, blurred, |channel, s, r| {
                strategy.combine(s, r, means.get(channel), lut)
            })
        };

        if destination.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            destination
                .par_rows_mut()
                .zip(source.par_rows())
                .zip(reference.par_rows())
                .for_each(combine_row);
        } else {
            destination
                .rows_mut()
                .zip(source.rows())
                .zip(reference.rows())
                .for_each(combine_row);
        }
        Ok(())
    }

    /// Correct `buffer` in place. The blur runs on a snapshot of the original.
    pub fn apply_in_place(&mut self, buffer: &mut PixelBuffer) -> Result<()> {
        let source = buffer.clone();
        self.apply(buffer, &source)
    }
}
