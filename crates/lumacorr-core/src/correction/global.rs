use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::lut::{FixedLut, LookupTable, LutCache, LutStrategy};
use crate::scope::ChannelScope;

/// A pixel-wise correction: every in-scope channel goes through one lookup table.
#[derive(Clone, Debug)]
pub struct GlobalCorrection<P> {
    cache: LutCache<P>,
    scope: ChannelScope,
}

impl<P: LutStrategy> GlobalCorrection<P> {
    pub fn from_params(params: P, scope: ChannelScope) -> Self {
        Self {
            cache: LutCache::new(params),
            scope,
        }
    }

    pub fn params(&self) -> &P {
        self.cache.params()
    }

    /// Mutate the parameters and mark the table for rebuild.
    pub(crate) fn update_params<R>(&mut self, f: impl FnOnce(&mut P) -> R) -> R {
        self.cache.update(f)
    }

    pub fn scope(&self) -> ChannelScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: ChannelScope) {
        self.scope = scope;
    }

    /// The current table, rebuilt first if the parameters changed.
    pub fn lut(&mut self) -> &LookupTable {
        self.cache.ensure_fresh()
    }

    pub fn rebuild_count(&self) -> usize {
        self.cache.rebuild_count()
    }

    /// Map every in-scope channel of `buffer` through the table, in place.
    pub fn apply(&mut self, buffer: &mut PixelBuffer) {
        let scope = self.scope;
        let lut = self.cache.ensure_fresh();
        let map_row = |row: &mut [u8]| scope.map_row(row, |_, v| lut.get(v));

        if buffer.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            buffer.par_rows_mut().for_each(map_row);
        } else {
            buffer.rows_mut().for_each(map_row);
        }
    }
}

impl GlobalCorrection<FixedLut> {
    /// Apply a caller-supplied table.
    pub fn with_lut(lut: LookupTable, scope: ChannelScope) -> Self {
        Self::from_params(FixedLut(lut), scope)
    }

    pub fn set_lut(&mut self, lut: LookupTable) {
        self.update_params(|p| p.0 = lut);
    }
}
