use tracing::debug;

use crate::consts::{LUT_SIZE, MAX_INTENSITY};

/// Round to nearest and clamp into the 8-bit range. NaN maps to 0.
pub fn clamp8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, MAX_INTENSITY) as u8
}

/// A 256-entry intensity remap: `values[i]` is the corrected value for input `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTable([u8; LUT_SIZE]);

impl LookupTable {
    pub fn identity() -> Self {
        Self(std::array::from_fn(|i| i as u8))
    }

    /// Build a table from a curve over normalized intensities.
    ///
    /// `curve` receives `t = i / 255` and returns the output intensity on the
    /// 0..255 scale; the result is rounded and clamped.
    pub fn from_fn(curve: impl Fn(f64) -> f64) -> Self {
        Self(std::array::from_fn(|i| {
            clamp8(curve(i as f64 / MAX_INTENSITY))
        }))
    }

    pub fn from_values(values: [u8; LUT_SIZE]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn get(&self, intensity: u8) -> u8 {
        self.0[intensity as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| i == v as usize)
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::identity()
    }
}

/// Parameter set that knows how to generate its lookup table.
pub trait LutStrategy {
    fn build_lut(&self) -> LookupTable;
}

/// A table supplied directly by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLut(pub LookupTable);

impl LutStrategy for FixedLut {
    fn build_lut(&self) -> LookupTable {
        self.0.clone()
    }
}

/// Parameters plus the table derived from them, rebuilt lazily.
///
/// The table starts stale and is rebuilt by [`LutCache::ensure_fresh`] the
/// first time it is needed and again after every parameter change.
#[derive(Clone, Debug)]
pub struct LutCache<P> {
    params: P,
    lut: LookupTable,
    stale: bool,
    rebuilds: usize,
}

impl<P: LutStrategy> LutCache<P> {
    pub fn new(params: P) -> Self {
        Self {
            params,
            lut: LookupTable::identity(),
            stale: true,
            rebuilds: 0,
        }
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    /// Mutate the parameters. Always marks the table stale.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut P) -> R) -> R {
        self.stale = true;
        f(&mut self.params)
    }

    pub fn mark_dirty(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Rebuild the table if the parameters changed since the last rebuild.
    pub fn ensure_fresh(&mut self) -> &LookupTable {
        self.fresh().1
    }

    /// Like [`LutCache::ensure_fresh`], also handing back the parameters.
    pub fn fresh(&mut self) -> (&P, &LookupTable) {
        if self.stale {
            self.stale = false;
            self.lut = self.params.build_lut();
            self.rebuilds += 1;
            debug!(rebuilds = self.rebuilds, "Lookup table rebuilt");
        }
        (&self.params, &self.lut)
    }

    /// Number of rebuilds performed so far.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }
}
