use crate::blur::WindowSize;
use crate::lut::{clamp8, LookupTable, LutStrategy};
use crate::scope::ChannelScope;

use super::local::{LocalCorrection, LocalStrategy};

/// Flat-field rule: scale each value by `global mean / local mean`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlatFieldParams;

impl LutStrategy for FlatFieldParams {
    fn build_lut(&self) -> LookupTable {
        LookupTable::identity()
    }
}

impl LocalStrategy for FlatFieldParams {
    fn needs_means(&self) -> bool {
        true
    }

    fn combine(&self, source: u8, reference: u8, mean: f64, _lut: &LookupTable) -> u8 {
        // Zero reference: leave the value as it is.
        if reference == 0 {
            return source;
        }
        clamp8(source as f64 * mean / reference as f64)
    }
}

/// Compensates uneven illumination using a box-blurred copy of the image.
pub type FlatFieldCorrection = LocalCorrection<FlatFieldParams>;

impl LocalCorrection<FlatFieldParams> {
    pub fn new(window: WindowSize) -> Self {
        Self::from_params(FlatFieldParams, window, ChannelScope::Rgb)
    }
}

impl Default for LocalCorrection<FlatFieldParams> {
    fn default() -> Self {
        Self::new(WindowSize::default())
    }
}
