use crate::consts::{DEFAULT_LOG_BASE, DEFAULT_LOG_DELTA, MAX_INTENSITY, SHIFT_SCALE};
use crate::error::{CorrectionError, Result};
use crate::lut::{LookupTable, LutStrategy};
use crate::scope::ChannelScope;

use super::global::GlobalCorrection;

/// Logarithm base and brightness shift of a logarithmic correction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogParams {
    base: f64,
    delta: f64,
}

impl LogParams {
    pub fn new(base: f64, delta: f64) -> Result<Self> {
        Ok(Self {
            base: validate_base(base)?,
            delta: validate_delta(delta)?,
        })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for LogParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_LOG_BASE,
            delta: DEFAULT_LOG_DELTA,
        }
    }
}

fn validate_base(base: f64) -> Result<f64> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(CorrectionError::config(
            "logarithm base",
            format!("must be positive, finite and not 1, got {base}"),
        ));
    }
    Ok(base)
}

fn validate_delta(delta: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&delta) {
        return Err(CorrectionError::config(
            "delta",
            format!("must lie in [-1, 1], got {delta}"),
        ));
    }
    Ok(delta)
}

impl LutStrategy for LogParams {
    /// `255 * ln(1 + t*(base-1)) / ln(base) + delta*128` for `t = i/255`.
    fn build_lut(&self) -> LookupTable {
        let ln_base = self.base.ln();
        let shift = self.delta * SHIFT_SCALE;
        LookupTable::from_fn(|t| {
            MAX_INTENSITY * (1.0 + t * (self.base - 1.0)).ln() / ln_base + shift
        })
    }
}

/// Logarithmic intensity correction.
pub type LogCorrection = GlobalCorrection<LogParams>;

impl GlobalCorrection<LogParams> {
    pub fn new(base: f64, delta: f64, scope: ChannelScope) -> Result<Self> {
        Ok(Self::from_params(LogParams::new(base, delta)?, scope))
    }

    pub fn base(&self) -> f64 {
        self.params().base
    }

    pub fn delta(&self) -> f64 {
        self.params().delta
    }

    pub fn set_base(&mut self, base: f64) -> Result<()> {
        let base = validate_base(base)?;
        self.update_params(|p| p.base = base);
        Ok(())
    }

    pub fn set_delta(&mut self, delta: f64) -> Result<()> {
        let delta = validate_delta(delta)?;
        self.update_params(|p| p.delta = delta);
        Ok(())
    }
}

impl Default for GlobalCorrection<LogParams> {
    fn default() -> Self {
        Self::from_params(LogParams::default(), ChannelScope::Rgb)
    }
}
