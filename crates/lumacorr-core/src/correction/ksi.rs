use crate::blur::WindowSize;
use crate::consts::{DEFAULT_KSI_A, DEFAULT_KSI_B, KSI_LOGISTIC_GAIN, MAX_INTENSITY, SHIFT_SCALE};
use crate::error::{CorrectionError, Result};
use crate::lut::{clamp8, LookupTable, LutStrategy};
use crate::scope::ChannelScope;

use super::local::{LocalCorrection, LocalStrategy};

/// Contrast `a` and offset `b` of the KSI enhancement, both in [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KsiParams {
    a: f64,
    b: f64,
}

impl KsiParams {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        Ok(Self {
            a: validate_unit("contrast", a)?,
            b: validate_unit("offset", b)?,
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for KsiParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_KSI_A,
            b: DEFAULT_KSI_B,
        }
    }
}

fn validate_unit(parameter: &'static str, value: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(CorrectionError::config(
            parameter,
            format!("must lie in [-1, 1], got {value}"),
        ));
    }
    Ok(value)
}

/// Logistic S-curve through (0, 0) and (1, 1).
fn s_curve(t: f64) -> f64 {
    let sigmoid = |x: f64| 1.0 / (1.0 + (-KSI_LOGISTIC_GAIN * (x - 0.5)).exp());
    let lo = sigmoid(0.0);
    let hi = sigmoid(1.0);
    (sigmoid(t) - lo) / (hi - lo)
}

impl LutStrategy for KsiParams {
    /// Blend of identity and the S-curve weighted by `a`, shifted by `b*128`.
    ///
    /// Non-decreasing for every `a` in [-1, 1]: the curve's slope never
    /// exceeds 2 with the chosen gain.
    fn build_lut(&self) -> LookupTable {
        let shift = self.b * SHIFT_SCALE;
        LookupTable::from_fn(|t| {
            MAX_INTENSITY * ((1.0 - self.a) * t + self.a * s_curve(t)) + shift
        })
    }
}

impl LocalStrategy for KsiParams {
    /// Amplify the local deviation by `a`, then remap through the table.
    fn combine(&self, source: u8, reference: u8, _mean: f64, lut: &LookupTable) -> u8 {
        let deviation = source as f64 - reference as f64;
        lut.get(clamp8(source as f64 + self.a * deviation))
    }
}

/// Local contrast enhancement.
pub type KsiContrastEnhancement = LocalCorrection<KsiParams>;

impl LocalCorrection<KsiParams> {
    pub fn new(window: WindowSize, scope: ChannelScope, a: f64, b: f64) -> Result<Self> {
        Ok(Self::from_params(KsiParams::new(a, b)?, window, scope))
    }

    pub fn a(&self) -> f64 {
        self.params().a
    }

    pub fn b(&self) -> f64 {
        self.params().b
    }

    pub fn set_a(&mut self, a: f64) -> Result<()> {
        let a = validate_unit("contrast", a)?;
        self.update_params(|p| p.a = a);
        Ok(())
    }

    pub fn set_b(&mut self, b: f64) -> Result<()> {
        let b = validate_unit("offset", b)?;
        self.update_params(|p| p.b = b);
        Ok(())
    }
}

impl Default for LocalCorrection<KsiParams> {
    fn default() -> Self {
        Self::from_params(
            KsiParams::default(),
            WindowSize::default(),
            ChannelScope::Rgb,
        )
    }
}
