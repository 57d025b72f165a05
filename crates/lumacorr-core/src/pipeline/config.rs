use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::blur::WindowSize;
use crate::consts::{
    DEFAULT_KSI_A, DEFAULT_KSI_B, DEFAULT_LOG_BASE, DEFAULT_LOG_DELTA, DEFAULT_WINDOW,
};
use crate::correction::{Correction, FlatFieldCorrection, KsiContrastEnhancement, LogCorrection};
use crate::error::Result;
use crate::scope::ChannelScope;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub steps: Vec<CorrectionStep>,
}

impl PipelineConfig {
    /// Read a TOML pipeline description.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("corrected.png"),
            steps: vec![],
        }
    }
}

/// One correction in a pipeline, as written in the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrectionStep {
    Log {
        #[serde(default = "default_log_base")]
        base: f64,
        #[serde(default = "default_log_delta")]
        delta: f64,
        #[serde(default)]
        scope: ChannelScope,
    },
    FlatField {
        #[serde(default = "default_window")]
        window_width: usize,
        #[serde(default = "default_window")]
        window_height: usize,
        #[serde(default)]
        scope: ChannelScope,
    },
    Ksi {
        #[serde(default = "default_window")]
        window_width: usize,
        #[serde(default = "default_window")]
        window_height: usize,
        #[serde(default = "default_ksi_a")]
        a: f64,
        #[serde(default = "default_ksi_b")]
        b: f64,
        #[serde(default)]
        scope: ChannelScope,
    },
}

fn default_log_base() -> f64 {
    DEFAULT_LOG_BASE
}

fn default_log_delta() -> f64 {
    DEFAULT_LOG_DELTA
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_ksi_a() -> f64 {
    DEFAULT_KSI_A
}

fn default_ksi_b() -> f64 {
    DEFAULT_KSI_B
}

impl CorrectionStep {
    /// Validate the parameters and build the filter.
    pub fn build(&self) -> Result<Correction> {
        match *self {
            CorrectionStep::Log { base, delta, scope } => {
                Ok(Correction::Log(LogCorrection::new(base, delta, scope)?))
            }
            CorrectionStep::FlatField {
                window_width,
                window_height,
                scope,
            } => {
                let mut corr = FlatFieldCorrection::new(WindowSize::new(window_width, window_height)?);
                corr.set_scope(scope);
                Ok(Correction::FlatField(corr))
            }
            CorrectionStep::Ksi {
                window_width,
                window_height,
                a,
                b,
                scope,
            } => Ok(Correction::Ksi(KsiContrastEnhancement::new(
                WindowSize::new(window_width, window_height)?,
                scope,
                a,
                b,
            )?)),
        }
    }
}
