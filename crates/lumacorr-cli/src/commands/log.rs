use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lumacorr_core::consts::{DEFAULT_LOG_BASE, DEFAULT_LOG_DELTA};
use lumacorr_core::{ChannelScope, Correction, LogCorrection};

use super::correct_file;

#[derive(Args)]
pub struct LogArgs {
    /// Input image file
    pub file: PathBuf,

    /// Logarithm base (positive, not 1)
    #[arg(long, default_value_t = DEFAULT_LOG_BASE)]
    pub base: f64,

    /// Brightness shift (-1.0 to 1.0)
    #[arg(long, default_value_t = DEFAULT_LOG_DELTA, allow_hyphen_values = true)]
    pub delta: f64,

    /// Channels to correct: rgb, red, green, blue or luma
    #[arg(long, default_value = "rgb")]
    pub scope: ChannelScope,

    /// Output file path
    #[arg(short, long, default_value = "corrected.png")]
    pub output: PathBuf,
}

pub fn run(args: &LogArgs) -> Result<()> {
    let correction = LogCorrection::new(args.base, args.delta, args.scope)?;
    correct_file(Correction::Log(correction), &args.file, &args.output)
}
