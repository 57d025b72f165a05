use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lumacorr_core::consts::{DEFAULT_KSI_A, DEFAULT_KSI_B};
use lumacorr_core::{ChannelScope, Correction, KsiContrastEnhancement, WindowSize};

use super::{correct_file, parse_window};

#[derive(Args)]
pub struct KsiArgs {
    /// Input image file
    pub file: PathBuf,

    /// Blur window, "N" or "WxH"
    #[arg(long, default_value = "15", value_parser = parse_window)]
    pub window: WindowSize,

    /// Contrast gain (-1.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_KSI_A, allow_hyphen_values = true)]
    pub a: f64,

    /// Brightness offset (-1.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_KSI_B, allow_hyphen_values = true)]
    pub b: f64,

    /// Channels to correct: rgb, red, green, blue or luma
    #[arg(long, default_value = "rgb")]
    pub scope: ChannelScope,

    /// Output file path
    #[arg(short, long, default_value = "corrected.png")]
    pub output: PathBuf,
}

pub fn run(args: &KsiArgs) -> Result<()> {
    let correction = KsiContrastEnhancement::new(args.window, args.scope, args.a, args.b)?;
    correct_file(Correction::Ksi(correction), &args.file, &args.output)
}
