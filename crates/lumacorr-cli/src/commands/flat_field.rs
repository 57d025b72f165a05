use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lumacorr_core::{ChannelScope, Correction, FlatFieldCorrection, WindowSize};

use super::{correct_file, parse_window};

#[derive(Args)]
pub struct FlatFieldArgs {
    /// Input image file
    pub file: PathBuf,

    /// Blur window, "N" or "WxH"
    #[arg(long, default_value = "15", value_parser = parse_window)]
    pub window: WindowSize,

    /// Channels to correct: rgb, red, green, blue or luma
    #[arg(long, default_value = "rgb")]
    pub scope: ChannelScope,

    /// Output file path
    #[arg(short, long, default_value = "corrected.png")]
    pub output: PathBuf,
}

pub fn run(args: &FlatFieldArgs) -> Result<()> {
    let mut correction = FlatFieldCorrection::new(args.window);
    correction.set_scope(args.scope);
    correct_file(Correction::FlatField(correction), &args.file, &args.output)
}
