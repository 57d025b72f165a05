use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumacorr_core::correction::ChannelMeans;
use lumacorr_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let means = ChannelMeans::of(&buffer);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", buffer.width(), buffer.height());
    println!("Mean blue:   {:.1}", means.blue);
    println!("Mean green:  {:.1}", means.green);
    println!("Mean red:    {:.1}", means.red);
    println!("Mean luma:   {:.1}", means.luma);

    Ok(())
}
