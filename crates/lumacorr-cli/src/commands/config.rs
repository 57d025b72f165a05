use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumacorr_core::consts::{
    DEFAULT_KSI_A, DEFAULT_KSI_B, DEFAULT_LOG_BASE, DEFAULT_LOG_DELTA, DEFAULT_WINDOW,
};
use lumacorr_core::pipeline::config::{CorrectionStep, PipelineConfig};
use lumacorr_core::ChannelScope;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a sample PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig {
        steps: vec![
            CorrectionStep::FlatField {
                window_width: DEFAULT_WINDOW,
                window_height: DEFAULT_WINDOW,
                scope: ChannelScope::Rgb,
            },
            CorrectionStep::Log {
                base: DEFAULT_LOG_BASE,
                delta: DEFAULT_LOG_DELTA,
                scope: ChannelScope::Luma,
            },
            CorrectionStep::Ksi {
                window_width: DEFAULT_WINDOW,
                window_height: DEFAULT_WINDOW,
                a: DEFAULT_KSI_A,
                b: DEFAULT_KSI_B,
                scope: ChannelScope::Rgb,
            },
        ],
        ..Default::default()
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Sample config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
