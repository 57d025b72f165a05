use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use lumacorr_core::pipeline::config::PipelineConfig;
use lumacorr_core::pipeline::run_pipeline_reported;
use tracing::info;

use crate::summary::{print_pipeline_summary, ConsoleReporter};

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    pub config: PathBuf,

    /// Override the input image from the config
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the output path from the config
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = PipelineConfig::load(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    if let Some(ref input) = args.input {
        config.input = input.clone();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    info!(
        config = %args.config.display(),
        steps = config.steps.len(),
        "Pipeline config loaded"
    );

    print_pipeline_summary(&config);

    run_pipeline_reported(&config, Arc::new(ConsoleReporter::new()))?;
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}
