use std::sync::Arc;

use tracing::info;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::io::image_io::{load_image, save_image};

use super::config::PipelineConfig;
use super::helpers::apply_steps;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

/// Load the input, apply every configured step and save the output.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PixelBuffer> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let mut buffer = load_image(&config.input)?;
    reporter.finish_stage();
    info!(
        input = %config.input.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Image loaded"
    );

    reporter.begin_stage(PipelineStage::Correcting, Some(config.steps.len()));
    apply_steps(&mut buffer, &config.steps, |done| reporter.advance(done))?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    save_image(&buffer, &config.output)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Output saved");

    Ok(buffer)
}

/// Run the pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PixelBuffer> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
