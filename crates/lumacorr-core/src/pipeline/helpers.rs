use tracing::info;

use crate::buffer::PixelBuffer;
use crate::error::Result;

use super::config::CorrectionStep;

/// Build and apply a single step to `buffer` in place.
pub fn apply_step(buffer: &mut PixelBuffer, step: &CorrectionStep) -> Result<()> {
    let mut correction = step.build()?;
    correction.apply(buffer)?;
    info!(correction = %correction, "Correction applied");
    Ok(())
}

/// Apply `steps` in order.
///
/// Every step is validated before the first one runs, so a bad parameter
/// leaves `buffer` untouched. Calls `on_step(steps_done)` after each step.
pub fn apply_steps(
    buffer: &mut PixelBuffer,
    steps: &[CorrectionStep],
    mut on_step: impl FnMut(usize),
) -> Result<()> {
    let mut corrections = steps
        .iter()
        .map(CorrectionStep::build)
        .collect::<Result<Vec<_>>>()?;

    for (i, correction) in corrections.iter_mut().enumerate() {
        correction.apply(buffer)?;
        info!(step = i + 1, correction = %correction, "Correction applied");
        on_step(i + 1);
    }
    Ok(())
}
