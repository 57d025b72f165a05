use std::sync::atomic::{AtomicUsize, Ordering};

use console::Style;
use lumacorr_core::pipeline::config::{CorrectionStep, PipelineConfig};
use lumacorr_core::pipeline::{PipelineStage, ProgressReporter};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lumacorr Pipeline"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Corrections"));
    if config.steps.is_empty() {
        println!("    {}", s.disabled.apply_to("none (input is copied)"));
    }
    for (i, step) in config.steps.iter().enumerate() {
        print_step(&s, i + 1, step);
    }
    println!();
}

fn print_step(s: &Styles, index: usize, step: &CorrectionStep) {
    let (name, scope) = match step {
        CorrectionStep::Log { scope, .. } => ("Logarithmic", scope),
        CorrectionStep::FlatField { scope, .. } => ("Flat-field", scope),
        CorrectionStep::Ksi { scope, .. } => ("KSI contrast", scope),
    };
    println!(
        "    {}. {}  {}",
        index,
        s.method.apply_to(name),
        s.label.apply_to(format!("[{scope}]"))
    );

    match *step {
        CorrectionStep::Log { base, delta, .. } => {
            println!(
                "       {:<10}{}",
                s.label.apply_to("Base"),
                s.value.apply_to(base)
            );
            println!(
                "       {:<10}{}",
                s.label.apply_to("Delta"),
                s.value.apply_to(delta)
            );
        }
        CorrectionStep::FlatField {
            window_width,
            window_height,
            ..
        } => {
            println!(
                "       {:<10}{}",
                s.label.apply_to("Window"),
                s.value.apply_to(format!("{window_width}x{window_height}"))
            );
        }
        CorrectionStep::Ksi {
            window_width,
            window_height,
            a,
            b,
            ..
        } => {
            println!(
                "       {:<10}{}",
                s.label.apply_to("Window"),
                s.value.apply_to(format!("{window_width}x{window_height}"))
            );
            println!(
                "       {:<10}{}",
                s.label.apply_to("Contrast"),
                s.value.apply_to(a)
            );
            println!(
                "       {:<10}{}",
                s.label.apply_to("Offset"),
                s.value.apply_to(b)
            );
        }
    }
}

/// Prints one line per pipeline stage and per finished correction step.
pub struct ConsoleReporter {
    total: AtomicUsize,
    style: Style,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            total: AtomicUsize::new(0),
            style: Style::new().cyan(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.total.store(total_items.unwrap_or(0), Ordering::Relaxed);
        println!("{}", self.style.apply_to(stage));
    }

    fn advance(&self, items_done: usize) {
        let total = self.total.load(Ordering::Relaxed);
        println!("  step {items_done}/{total} done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reporter_tracks_stage_totals() {
        let reporter = ConsoleReporter::default();
        assert_eq!(reporter.total.load(Ordering::Relaxed), 0);
        reporter.begin_stage(PipelineStage::Correcting, Some(3));
        assert_eq!(reporter.total.load(Ordering::Relaxed), 3);
        reporter.begin_stage(PipelineStage::Writing, None);
        assert_eq!(reporter.total.load(Ordering::Relaxed), 0);
    }
}
