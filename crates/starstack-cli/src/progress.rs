use std::cell::RefCell;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use starstack_core::pipeline::{PipelineStage, ProgressReporter};

/// Progress output for the terminal.
///
/// Compositing gets a progress bar. Other stages print a header line, since
/// star selection prompts on the same terminal.
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
    stage: Style,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
            stage: Style::new().cyan().bold(),
        }
    }
}

impl ProgressReporter for CliReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        match (stage, total_items) {
            (PipelineStage::Compositing, Some(total)) => {
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::default_bar().template("{msg:14} [{bar:40}] {pos}/{len}") {
                    pb.set_style(style.progress_chars("=> "));
                }
                pb.set_message(stage.to_string());
                *self.bar.borrow_mut() = Some(pb);
            }
            (_, Some(total)) => {
                println!("{} ({} frames)", self.stage.apply_to(stage), total);
            }
            (_, None) => println!("{}", self.stage.apply_to(stage)),
        }
    }

    fn advance(&self, items_done: usize) {
        if let Some(ref pb) = *self.bar.borrow() {
            pb.set_position(items_done as u64);
        }
    }

    fn finish_stage(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_with_message("Done");
        }
    }
}
