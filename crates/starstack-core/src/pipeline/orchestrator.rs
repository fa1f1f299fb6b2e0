use tracing::info;

use crate::error::Result;
use crate::io::{list_frames, save_image};
use crate::pick::StarPicker;
use crate::session::{FramePickSet, SessionStore};

use super::composite::composite_picks;
use super::config::PipelineConfig;
use super::selection::select_stars;
use super::types::{CompositeReport, PipelineStage, ProgressReporter};

/// Selection phase: scan the input directory, pick stars on every frame and
/// persist the picks to `store`.
pub fn run_selection_phase(
    config: &PipelineConfig,
    picker: &mut dyn StarPicker,
    store: &mut dyn SessionStore,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<FramePickSet>> {
    reporter.begin_stage(PipelineStage::Scanning, None);
    let frames = list_frames(&config.input)?;
    info!(
        frames = frames.len(),
        reference = %frames[0].display(),
        "Input scanned"
    );
    reporter.finish_stage();

    let picks = select_stars(&frames, picker, &config.centroid, reporter)?;

    reporter.begin_stage(PipelineStage::SavingSession, None);
    store.save(&picks)?;
    reporter.finish_stage();

    Ok(picks)
}

/// Compositing phase: load the persisted picks, align and stack every frame,
/// then write the composite to `config.output`.
///
/// Nothing is written unless at least one frame was composited.
pub fn run_composite_phase(
    config: &PipelineConfig,
    store: &mut dyn SessionStore,
    reporter: &dyn ProgressReporter,
) -> Result<CompositeReport> {
    reporter.begin_stage(PipelineStage::LoadingSession, None);
    let picks = store.load()?;
    reporter.finish_stage();

    let report = composite_picks(&picks, config, reporter)?;

    reporter.begin_stage(PipelineStage::Writing, None);
    save_image(&report.composite, &config.output)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Composite written");

    Ok(report)
}

/// Run both phases back to back, passing the picks through `store`.
pub fn run_pipeline(
    config: &PipelineConfig,
    picker: &mut dyn StarPicker,
    store: &mut dyn SessionStore,
    reporter: &dyn ProgressReporter,
) -> Result<CompositeReport> {
    run_selection_phase(config, picker, store, reporter)?;
    run_composite_phase(config, store, reporter)
}
