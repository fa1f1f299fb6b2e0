pub mod config;
mod composite;
mod orchestrator;
mod selection;
mod types;

pub use composite::composite_picks;
pub use orchestrator::{run_composite_phase, run_pipeline, run_selection_phase};
pub use selection::select_stars;
pub use types::{
    CompositeReport, NoOpReporter, PipelineStage, ProgressReporter, SkipReason, SkippedFrame,
};
