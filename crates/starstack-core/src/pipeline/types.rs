use std::path::PathBuf;

use crate::frame::Frame;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Scanning,
    Selecting,
    SavingSession,
    LoadingSession,
    Compositing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scanning => write!(f, "Scanning input"),
            Self::Selecting => write!(f, "Selecting stars"),
            Self::SavingSession => write!(f, "Saving session"),
            Self::LoadingSession => write!(f, "Loading session"),
            Self::Compositing => write!(f, "Compositing"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars or logging.
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., frame count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Why a frame was left out of the composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No star pair was picked for the frame.
    NoStars,
    /// The picked stars coincide, so no transform exists.
    DegenerateStars,
    /// The aligned frame does not match the reference shape.
    ShapeMismatch,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoStars => write!(f, "no star pair picked"),
            Self::DegenerateStars => write!(f, "picked stars coincide"),
            Self::ShapeMismatch => write!(f, "shape differs from reference"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedFrame {
    pub index: usize,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of the compositing phase.
#[derive(Clone, Debug)]
pub struct CompositeReport {
    pub composite: Frame,
    /// Number of frames folded into the composite.
    pub included: usize,
    pub skipped: Vec<SkippedFrame>,
}
