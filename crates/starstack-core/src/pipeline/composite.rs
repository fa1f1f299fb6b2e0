use tracing::{debug, info, warn};

use crate::align::{warp_frame, SimilarityTransform};
use crate::error::{Result, StarstackError};
use crate::frame::StarPair;
use crate::io::load_image;
use crate::session::FramePickSet;
use crate::stack::Compositor;

use super::config::PipelineConfig;
use super::types::{CompositeReport, PipelineStage, ProgressReporter, SkipReason, SkippedFrame};

/// Batch phase: align every picked frame onto the reference and fold it in.
///
/// `picks[0]` is the reference frame and must carry a star pair. It defines
/// the output shape and enters the composite untransformed. Frames are
/// processed strictly in order, one decoded frame at a time.
pub fn composite_picks(
    picks: &[FramePickSet],
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<CompositeReport> {
    let reference_record = picks.first().ok_or_else(|| {
        StarstackError::ReferenceSelection("pick session contains no frames".to_string())
    })?;
    let reference_pair = reference_record.stars.ok_or_else(|| {
        StarstackError::ReferenceSelection(format!(
            "no star pair recorded for reference frame {}",
            reference_record.path.display()
        ))
    })?;

    reporter.begin_stage(PipelineStage::Compositing, Some(picks.len()));

    let reference = load_image(&reference_record.path)?;
    let mut compositor = Compositor::for_reference(&reference, config.stacking.method);
    compositor.include(&reference)?;
    drop(reference);
    info!(
        path = %reference_record.path.display(),
        shape = ?compositor.shape(),
        "Reference frame included"
    );
    reporter.advance(1);

    let mut skipped = Vec::new();
    for (done, record) in picks.iter().enumerate().skip(1) {
        if let Some(reason) = fold_record(record, &reference_pair, &mut compositor, config)? {
            warn!(
                frame = record.index,
                path = %record.path.display(),
                %reason,
                "Skipping frame"
            );
            skipped.push(SkippedFrame {
                index: record.index,
                path: record.path.clone(),
                reason,
            });
        }
        reporter.advance(done + 1);
    }

    let composite = compositor.finalize()?;
    reporter.finish_stage();
    info!(
        included = compositor.count(),
        skipped = skipped.len(),
        method = %compositor.method(),
        "Compositing complete"
    );

    Ok(CompositeReport {
        composite,
        included: compositor.count(),
        skipped,
    })
}

/// Align one frame and add it to the compositor.
///
/// Returns the skip reason for recoverable per-frame failures.
fn fold_record(
    record: &FramePickSet,
    reference_pair: &StarPair,
    compositor: &mut Compositor,
    config: &PipelineConfig,
) -> Result<Option<SkipReason>> {
    let Some(stars) = record.stars else {
        return Ok(Some(SkipReason::NoStars));
    };

    let transform = match SimilarityTransform::estimate(reference_pair, &stars) {
        Ok(t) => t,
        Err(StarstackError::DegenerateTransform) => return Ok(Some(SkipReason::DegenerateStars)),
        Err(e) => return Err(e),
    };
    debug!(frame = record.index, %transform, "Estimated transform");

    let (height, width, _) = compositor.shape();
    let aligned = {
        let frame = load_image(&record.path)?;
        warp_frame(&frame, &transform, height, width, config.warp.border)?
    };

    match compositor.include(&aligned) {
        Ok(()) => Ok(None),
        Err(StarstackError::ShapeMismatch { .. }) => Ok(Some(SkipReason::ShapeMismatch)),
        Err(e) => Err(e),
    }
}
