use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::{info, warn};

use crate::align::refine_centroid;
use crate::consts::MIN_STAR_SEPARATION;
use crate::error::{Result, StarstackError};
use crate::frame::{Frame, StarPair, StarPosition};
use crate::io::load_image;
use crate::pick::StarPicker;
use crate::session::FramePickSet;

use super::config::CentroidConfig;
use super::types::{PipelineStage, ProgressReporter};

/// Interactive phase: pick and refine two stars on every frame.
///
/// The first frame is the reference; failing to pick both of its stars (or
/// picking the same star twice) aborts. On later frames a declined pick marks
/// the frame skipped. Frames are loaded one at a time.
pub fn select_stars(
    frames: &[PathBuf],
    picker: &mut dyn StarPicker,
    config: &CentroidConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<FramePickSet>> {
    let reference_path = frames.first().ok_or_else(|| {
        StarstackError::ReferenceSelection("no frames to pick from".to_string())
    })?;

    reporter.begin_stage(PipelineStage::Selecting, Some(frames.len()));
    let mut picks = Vec::with_capacity(frames.len());

    let reference = load_indexed(reference_path, 0)?;
    let name = format!("reference {}", display_name(reference_path));
    let reference_pair = pick_pair(picker, &reference, &name, config.half_size).ok_or_else(|| {
        StarstackError::ReferenceSelection("reference stars were not picked".to_string())
    })?;
    drop(reference);

    if reference_pair.separation() < MIN_STAR_SEPARATION {
        return Err(StarstackError::ReferenceSelection(
            "both reference stars refine to the same position".to_string(),
        ));
    }
    info!(
        x1 = reference_pair.first.x,
        y1 = reference_pair.first.y,
        x2 = reference_pair.second.x,
        y2 = reference_pair.second.y,
        "Reference pair established"
    );
    picks.push(FramePickSet::picked(0, reference_path.clone(), reference_pair));
    reporter.advance(1);

    for (index, path) in frames.iter().enumerate().skip(1) {
        let frame = load_indexed(path, index)?;
        let stars = pick_pair(picker, &frame, &display_name(path), config.half_size);
        drop(frame);

        match stars {
            Some(pair) => picks.push(FramePickSet::picked(index, path.clone(), pair)),
            None => {
                warn!(frame = index, path = %path.display(), "Star selection failed, frame will be skipped");
                picks.push(FramePickSet::skipped(index, path.clone()));
            }
        }
        reporter.advance(index + 1);
    }

    reporter.finish_stage();
    Ok(picks)
}

/// Pick and refine both stars of one frame; `None` as soon as either pick is declined.
fn pick_pair(
    picker: &mut dyn StarPicker,
    frame: &Frame,
    name: &str,
    half_size: usize,
) -> Option<StarPair> {
    let luminance = frame.luminance();
    let first = pick_refined(picker, frame, &luminance, &format!("star 1 of {}", name), half_size)?;
    let second = pick_refined(picker, frame, &luminance, &format!("star 2 of {}", name), half_size)?;
    Some(StarPair::new(first, second))
}

fn pick_refined(
    picker: &mut dyn StarPicker,
    frame: &Frame,
    luminance: &Array2<f32>,
    label: &str,
    half_size: usize,
) -> Option<StarPosition> {
    let rough = picker.pick(frame, label)?;
    let refined = refine_centroid(luminance, rough, half_size);
    info!(
        label,
        x = refined.x,
        y = refined.y,
        rough_x = rough.x,
        rough_y = rough.y,
        "Star refined"
    );
    Some(refined)
}

fn load_indexed(path: &Path, index: usize) -> Result<Frame> {
    let mut frame = load_image(path)?;
    frame.metadata.frame_index = index;
    Ok(frame)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
