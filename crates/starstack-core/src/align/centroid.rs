//! Centroid (center-of-gravity) refinement of star picks.
//!
//! A rough integer pick is refined to the intensity-weighted center of mass
//! of a square window around it. The result is naturally sub-pixel and only
//! needs the star to dominate its window.

use ndarray::Array2;
use tracing::debug;

use crate::frame::{Frame, RoughPick, StarPosition};

/// Refine a rough pick to the intensity-weighted centroid of the window
/// `[y-h, y+h) x [x-h, x+h)` on `data`.
///
/// The window is clamped to the image bounds. An empty or all-zero window
/// returns the rough pick unchanged.
pub fn refine_centroid(data: &Array2<f32>, pick: RoughPick, half_size: usize) -> StarPosition {
    let (h, w) = data.dim();
    let half = half_size as i64;

    let row_start = clamp_index(pick.y - half, h);
    let row_end = clamp_index(pick.y + half, h);
    let col_start = clamp_index(pick.x - half, w);
    let col_end = clamp_index(pick.x + half, w);

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut sum_w = 0.0f64;

    for row in row_start..row_end {
        for col in col_start..col_end {
            let weight = data[[row, col]] as f64;
            sum_x += col as f64 * weight;
            sum_y += row as f64 * weight;
            sum_w += weight;
        }
    }

    if sum_w == 0.0 {
        debug!(x = pick.x, y = pick.y, "Dark centroid window, keeping rough pick");
        return StarPosition::from(pick);
    }

    StarPosition::new(sum_x / sum_w, sum_y / sum_w)
}

/// Refine a rough pick against a frame's luminance.
pub fn refine_centroid_frame(frame: &Frame, pick: RoughPick, half_size: usize) -> StarPosition {
    refine_centroid(&frame.luminance(), pick, half_size)
}

fn clamp_index(value: i64, len: usize) -> usize {
    value.clamp(0, len as i64) as usize
}
