use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BORDER_VALUE;
use crate::error::{Result, StarstackError};
use crate::frame::Frame;

use super::transform::SimilarityTransform;

/// How warped pixels that map outside the source frame are filled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BorderPolicy {
    /// Fill with a constant sample value.
    Constant(f32),
    /// Repeat the nearest edge pixel.
    Replicate,
}

impl Default for BorderPolicy {
    fn default() -> Self {
        Self::Constant(DEFAULT_BORDER_VALUE)
    }
}

impl std::fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "Constant ({})", v),
            Self::Replicate => write!(f, "Replicate"),
        }
    }
}

/// Resample `frame` into the reference coordinate system.
///
/// `transform` maps frame coordinates onto reference coordinates; each output
/// pixel `(row, col)` of shape `(height, width)` is sampled bilinearly at the
/// inverse-mapped source position. All channels share the same weights.
pub fn warp_frame(
    frame: &Frame,
    transform: &SimilarityTransform,
    height: usize,
    width: usize,
    border: BorderPolicy,
) -> Result<Frame> {
    let inverse = transform
        .inverse()
        .ok_or(StarstackError::DegenerateTransform)?;
    let channels = frame.channels();
    let source = frame.data.view();
    let mut result = Array3::<f32>::zeros((height, width, channels));

    for row in 0..height {
        for col in 0..width {
            let (src_x, src_y) = inverse.apply(col as f64, row as f64);
            for ch in 0..channels {
                result[[row, col, ch]] = bilinear_sample(&source, src_y, src_x, ch, border);
            }
        }
    }

    Ok(Frame::new(result, frame.bit_depth).with_metadata(frame.metadata.clone()))
}

/// Sample channel `ch` of `data` at fractional position `(y, x)`.
pub fn bilinear_sample(
    data: &ArrayView3<f32>,
    y: f64,
    x: f64,
    ch: usize,
    border: BorderPolicy,
) -> f32 {
    let (h, w, _) = data.dim();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let sample = |r: i64, c: i64| -> f32 {
        if r >= 0 && r < h as i64 && c >= 0 && c < w as i64 {
            return data[[r as usize, c as usize, ch]];
        }
        match border {
            BorderPolicy::Constant(value) => value,
            BorderPolicy::Replicate => {
                let r = r.clamp(0, h as i64 - 1) as usize;
                let c = c.clamp(0, w as i64 - 1) as usize;
                data[[r, c, ch]]
            }
        }
    };

    // Exact grid hits skip the neighbours so border fill cannot leak in.
    if fx == 0.0 && fy == 0.0 {
        return sample(y0, x0);
    }

    let v00 = sample(y0, x0);
    let v10 = sample(y0, x1);
    let v01 = sample(y1, x0);
    let v11 = sample(y1, x1);

    v00 * (1.0 - fx) * (1.0 - fy)
        + v10 * fx * (1.0 - fy)
        + v01 * (1.0 - fx) * fy
        + v11 * fx * fy
}
