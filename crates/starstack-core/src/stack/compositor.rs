use ndarray::{Array3, Zip};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StarstackError};
use crate::frame::{max_sample_value, Frame};

/// How aligned frames are combined per pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineMethod {
    /// Average of all included frames.
    #[default]
    Mean,
    /// Brightest sample per pixel.
    Max,
    /// Darkest sample per pixel.
    Min,
}

impl std::fmt::Display for CombineMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mean => write!(f, "Mean"),
            Self::Max => write!(f, "Max"),
            Self::Min => write!(f, "Min"),
        }
    }
}

/// Streaming accumulator: frames are folded in one at a time and dropped.
///
/// Values stay unclipped f64 until [`Compositor::finalize`].
#[derive(Debug)]
pub struct Compositor {
    accumulator: Array3<f64>,
    count: usize,
    bit_depth: u8,
    method: CombineMethod,
}

impl Compositor {
    /// New empty accumulator for frames of shape `(height, width, channels)`.
    pub fn new(shape: (usize, usize, usize), bit_depth: u8, method: CombineMethod) -> Self {
        let initial = match method {
            CombineMethod::Mean => 0.0,
            CombineMethod::Max => f64::NEG_INFINITY,
            CombineMethod::Min => f64::INFINITY,
        };
        Self {
            accumulator: Array3::from_elem(shape, initial),
            count: 0,
            bit_depth,
            method,
        }
    }

    /// Accumulator shaped like `reference`.
    pub fn for_reference(reference: &Frame, method: CombineMethod) -> Self {
        Self::new(reference.dim(), reference.bit_depth, method)
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.accumulator.dim()
    }

    /// Number of frames folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn method(&self) -> CombineMethod {
        self.method
    }

    /// Fold one frame into the accumulator.
    ///
    /// A frame of the wrong shape is rejected and leaves the state untouched.
    pub fn include(&mut self, frame: &Frame) -> Result<()> {
        let expected = self.shape();
        let actual = frame.dim();
        if expected != actual {
            return Err(StarstackError::ShapeMismatch { expected, actual });
        }

        let acc = Zip::from(&mut self.accumulator).and(&frame.data);
        match self.method {
            CombineMethod::Mean => acc.for_each(|a, &v| *a += v as f64),
            CombineMethod::Max => acc.for_each(|a, &v| *a = a.max(v as f64)),
            CombineMethod::Min => acc.for_each(|a, &v| *a = a.min(v as f64)),
        }
        self.count += 1;
        debug!(count = self.count, "Frame accumulated");
        Ok(())
    }

    /// Combined frame, clipped to `[0, max]` and rounded to the native bit depth.
    pub fn finalize(&self) -> Result<Frame> {
        if self.count == 0 {
            return Err(StarstackError::EmptyComposite);
        }

        let n = self.count as f64;
        let max = max_sample_value(self.bit_depth) as f64;
        let method = self.method;
        let data = self.accumulator.mapv(|v| {
            let value = match method {
                CombineMethod::Mean => v / n,
                CombineMethod::Max | CombineMethod::Min => v,
            };
            value.clamp(0.0, max).round() as f32
        });

        Ok(Frame::new(data, self.bit_depth))
    }
}

/// Mean of a slice of equally-shaped frames.
pub fn mean_stack(frames: &[Frame]) -> Result<Frame> {
    let first = frames.first().ok_or(StarstackError::EmptyComposite)?;
    let mut compositor = Compositor::for_reference(first, CombineMethod::Mean);
    for frame in frames {
        compositor.include(frame)?;
    }
    compositor.finalize()
}
