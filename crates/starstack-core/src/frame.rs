use ndarray::{Array2, Array3, Axis};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single multi-channel image frame.
/// Pixel values are f32 in native sample units, i.e. [0.0, max_value()].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, shape = (height, width, channels)
    pub data: Array3<f32>,
    /// Bit depth of the source samples (8 or 16)
    pub bit_depth: u8,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array3<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            bit_depth,
            metadata: FrameMetadata::default(),
        }
    }

    /// Build a single-channel frame from a 2D array.
    pub fn from_mono(data: Array2<f32>, bit_depth: u8) -> Self {
        Self::new(data.insert_axis(Axis(2)), bit_depth)
    }

    pub fn with_metadata(mut self, metadata: FrameMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// `(height, width, channels)`.
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Largest representable sample value at this frame's bit depth.
    pub fn max_value(&self) -> f32 {
        max_sample_value(self.bit_depth)
    }

    /// Per-pixel mean over all channels.
    pub fn luminance(&self) -> Array2<f32> {
        self.data
            .mean_axis(Axis(2))
            .unwrap_or_else(|| Array2::zeros((self.height(), self.width())))
    }
}

/// Largest sample value representable with `bit_depth` bits.
pub fn max_sample_value(bit_depth: u8) -> f32 {
    ((1u32 << bit_depth.min(16)) - 1) as f32
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    /// Position of the frame in the sorted input sequence.
    pub frame_index: usize,
    pub source: Option<PathBuf>,
}

/// Integer pixel coordinates supplied by a star picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoughPick {
    pub x: i64,
    pub y: i64,
}

impl RoughPick {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Subpixel star position produced by centroid refinement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StarPosition {
    pub x: f64,
    pub y: f64,
}

impl StarPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &StarPosition) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<RoughPick> for StarPosition {
    fn from(pick: RoughPick) -> Self {
        Self::new(pick.x as f64, pick.y as f64)
    }
}

/// The two refined stars picked on one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarPair {
    pub first: StarPosition,
    pub second: StarPosition,
}

impl StarPair {
    pub fn new(first: StarPosition, second: StarPosition) -> Self {
        Self { first, second }
    }

    pub fn separation(&self) -> f64 {
        self.first.distance(&self.second)
    }
}
