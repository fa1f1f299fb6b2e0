use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::align::BorderPolicy;
use crate::consts::DEFAULT_CENTROID_HALF_SIZE;
use crate::stack::CombineMethod;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory of input frames.
    pub input: PathBuf,
    /// Composite output file.
    pub output: PathBuf,
    /// Where the pick session is stored between phases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<PathBuf>,
    #[serde(default)]
    pub centroid: CentroidConfig,
    #[serde(default)]
    pub warp: WarpConfig,
    #[serde(default)]
    pub stacking: StackingConfig,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            session: None,
            centroid: CentroidConfig::default(),
            warp: WarpConfig::default(),
            stacking: StackingConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CentroidConfig {
    /// Half-size (pixels) of the window around each pick.
    pub half_size: usize,
}

impl Default for CentroidConfig {
    fn default() -> Self {
        Self {
            half_size: DEFAULT_CENTROID_HALF_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WarpConfig {
    /// Fill rule for pixels that map outside the source frame.
    pub border: BorderPolicy,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StackingConfig {
    pub method: CombineMethod,
}
