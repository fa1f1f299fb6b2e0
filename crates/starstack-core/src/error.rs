use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarstackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No eligible frames found in {}", dir.display())]
    NoFrames { dir: PathBuf },

    #[error("Reference star selection failed: {0}")]
    ReferenceSelection(String),

    #[error("Star pair has zero separation, transform is undefined")]
    DegenerateTransform,

    #[error("Frame shape {actual:?} does not match reference shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    #[error("No frames were composited")]
    EmptyComposite,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    #[error("Unreadable pick session: {0}")]
    SessionDecode(#[from] toml::de::Error),

    #[error("Failed to encode pick session: {0}")]
    SessionEncode(#[from] toml::ser::Error),

    #[error("No pick session has been saved")]
    SessionMissing,

    #[error("Pick session was already loaded for this run")]
    SessionConsumed,

    #[error("Unsupported pick session version: {0}")]
    UnsupportedSessionVersion(u32),
}

pub type Result<T> = std::result::Result<T, StarstackError>;
