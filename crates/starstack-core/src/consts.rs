/// Default half-size (in pixels) of the square window used for centroid refinement.
pub const DEFAULT_CENTROID_HALF_SIZE: usize = 30;

/// Default fill value for warped pixels that map outside the source frame.
pub const DEFAULT_BORDER_VALUE: f32 = 0.0;

/// Minimum separation (in pixels) between the two stars of a pair.
/// Closer pairs cannot define a rotation or scale.
pub const MIN_STAR_SEPARATION: f64 = 1e-6;

/// Tolerance used when checking a transform against the identity.
pub const IDENTITY_TOLERANCE: f64 = 1e-12;

/// File extensions (lowercase) accepted as input frames.
pub const FRAME_EXTENSIONS: &[&str] = &["tif", "tiff", "png"];

/// Current on-disk format version of pick sessions.
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Maximum number of channels a frame may carry (gray, gray+alpha, RGB, RGBA).
pub const MAX_CHANNELS: usize = 4;
