pub mod centroid;
pub mod transform;
pub mod warp;

pub use centroid::{refine_centroid, refine_centroid_frame};
pub use transform::SimilarityTransform;
pub use warp::{bilinear_sample, warp_frame, BorderPolicy};
