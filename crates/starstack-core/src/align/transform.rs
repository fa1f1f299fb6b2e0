//! Two-star similarity transform estimation.
//!
//! Points are handled as complex numbers `z = x + iy`. A similarity transform
//! (rotation, uniform scale, translation) is then `z' = a z + t` with complex
//! `a` and `t`, and two correspondences determine it exactly.

use num_complex::Complex64;

use crate::consts::{IDENTITY_TOLERANCE, MIN_STAR_SEPARATION};
use crate::error::{Result, StarstackError};
use crate::frame::{StarPair, StarPosition};

/// 4-DOF similarity transform: `x' = a x - b y + tx`, `y' = b x + a y + ty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityTransform {
    /// `a + ib = scale * e^(i * rotation)`
    linear: Complex64,
    translation: Complex64,
}

impl SimilarityTransform {
    pub fn identity() -> Self {
        Self {
            linear: Complex64::new(1.0, 0.0),
            translation: Complex64::new(0.0, 0.0),
        }
    }

    /// Build from scale, rotation (radians, counter-clockwise in x/y) and translation.
    pub fn from_parts(scale: f64, rotation: f64, tx: f64, ty: f64) -> Self {
        Self {
            linear: Complex64::from_polar(scale, rotation),
            translation: Complex64::new(tx, ty),
        }
    }

    /// Estimate the transform mapping `target` star positions onto `reference`.
    ///
    /// Fails with [`StarstackError::DegenerateTransform`] when either pair has
    /// (near) zero separation.
    pub fn estimate(reference: &StarPair, target: &StarPair) -> Result<Self> {
        if target.separation() < MIN_STAR_SEPARATION || reference.separation() < MIN_STAR_SEPARATION
        {
            return Err(StarstackError::DegenerateTransform);
        }

        let p1 = to_complex(&reference.first);
        let p2 = to_complex(&reference.second);
        let q1 = to_complex(&target.first);
        let q2 = to_complex(&target.second);

        let linear = (p2 - p1) / (q2 - q1);
        let translation = p1 - linear * q1;

        Ok(Self {
            linear,
            translation,
        })
    }

    pub fn scale(&self) -> f64 {
        self.linear.norm()
    }

    /// Rotation angle in radians.
    pub fn rotation(&self) -> f64 {
        self.linear.arg()
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.translation.re, self.translation.im)
    }

    /// The 2x3 matrix `[[a, -b, tx], [b, a, ty]]`.
    pub fn matrix(&self) -> [[f64; 3]; 2] {
        let a = self.linear.re;
        let b = self.linear.im;
        [
            [a, -b, self.translation.re],
            [b, a, self.translation.im],
        ]
    }

    /// Map a point `(x, y)`.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let z = self.linear * Complex64::new(x, y) + self.translation;
        (z.re, z.im)
    }

    /// Inverse transform. `None` if the scale is zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.linear.norm_sqr() == 0.0 {
            return None;
        }
        let linear = self.linear.inv();
        Some(Self {
            linear,
            translation: -(linear * self.translation),
        })
    }

    pub fn is_identity(&self) -> bool {
        (self.linear.re - 1.0).abs() <= IDENTITY_TOLERANCE
            && self.linear.im.abs() <= IDENTITY_TOLERANCE
            && self.translation.norm() <= IDENTITY_TOLERANCE
    }
}

impl Default for SimilarityTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for SimilarityTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (tx, ty) = self.translation();
        write!(
            f,
            "scale={:.5} rotation={:.4}\u{b0} shift=({:.2}, {:.2})",
            self.scale(),
            self.rotation().to_degrees(),
            tx,
            ty
        )
    }
}

fn to_complex(p: &StarPosition) -> Complex64 {
    Complex64::new(p.x, p.y)
}
