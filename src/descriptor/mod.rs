//! Fixed-length outline signatures.
//!
//! A signature is the sequence of centroid-to-boundary distances taken along
//! the outline's traversal order, normalized so the largest distance is `1.0`
//! and resampled to [`SIGNATURE_LEN`] elements. Fixing the length makes
//! signatures from outlines of different point counts directly comparable
//! under a fixed-dimension metric.
//!
//! The walk follows the traversal order as produced by segmentation, so the
//! signature depends on where the boundary trace started and in which
//! direction it ran.

use crate::geometry::Point;
use crate::util::{ShapeMatchError, ShapeMatchResult};

mod resample;

use resample::resample_cubic;

/// Canonical signature length.
pub const SIGNATURE_LEN: usize = 180;

/// A fixed-length normalized sequence of centroid-to-boundary distances.
///
/// Values lie in `[0, 1]` and the maximum element is exactly `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    values: Vec<f64>,
}

impl Signature {
    /// Wraps raw values, validating the canonical length.
    pub fn from_values(values: Vec<f64>) -> ShapeMatchResult<Self> {
        if values.len() != SIGNATURE_LEN {
            return Err(ShapeMatchError::SignatureLength {
                len: values.len(),
                expected: SIGNATURE_LEN,
            });
        }
        Ok(Self { values })
    }

    /// The signature values in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Euclidean (L2) distance to another signature.
    pub fn distance(&self, other: &Signature) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Computes the signature of an outline around its centroid.
///
/// Distances are taken point by point in traversal order, normalized by their
/// maximum, and resampled to [`SIGNATURE_LEN`] elements with cubic
/// interpolation. Cubic overshoot is resolved by rescaling the resampled
/// sequence by its own maximum and clamping below at zero, so the returned
/// values satisfy the documented range invariant exactly.
pub fn compute(outline: &[Point], centroid: Point) -> ShapeMatchResult<Signature> {
    if outline.len() < 3 {
        return Err(ShapeMatchError::OutlineTooShort { len: outline.len() });
    }

    let mut distances: Vec<f64> = outline
        .iter()
        .map(|point| point.distance_to(centroid))
        .collect();

    let max = distances.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return Err(ShapeMatchError::FlatSignature);
    }
    for value in &mut distances {
        *value /= max;
    }

    let resampled = resample_cubic(&distances, SIGNATURE_LEN);
    let peak = resampled.iter().copied().fold(0.0f64, f64::max);
    if peak <= 0.0 {
        return Err(ShapeMatchError::FlatSignature);
    }
    let values = resampled
        .into_iter()
        .map(|value| (value / peak).clamp(0.0, 1.0))
        .collect();

    Signature::from_values(values)
}
