//! The figure entity: an outline, its centroid, a label, and a cached
//! signature.
//!
//! Figures are immutable value objects. The signature is a memoized pure
//! function of the outline and centroid, held in an explicit once-computed
//! cell so figures stay freely shareable for reads.

use std::sync::OnceLock;

use crate::descriptor::{self, Signature, SIGNATURE_LEN};
use crate::geometry::{outline_centroid, Outline, Point};
use crate::util::ShapeMatchResult;

/// Radius, in outline units, at which a signature value of `1.0` is placed
/// when an outline is rebuilt from a stored signature.
const RECONSTRUCTION_RADIUS: f64 = 100.0;

/// One recognized or candidate figure.
#[derive(Clone, Debug)]
pub struct Figure {
    outline: Outline,
    centroid: Point,
    label: String,
    signature: OnceLock<Signature>,
}

impl Figure {
    /// Builds a figure from a segmented outline.
    ///
    /// The centroid is derived from the outline's area moments; the signature
    /// is computed lazily on first access. Fails on outlines with fewer than
    /// three points or zero enclosed area.
    pub fn from_outline(outline: Outline, label: impl Into<String>) -> ShapeMatchResult<Self> {
        let centroid = outline_centroid(&outline)?;
        Ok(Self {
            outline,
            centroid,
            label: label.into(),
            signature: OnceLock::new(),
        })
    }

    /// Rebuilds a figure from a stored signature, without the original
    /// outline.
    ///
    /// One outline point is placed per signature element, at angularly-even
    /// intervals around the centroid and radius proportional to the element
    /// value. The supplied signature is cached and always wins over
    /// recomputation.
    pub fn from_signature(signature: Signature, label: impl Into<String>, centroid: Point) -> Self {
        let step = std::f64::consts::TAU / SIGNATURE_LEN as f64;
        let outline = signature
            .values()
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let angle = step * i as f64;
                let radius = RECONSTRUCTION_RADIUS * value;
                Point::new(
                    centroid.x + (radius * angle.cos()) as i32,
                    centroid.y + (radius * angle.sin()) as i32,
                )
            })
            .collect();
        Self {
            outline,
            centroid,
            label: label.into(),
            signature: OnceLock::from(signature),
        }
    }

    /// The boundary outline in traversal order.
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// The area-weighted centroid.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// The human-readable name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The figure's signature, computing and caching it on first access.
    pub fn signature(&self) -> ShapeMatchResult<&Signature> {
        if let Some(signature) = self.signature.get() {
            return Ok(signature);
        }
        let computed = descriptor::compute(&self.outline, self.centroid)?;
        Ok(self.signature.get_or_init(|| computed))
    }
}
