//! ShapeMatch identifies 2-D shapes by their boundary signature.
//!
//! Every closed outline is reduced to a fixed-length normalized sequence of
//! centroid-to-boundary distances; an unknown shape is named by a linear
//! nearest-neighbor scan against a corpus of labeled signatures. The corpus
//! persists to a flat comma-delimited file, so a reference set can be rebuilt
//! without the original raster. Raster segmentation is available behind the
//! `image-io` feature.

pub mod corpus;
pub mod descriptor;
pub mod figure;
pub mod geometry;
pub mod matcher;
pub mod provider;
#[cfg(feature = "image-io")]
pub mod segment;
mod trace;
pub mod util;

pub use descriptor::{Signature, SIGNATURE_LEN};
pub use figure::Figure;
pub use geometry::{bounding_box, outline_centroid, BoundingBox, Outline, Point};
pub use matcher::{find_closest, ClosestMatch};
pub use provider::{
    CorpusFigureProvider, FigureProvider, OutlineFigureProvider, ROW_TOLERANCE, SHAPE_CATALOGUE,
};
pub use util::{ShapeMatchError, ShapeMatchResult};
