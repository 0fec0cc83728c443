//! Error types for shapematch.

use thiserror::Error;

/// Result alias for shapematch operations.
pub type ShapeMatchResult<T> = std::result::Result<T, ShapeMatchError>;

/// Errors that can occur while building, persisting, or matching figures.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeMatchError {
    /// The outline has too few points to describe a closed boundary.
    #[error("outline has {len} points, need at least 3")]
    OutlineTooShort {
        /// Number of points supplied.
        len: usize,
    },
    /// The outline encloses zero area, so its centroid is undefined.
    #[error("outline encloses zero area, centroid is undefined")]
    DegenerateOutline,
    /// Every boundary point coincides with the centroid.
    #[error("flat signature: all boundary points coincide with the centroid")]
    FlatSignature,
    /// A supplied signature does not have the canonical length.
    #[error("signature has {len} values, expected {expected}")]
    SignatureLength {
        /// Number of values supplied.
        len: usize,
        /// Canonical signature length.
        expected: usize,
    },
    /// Matching was attempted against an empty candidate set.
    #[error("no candidates to match against")]
    EmptyCandidates,
    /// More labeled figures were requested than the catalogue provides.
    #[error("requested {requested} labeled figures, catalogue holds {available}")]
    CatalogueExhausted {
        /// Number of figures requested.
        requested: usize,
        /// Number of labels in the catalogue.
        available: usize,
    },
    /// A corpus field that must be numeric failed to parse.
    #[error("corpus line {line}, field {field}: invalid number {value:?}")]
    CorpusParse {
        /// One-based line number in the corpus file.
        line: usize,
        /// Zero-based field index within the line.
        field: usize,
        /// The offending field text.
        value: String,
    },
    /// The corpus backing file could not be read or written.
    #[error("corpus file {path:?}: {reason}")]
    CorpusIo {
        /// Path of the backing file.
        path: String,
        /// Underlying I/O error description.
        reason: String,
    },
    /// A raster image could not be loaded or decoded.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo {
        /// Underlying decode error description.
        reason: String,
    },
}
