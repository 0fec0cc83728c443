//! Figure providers: sources that yield sets of labeled figures.
//!
//! [`OutlineFigureProvider`] labels externally-segmented outlines by their
//! position in reading order; [`CorpusFigureProvider`] rehydrates figures from
//! a persisted corpus file and can persist them back.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::corpus;
use crate::figure::Figure;
use crate::geometry::{bounding_box, BoundingBox, Outline};
use crate::util::{ShapeMatchError, ShapeMatchResult};

/// Fixed catalogue of shape names, assigned to outlines by reading-order
/// position.
pub const SHAPE_CATALOGUE: [&str; 24] = [
    "circle",
    "ellipse",
    "oval",
    "square",
    "rectangle",
    "trapezium",
    "rhombus",
    "kite",
    "triangle",
    "parallelogram",
    "right triangle",
    "scalene triangle",
    "pentagon",
    "hexagon",
    "heptagon",
    "octagon",
    "nonagon",
    "decagon",
    "star",
    "heart",
    "crescent",
    "cross",
    "pie",
    "arrow",
];

/// Bounding-box tops closer than this belong to the same reading-order row.
pub const ROW_TOLERANCE: i32 = 10;

/// A source of labeled figures.
pub trait FigureProvider {
    /// Produces up to `quantity` figures from the given outlines.
    ///
    /// Corpus-backed sources ignore both arguments and return every stored
    /// figure.
    fn figures(&self, outlines: &[Outline], quantity: usize) -> ShapeMatchResult<Vec<Figure>>;
}

/// Labels pre-segmented outlines from a fixed name catalogue.
///
/// Keeps the requested number of outlines with the most boundary points,
/// orders them in reading order, and assigns catalogue names by position.
#[derive(Clone, Debug)]
pub struct OutlineFigureProvider {
    catalogue: Vec<String>,
}

impl Default for OutlineFigureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineFigureProvider {
    /// Creates a provider over the default shape catalogue.
    pub fn new() -> Self {
        Self {
            catalogue: SHAPE_CATALOGUE.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Creates a provider over a custom label catalogue.
    pub fn with_catalogue(catalogue: Vec<String>) -> Self {
        Self { catalogue }
    }
}

impl FigureProvider for OutlineFigureProvider {
    fn figures(&self, outlines: &[Outline], quantity: usize) -> ShapeMatchResult<Vec<Figure>> {
        if quantity > self.catalogue.len() {
            return Err(ShapeMatchError::CatalogueExhausted {
                requested: quantity,
                available: self.catalogue.len(),
            });
        }

        let mut kept: Vec<Outline> = outlines.to_vec();
        kept.sort_by(|a, b| b.len().cmp(&a.len()));
        kept.truncate(quantity);

        let ordered = sort_reading_order(kept)?;
        ordered
            .into_iter()
            .zip(&self.catalogue)
            .map(|(outline, label)| Figure::from_outline(outline, label.as_str()))
            .collect()
    }
}

/// Sorts outlines into reading order: rows top-to-bottom, outlines within a
/// row left-to-right by bounding-box edges.
///
/// Rows are bucketed against the first outline of each row; a top edge within
/// [`ROW_TOLERANCE`] of the anchor joins the row, anything further starts the
/// next one.
fn sort_reading_order(outlines: Vec<Outline>) -> ShapeMatchResult<Vec<Outline>> {
    let mut keyed: Vec<(BoundingBox, Outline)> = outlines
        .into_iter()
        .map(|outline| bounding_box(&outline).map(|bbox| (bbox, outline)))
        .collect::<ShapeMatchResult<_>>()?;
    keyed.sort_by_key(|(bbox, _)| bbox.top());

    let mut row_start = 0;
    while row_start < keyed.len() {
        let anchor = keyed[row_start].0.top();
        let mut row_end = row_start + 1;
        while row_end < keyed.len() && (keyed[row_end].0.top() - anchor).abs() < ROW_TOLERANCE {
            row_end += 1;
        }
        keyed[row_start..row_end].sort_by_key(|(bbox, _)| bbox.left());
        row_start = row_end;
    }

    Ok(keyed.into_iter().map(|(_, outline)| outline).collect())
}

/// Rehydrates figures from a persisted corpus and saves figures back to it.
#[derive(Clone, Debug)]
pub struct CorpusFigureProvider {
    path: PathBuf,
}

impl CorpusFigureProvider {
    /// Opens a provider over the given corpus path.
    ///
    /// A missing file is treated as first use and created empty, so later
    /// reads and writes need no existence check.
    pub fn new(path: impl Into<PathBuf>) -> ShapeMatchResult<Self> {
        let path = path.into();
        if !path.exists() {
            File::create(&path).map_err(|err| ShapeMatchError::CorpusIo {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        }
        Ok(Self { path })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every valid record from the backing file.
    pub fn load_figures(&self) -> ShapeMatchResult<Vec<Figure>> {
        corpus::read_figures(&self.path)
    }

    /// Serializes figures to the backing file, overwriting prior contents.
    pub fn save_figures(&self, figures: &[Figure]) -> ShapeMatchResult<()> {
        corpus::write_figures(&self.path, figures)
    }
}

impl FigureProvider for CorpusFigureProvider {
    fn figures(&self, _outlines: &[Outline], _quantity: usize) -> ShapeMatchResult<Vec<Figure>> {
        self.load_figures()
    }
}
