//! Integer 2-D geometry: points, outlines, bounding boxes, area moments.
//!
//! Outlines are closed polygonal boundaries given as ordered point sequences;
//! the last point is implicitly connected back to the first.

use crate::util::{ShapeMatchError, ShapeMatchResult};

/// A 2-D point with integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate (column).
    pub x: i32,
    /// Vertical coordinate (row).
    pub y: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// An ordered sequence of points describing a closed polygonal boundary.
pub type Outline = Vec<Point>;

/// Axis-aligned bounding box of an outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest x over the outline.
    pub min_x: i32,
    /// Smallest y over the outline (top edge).
    pub min_y: i32,
    /// Largest x over the outline.
    pub max_x: i32,
    /// Largest y over the outline.
    pub max_y: i32,
}

impl BoundingBox {
    /// Top edge of the box.
    pub fn top(&self) -> i32 {
        self.min_y
    }

    /// Left edge of the box.
    pub fn left(&self) -> i32 {
        self.min_x
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Computes the bounding box of an outline.
///
/// Fails with [`ShapeMatchError::OutlineTooShort`] on an empty outline.
pub fn bounding_box(outline: &[Point]) -> ShapeMatchResult<BoundingBox> {
    let first = outline
        .first()
        .ok_or(ShapeMatchError::OutlineTooShort { len: 0 })?;
    let mut bbox = BoundingBox {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for point in &outline[1..] {
        bbox.min_x = bbox.min_x.min(point.x);
        bbox.min_y = bbox.min_y.min(point.y);
        bbox.max_x = bbox.max_x.max(point.x);
        bbox.max_y = bbox.max_y.max(point.y);
    }
    Ok(bbox)
}

/// Computes the area-weighted centroid of a closed outline from its
/// first-order polygon moments (Green's theorem over the boundary).
///
/// Coordinates are truncated toward zero. Fails with
/// [`ShapeMatchError::DegenerateOutline`] when the enclosed area is zero.
pub fn outline_centroid(outline: &[Point]) -> ShapeMatchResult<Point> {
    if outline.len() < 3 {
        return Err(ShapeMatchError::OutlineTooShort { len: outline.len() });
    }

    let mut m00 = 0.0f64;
    let mut m10 = 0.0f64;
    let mut m01 = 0.0f64;
    for (i, p) in outline.iter().enumerate() {
        let q = outline[(i + 1) % outline.len()];
        let cross = f64::from(p.x) * f64::from(q.y) - f64::from(q.x) * f64::from(p.y);
        m00 += cross;
        m10 += (f64::from(p.x) + f64::from(q.x)) * cross;
        m01 += (f64::from(p.y) + f64::from(q.y)) * cross;
    }
    m00 *= 0.5;
    m10 /= 6.0;
    m01 /= 6.0;

    // The sign of the winding cancels in the ratio; only zero area is fatal.
    if m00.abs() < f64::EPSILON {
        return Err(ShapeMatchError::DegenerateOutline);
    }

    Ok(Point::new((m10 / m00) as i32, (m01 / m00) as i32))
}
