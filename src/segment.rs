//! Raster segmentation: grayscale image to boundary outlines.
//!
//! Available with the `image-io` feature. The pipeline thresholds the image
//! (binary-inverted, so dark figures on a light background become
//! foreground), opens it morphologically to drop speckle, and traces the
//! outer contours of what remains.

use std::path::Path;

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::distance_transform::Norm;
use imageproc::morphology::open;

use crate::geometry::{Outline, Point};
use crate::trace::{trace_event, trace_span};
use crate::util::{ShapeMatchError, ShapeMatchResult};

/// Gray levels above this are background.
pub const THRESHOLD_VALUE: u8 = 250;

/// Morphological opening radius, in pixels.
const MORPH_RADIUS: u8 = 3;

/// Loads an image from disk and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> ShapeMatchResult<GrayImage> {
    let img = image::open(path).map_err(|err| ShapeMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    Ok(img.to_luma8())
}

/// Segments a grayscale image into at most `max_count` outlines.
///
/// Returns the outer boundaries with the most points first, truncated to
/// `max_count`. Outlines keep the traversal order produced by the contour
/// tracer.
pub fn segment(image: &GrayImage, max_count: usize) -> Vec<Outline> {
    let _span = trace_span!("segment", max_count = max_count).entered();

    let binary = threshold(image, THRESHOLD_VALUE, ThresholdType::BinaryInverted);
    let cleaned = open(&binary, Norm::LInf, MORPH_RADIUS);

    let mut outlines: Vec<Outline> = find_contours::<i32>(&cleaned)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer)
        .map(|contour| {
            contour
                .points
                .into_iter()
                .map(|p| Point::new(p.x, p.y))
                .collect()
        })
        .collect();

    outlines.sort_by(|a, b| b.len().cmp(&a.len()));
    outlines.truncate(max_count);
    trace_event!("segmented", outlines = outlines.len());
    outlines
}

#[cfg(test)]
mod tests {
    use super::segment;
    use image::{GrayImage, Luma};

    fn canvas_with_blocks(blocks: &[(u32, u32, u32)]) -> GrayImage {
        let mut img = GrayImage::from_pixel(120, 120, Luma([255u8]));
        for &(x0, y0, side) in blocks {
            for y in y0..y0 + side {
                for x in x0..x0 + side {
                    img.put_pixel(x, y, Luma([0u8]));
                }
            }
        }
        img
    }

    #[test]
    fn finds_each_dark_block() {
        let img = canvas_with_blocks(&[(10, 10, 30), (70, 60, 20)]);
        let outlines = segment(&img, 10);
        assert_eq!(outlines.len(), 2);
        // Largest boundary first.
        assert!(outlines[0].len() > outlines[1].len());
    }

    #[test]
    fn speckle_is_opened_away() {
        let img = canvas_with_blocks(&[(10, 10, 40), (90, 90, 2)]);
        let outlines = segment(&img, 10);
        assert_eq!(outlines.len(), 1);
    }

    #[test]
    fn truncates_to_requested_count() {
        let img = canvas_with_blocks(&[(5, 5, 30), (60, 5, 24), (5, 60, 18), (60, 60, 12)]);
        let outlines = segment(&img, 2);
        assert_eq!(outlines.len(), 2);
        assert!(outlines[0].len() >= outlines[1].len());
    }
}
