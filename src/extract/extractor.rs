use super::options::ExtractOptions;
use crate::types::BoundingBox;
use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, Contour};
use imageproc::contrast::otsu_level;
use imageproc::map::map_colors;
use std::time::Instant;

/// Output of the extraction stage.
#[derive(Clone, Debug)]
pub struct Extraction {
    /// Inverted Otsu binarization of the full frame (glyphs = 255).
    pub binary: GrayImage,
    /// Boxes that passed the shape gate, in contour discovery order.
    pub candidates: Vec<BoundingBox>,
    /// Number of contours traced before filtering.
    pub contours_total: usize,
    pub elapsed_ms: f64,
}

/// Global Otsu threshold followed by inversion: pixels above the level become
/// background (0), everything else foreground (255).
pub fn binarize_inverted(gray: &GrayImage) -> GrayImage {
    let level = otsu_level(gray);
    map_colors(gray, |Luma([v])| {
        if v > level {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Bounding boxes of every traced contour, holes included.
pub fn contour_boxes(binary: &GrayImage) -> Vec<BoundingBox> {
    find_contours::<i32>(binary)
        .iter()
        .filter_map(contour_bounds)
        .collect()
}

fn contour_bounds(contour: &Contour<i32>) -> Option<BoundingBox> {
    let first = contour.points.first()?;
    let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
    for p in &contour.points[1..] {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    Some(BoundingBox::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Shape gate: inclusive aspect range, exclusive area band.
#[inline]
pub fn is_character_shaped(b: &BoundingBox, options: &ExtractOptions) -> bool {
    let aspect = b.aspect_ratio();
    let area = b.area();
    (options.min_aspect..=options.max_aspect).contains(&aspect)
        && area > options.min_area
        && area < options.max_area
}

/// Keep the boxes passing [`is_character_shaped`], preserving order.
pub fn filter_candidates(boxes: &[BoundingBox], options: &ExtractOptions) -> Vec<BoundingBox> {
    boxes
        .iter()
        .copied()
        .filter(|b| is_character_shaped(b, options))
        .collect()
}

/// Run binarization, contour tracing and the shape gate on one frame.
pub fn extract_candidates(gray: &GrayImage, options: &ExtractOptions) -> Extraction {
    let start = Instant::now();
    let binary = binarize_inverted(gray);
    let boxes = contour_boxes(&binary);
    let candidates = filter_candidates(&boxes, options);
    Extraction {
        binary,
        candidates,
        contours_total: boxes.len(),
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}
