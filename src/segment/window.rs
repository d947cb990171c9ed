use crate::types::BoundingBox;
use serde::Serialize;

/// Clamped crop rectangle `[x0, x1) x [y0, y1)` in image coordinates.
///
/// Always satisfies `0 <= x0 <= x1 <= image_width` and likewise for `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CropWindow {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CropWindow {
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Map an image-space box into window-local coordinates.
    #[inline]
    pub fn to_local(&self, b: &BoundingBox) -> BoundingBox {
        b.translated(-(self.x0 as i32), -(self.y0 as i32))
    }
}

/// Smallest box containing every member, or `None` for an empty group.
pub fn envelope(group: &[BoundingBox]) -> Option<BoundingBox> {
    let first = group.first()?;
    let (mut x0, mut y0) = (first.x, first.y);
    let (mut x1, mut y1) = (first.right_edge(), first.bottom_edge());
    for b in &group[1..] {
        x0 = x0.min(b.x);
        y0 = y0.min(b.y);
        x1 = x1.max(b.right_edge());
        y1 = y1.max(b.bottom_edge());
    }
    Some(BoundingBox::new(x0, y0, x1 - x0, y1 - y0))
}

/// Grow `envelope` by `padding` on each side and clamp it to the image.
pub fn padded_window(envelope: &BoundingBox, padding: i32, width: u32, height: u32) -> CropWindow {
    let (x0, x1) = clamp_span(envelope.x, envelope.right_edge(), padding, width);
    let (y0, y1) = clamp_span(envelope.y, envelope.bottom_edge(), padding, height);
    CropWindow { x0, y0, x1, y1 }
}

fn clamp_span(start: i32, end: i32, padding: i32, limit: u32) -> (u32, u32) {
    let limit = i64::from(limit);
    let lo = (i64::from(start) - i64::from(padding)).clamp(0, limit);
    let hi = (i64::from(end) + i64::from(padding)).clamp(lo, limit);
    (lo as u32, hi as u32)
}

/// Intersect a box with a `width x height` raster as `(x, y, w, h)`.
pub(crate) fn clip_to_raster(b: &BoundingBox, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let (x0, x1) = clamp_span(b.x, b.right_edge(), 0, width);
    let (y0, y1) = clamp_span(b.y, b.bottom_edge(), 0, height);
    (x0, y0, x1 - x0, y1 - y0)
}
