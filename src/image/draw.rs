//! Box overlays for diagnostics.
use crate::types::BoundingBox;
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub const CANDIDATE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const GROUP_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Expand a luma raster into RGB so colored boxes can be drawn on it.
pub fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y)[0];
        Rgb([v, v, v])
    })
}

/// RGB copy of `gray` with `boxes` outlined.
pub fn outline_on(gray: &GrayImage, boxes: &[BoundingBox], color: Rgb<u8>, thickness: u32) -> RgbImage {
    let mut canvas = gray_to_rgb(gray);
    draw_boxes(&mut canvas, boxes, color, thickness);
    canvas
}

/// Outline every box with a border `thickness` pixels wide.
///
/// The outermost ring passes through both corners `(x, y)` and
/// `(x + w, y + h)`; further rings are inset one pixel each, so the stroke
/// grows into the box and never covers pixels outside it.
pub fn draw_boxes(canvas: &mut RgbImage, boxes: &[BoundingBox], color: Rgb<u8>, thickness: u32) {
    for b in boxes {
        let w = (b.width.max(0) as u32) + 1;
        let h = (b.height.max(0) as u32) + 1;
        for t in 0..thickness {
            let inset = t as i32;
            let (Some(w), Some(h)) = (w.checked_sub(2 * t), h.checked_sub(2 * t)) else {
                break;
            };
            if w == 0 || h == 0 {
                break;
            }
            draw_hollow_rect_mut(
                canvas,
                Rect::at(b.x + inset, b.y + inset).of_size(w, h),
                color,
            );
        }
    }
}
