use image::{GrayImage, Luma};
use plate_locator::BoundingBox;

pub const BACKGROUND: u8 = 220;
pub const INK: u8 = 30;

/// Light frame with one solid dark rectangle per box.
pub fn bars_u8(width: u32, height: u32, bars: &[BoundingBox]) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    for b in bars {
        for y in b.y.max(0)..b.bottom_edge().min(height as i32) {
            for x in b.x.max(0)..b.right_edge().min(width as i32) {
                img.put_pixel(x as u32, y as u32, Luma([INK]));
            }
        }
    }
    img
}

/// A plate-like line of `count` characters `w x h` starting at `(x0, y0)`,
/// `pitch` pixels apart, with a gentle baseline drift.
pub fn plate_line(count: i32, x0: i32, y0: i32, w: i32, h: i32, pitch: i32) -> Vec<BoundingBox> {
    (0..count)
        .map(|i| BoundingBox::new(x0 + i * pitch, y0 + (i % 3) - 1, w, h))
        .collect()
}
