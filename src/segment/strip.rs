use super::segmenter::Glyph;
use image::imageops::{replace, resize, FilterType};
use image::{GrayImage, Luma};

/// Lay glyphs side by side at a common height for display.
///
/// Every glyph is scaled with nearest-neighbour sampling to the tallest glyph
/// height, keeping its aspect ratio, and consecutive glyphs are separated by a
/// white strip `separator_px` wide. Returns `None` when there is nothing to
/// draw.
pub fn glyph_strip(glyphs: &[Glyph], separator_px: u32) -> Option<GrayImage> {
    let visible: Vec<&GrayImage> = glyphs
        .iter()
        .map(|g| &g.raster)
        .filter(|r| r.width() > 0 && r.height() > 0)
        .collect();
    let target_h = visible.iter().map(|r| r.height()).max()?;

    let resized: Vec<GrayImage> = visible
        .iter()
        .map(|r| {
            let scale = f64::from(target_h) / f64::from(r.height());
            let new_w = ((f64::from(r.width()) * scale) as u32).max(1);
            resize(*r, new_w, target_h, FilterType::Nearest)
        })
        .collect();

    let separators = separator_px * (resized.len() as u32 - 1);
    let total_w = resized.iter().map(|r| r.width()).sum::<u32>() + separators;
    let mut strip = GrayImage::from_pixel(total_w, target_h, Luma([255]));
    let mut cursor = 0i64;
    for r in &resized {
        replace(&mut strip, r, cursor, 0);
        cursor += i64::from(r.width() + separator_px);
    }
    Some(strip)
}
