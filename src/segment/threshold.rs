use super::options::SegmentOptions;
use image::{GrayImage, ImageBuffer, Luma};
use imageproc::filter::separable_filter_equal;
use imageproc::map::map_colors;

/// Locally adaptive, inverted threshold.
///
/// Each pixel is compared with the Gaussian-weighted mean of its
/// `adaptive_block_size` square neighbourhood (edges replicated, mean rounded
/// to the nearest integer). Pixels at least `adaptive_offset` darker than that
/// mean become foreground (255), all others background (0).
pub fn adaptive_binarize(gray: &GrayImage, options: &SegmentOptions) -> GrayImage {
    if gray.width() == 0 || gray.height() == 0 {
        return gray.clone();
    }
    let luma: ImageBuffer<Luma<f32>, Vec<f32>> =
        map_colors(gray, |Luma([v])| Luma([f32::from(v)]));
    let mean = separable_filter_equal(&luma, &options.adaptive_kernel());
    let offset = f32::from(options.adaptive_offset);
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = f32::from(gray.get_pixel(x, y)[0]);
        let m = mean.get_pixel(x, y)[0].round();
        if v - m <= -offset {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
