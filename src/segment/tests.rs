use super::*;
use crate::error::PlateError;
use crate::types::BoundingBox;
use image::{GrayImage, Luma};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bb(x: i32, y: i32, w: i32, h: i32) -> BoundingBox {
    BoundingBox::new(x, y, w, h)
}

fn frame_with_bars(width: u32, height: u32, bars: &[BoundingBox]) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([210]));
    for b in bars {
        for y in b.y..b.bottom_edge() {
            for x in b.x..b.right_edge() {
                img.put_pixel(x as u32, y as u32, Luma([25]));
            }
        }
    }
    img
}

#[test]
fn envelope_spans_all_members() {
    let group = [bb(10, 50, 8, 20), bb(25, 48, 9, 22), bb(42, 52, 8, 19)];
    assert_eq!(envelope(&group), Some(bb(10, 48, 40, 23)));
    assert_eq!(envelope(&[]), None);
}

#[test]
fn padding_is_clamped_to_image() {
    let env = bb(10, 48, 40, 23);
    let win = padded_window(&env, 15, 60, 200);
    assert_eq!(
        win,
        CropWindow {
            x0: 0,
            y0: 33,
            x1: 60,
            y1: 86
        }
    );
    assert_eq!(win.width(), 60);
    assert_eq!(win.height(), 53);
}

#[test]
fn windows_stay_inside_any_image() {
    let sizes = [(0u32, 0u32), (1, 1), (40, 30), (640, 480)];
    let envelopes = [
        bb(0, 0, 5, 5),
        bb(-30, -10, 20, 8),
        bb(35, 25, 40, 40),
        bb(700, 500, 10, 10),
        bb(100, 100, 0, 0),
    ];
    for &(w, h) in &sizes {
        for env in &envelopes {
            for pad in [0, 15, 100] {
                let win = padded_window(env, pad, w, h);
                assert!(win.x0 <= win.x1 && win.x1 <= w, "{win:?} for {env:?} in {w}x{h}");
                assert!(win.y0 <= win.y1 && win.y1 <= h, "{win:?} for {env:?} in {w}x{h}");
            }
        }
    }
}

#[test]
fn crop_translates_members() {
    let group = [bb(40, 30, 8, 20), bb(55, 31, 8, 20), bb(70, 30, 8, 20)];
    let img = frame_with_bars(120, 80, &group);
    let region = crop_region(&img, &group, &SegmentOptions::default()).expect("non-empty group");
    assert_eq!(
        region.window,
        CropWindow {
            x0: 25,
            y0: 15,
            x1: 93,
            y1: 66
        }
    );
    assert_eq!(region.gray.dimensions(), (68, 51));
    assert_eq!(region.local_boxes[0], bb(15, 15, 8, 20));
    assert_eq!(region.gray.get_pixel(15, 15)[0], 25);
    assert!(crop_region(&img, &[], &SegmentOptions::default()).is_none());
}

#[test]
fn adaptive_threshold_marks_dark_strokes() {
    let bar = bb(20, 10, 6, 20);
    let img = frame_with_bars(60, 40, &[bar]);
    let binary = adaptive_binarize(&img, &SegmentOptions::default());
    assert_eq!(binary.get_pixel(22, 20)[0], 255);
    assert_eq!(binary.get_pixel(50, 5)[0], 0);
    assert_eq!(binary.get_pixel(2, 38)[0], 0);
}

/// Direct `block x block` Gaussian mean with replicated edges, in f64.
fn reference_mean(gray: &GrayImage, block: i64, sigma: f64, x: i64, y: i64) -> f64 {
    let r = block / 2;
    let weight = |d: i64| (-((d * d) as f64) / (2.0 * sigma * sigma)).exp();
    let norm: f64 = (-r..=r).map(weight).sum();
    let (w, h) = (i64::from(gray.width()), i64::from(gray.height()));
    let mut acc = 0.0;
    for dy in -r..=r {
        for dx in -r..=r {
            let sx = (x + dx).clamp(0, w - 1) as u32;
            let sy = (y + dy).clamp(0, h - 1) as u32;
            acc += weight(dx) * weight(dy) * f64::from(gray.get_pixel(sx, sy)[0]);
        }
    }
    acc / (norm * norm)
}

#[test]
fn adaptive_threshold_uses_the_whole_block() {
    let mut rng = StdRng::seed_from_u64(31);
    let img = GrayImage::from_fn(80, 50, |x, y| {
        let base = if (x / 9 + y / 13) % 2 == 0 { 70 } else { 190 };
        Luma([base + rng.gen_range(0u8..50)])
    });
    let opts = SegmentOptions::default();
    let binary = adaptive_binarize(&img, &opts);

    let mut ambiguous = 0;
    for y in 0..50i64 {
        for x in 0..80i64 {
            let mean = reference_mean(&img, 31, 5.0, x, y);
            if (mean.fract() - 0.5).abs() < 0.01 {
                ambiguous += 1;
                continue;
            }
            let v = f64::from(img.get_pixel(x as u32, y as u32)[0]);
            let expected = if v - mean.round() <= -10.0 { 255 } else { 0 };
            assert_eq!(
                binary.get_pixel(x as u32, y as u32)[0],
                expected,
                "pixel ({x}, {y}), mean {mean}"
            );
        }
    }
    assert!(ambiguous < 200, "{ambiguous} pixels too close to a rounding tie");
}

#[test]
fn kernel_spans_the_block() {
    let kernel = SegmentOptions::default().adaptive_kernel();
    assert_eq!(kernel.len(), 31);
    assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    assert!((kernel[0] - kernel[30]).abs() < 1e-9);
    assert!(kernel[15] > kernel[14] && kernel[0] > 0.0);
    let even = SegmentOptions {
        adaptive_block_size: 10,
        ..SegmentOptions::default()
    };
    assert_eq!(even.adaptive_kernel().len(), 11);
}

#[test]
fn sigma_follows_block_size() {
    let opts = SegmentOptions::default();
    assert!((opts.adaptive_sigma() - 5.0).abs() < 1e-5);
    let tiny = SegmentOptions {
        adaptive_block_size: 1,
        ..opts
    };
    assert!((tiny.adaptive_sigma() - 0.8).abs() < 1e-5);
}

#[test]
fn glyphs_come_out_left_to_right() {
    let group = [bb(70, 30, 8, 20), bb(40, 30, 8, 20), bb(55, 31, 9, 19)];
    let img = frame_with_bars(120, 80, &group);
    let region = crop_region(&img, &group, &SegmentOptions::default()).unwrap();
    let seg = segment_region(&region, &SegmentOptions::default()).unwrap();

    assert_eq!(seg.glyphs.len(), 3);
    let xs: Vec<i32> = seg.glyphs.iter().map(|g| g.bounds.x).collect();
    assert!(xs.windows(2).all(|p| p[0] <= p[1]), "xs={xs:?}");
    assert_eq!(seg.glyphs[1].raster.dimensions(), (9, 19));
    assert_eq!(seg.binary.dimensions(), region.gray.dimensions());
    assert_eq!(seg.marked.dimensions(), region.gray.dimensions());
    for glyph in &seg.glyphs {
        let lit = glyph.raster.pixels().filter(|p| p[0] == 255).count();
        assert!(lit > 0, "glyph at {:?} has no foreground", glyph.bounds);
    }
}

#[test]
fn glyphs_are_clipped_to_the_crop() {
    let region = PlateRegion {
        window: CropWindow {
            x0: 0,
            y0: 0,
            x1: 20,
            y1: 10,
        },
        gray: GrayImage::from_pixel(20, 10, Luma([200])),
        local_boxes: vec![bb(15, 2, 10, 6), bb(-3, -3, 5, 5)],
    };
    let seg = segment_region(&region, &SegmentOptions::default()).unwrap();
    assert_eq!(seg.glyphs[0].raster.dimensions(), (2, 2));
    assert_eq!(seg.glyphs[1].raster.dimensions(), (5, 6));
}

#[test]
fn empty_region_is_rejected() {
    let region = PlateRegion {
        window: CropWindow::default(),
        gray: GrayImage::new(0, 0),
        local_boxes: Vec::new(),
    };
    let err = segment_region(&region, &SegmentOptions::default()).unwrap_err();
    assert!(matches!(err, PlateError::EmptyGroup));
}

#[test]
fn strip_normalizes_height_and_inserts_separators() {
    let glyphs = vec![
        Glyph {
            bounds: bb(0, 0, 4, 10),
            raster: GrayImage::from_pixel(4, 10, Luma([0])),
        },
        Glyph {
            bounds: bb(6, 0, 3, 5),
            raster: GrayImage::from_pixel(3, 5, Luma([0])),
        },
        Glyph {
            bounds: bb(12, 0, 5, 20),
            raster: GrayImage::from_pixel(5, 20, Luma([0])),
        },
    ];
    let strip = glyph_strip(&glyphs, 12).expect("strip");
    // widths: 4*2=8, 3*4=12, 5; two separators of 12
    assert_eq!(strip.dimensions(), (8 + 12 + 12 + 12 + 5, 20));
    assert_eq!(strip.get_pixel(0, 0)[0], 0);
    assert_eq!(strip.get_pixel(8, 0)[0], 255);
    assert_eq!(strip.get_pixel(19, 19)[0], 255);
    assert_eq!(strip.get_pixel(20, 19)[0], 0);
}

#[test]
fn strip_of_nothing_is_none() {
    assert!(glyph_strip(&[], 12).is_none());
    let empty = Glyph {
        bounds: bb(0, 0, 0, 0),
        raster: GrayImage::new(0, 0),
    };
    assert!(glyph_strip(&[empty], 12).is_none());
}
