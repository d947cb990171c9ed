use super::*;
use crate::types::BoundingBox;
use image::{GrayImage, Luma};

fn light_frame_with_bars(width: u32, height: u32, bars: &[BoundingBox]) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([220]));
    for b in bars {
        for y in b.y..b.bottom_edge() {
            for x in b.x..b.right_edge() {
                img.put_pixel(x as u32, y as u32, Luma([30]));
            }
        }
    }
    img
}

#[test]
fn shape_gate_bounds() {
    let opts = ExtractOptions::default();
    // aspect exactly 0.8 and 5.0 are inclusive
    assert!(is_character_shaped(&BoundingBox::new(0, 0, 10, 8), &opts));
    assert!(is_character_shaped(&BoundingBox::new(0, 0, 4, 20), &opts));
    assert!(!is_character_shaped(&BoundingBox::new(0, 0, 10, 7), &opts));
    assert!(!is_character_shaped(&BoundingBox::new(0, 0, 3, 16), &opts));
    // area 30 and 5000 are exclusive
    assert!(!is_character_shaped(&BoundingBox::new(0, 0, 5, 6), &opts));
    assert!(is_character_shaped(&BoundingBox::new(0, 0, 5, 7), &opts));
    assert!(!is_character_shaped(&BoundingBox::new(0, 0, 50, 100), &opts));
    assert!(is_character_shaped(&BoundingBox::new(0, 0, 49, 100), &opts));
}

#[test]
fn filter_is_idempotent() {
    let opts = ExtractOptions::default();
    let boxes: Vec<BoundingBox> = (1..40)
        .flat_map(|w| (1..60).step_by(7).map(move |h| BoundingBox::new(w, h, w, h)))
        .collect();
    let once = filter_candidates(&boxes, &opts);
    let twice = filter_candidates(&once, &opts);
    assert!(!once.is_empty());
    assert!(once.len() < boxes.len());
    assert_eq!(once, twice);
}

#[test]
fn binarization_makes_dark_glyphs_foreground() {
    let bar = BoundingBox::new(5, 4, 6, 12);
    let img = light_frame_with_bars(30, 20, &[bar]);
    let binary = binarize_inverted(&img);
    assert_eq!(binary.get_pixel(7, 8)[0], 255);
    assert_eq!(binary.get_pixel(0, 0)[0], 0);
    assert_eq!(binary.get_pixel(20, 10)[0], 0);
}

#[test]
fn contour_box_covers_bar_extent() {
    let bar = BoundingBox::new(5, 4, 6, 12);
    let binary = binarize_inverted(&light_frame_with_bars(30, 20, &[bar]));
    let boxes = contour_boxes(&binary);
    assert_eq!(boxes, vec![bar]);
}

#[test]
fn ring_yields_outer_and_hole_boxes() {
    let mut img = GrayImage::from_pixel(40, 40, Luma([220]));
    for y in 5..30 {
        for x in 10..24 {
            let border = y < 8 || y >= 27 || x < 13 || x >= 21;
            if border {
                img.put_pixel(x, y, Luma([20]));
            }
        }
    }
    let boxes = contour_boxes(&binarize_inverted(&img));
    assert_eq!(boxes.len(), 2, "expected outer and hole contours, got {boxes:?}");
    assert!(boxes.contains(&BoundingBox::new(10, 5, 14, 25)));
}

#[test]
fn extraction_filters_noise_and_blobs() {
    let bars = [
        BoundingBox::new(10, 10, 8, 20),
        BoundingBox::new(25, 10, 8, 20),
        // speck: area 4
        BoundingBox::new(60, 5, 2, 2),
        // wide blob: aspect 0.25
        BoundingBox::new(50, 40, 40, 10),
    ];
    let img = light_frame_with_bars(100, 60, &bars);
    let extraction = extract_candidates(&img, &ExtractOptions::default());
    assert_eq!(extraction.contours_total, 4);
    assert_eq!(extraction.candidates.len(), 2);
    assert!(extraction.candidates.contains(&bars[0]));
    assert!(extraction.candidates.contains(&bars[1]));
}

#[test]
fn uniform_frame_has_no_candidates() {
    let img = GrayImage::from_pixel(32, 32, Luma([128]));
    let extraction = extract_candidates(&img, &ExtractOptions::default());
    assert!(extraction.candidates.is_empty());
}
