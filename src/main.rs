use image::{GrayImage, Luma};
use plate_locator::{PlateDetector, PlateParams};

fn main() {
    env_logger::init();
    // Demo stub: draws six dark character bars on a light frame and runs the detector
    let (w, h) = (240u32, 120u32);
    let mut gray = GrayImage::from_pixel(w, h, Luma([215]));
    for i in 0..6u32 {
        let x0 = 50 + i * 16;
        for y in 45..70 {
            for x in x0..x0 + 9 {
                gray.put_pixel(x, y, Luma([35]));
            }
        }
    }

    let detector = PlateDetector::new(PlateParams::default());
    let report = detector.process(&gray);
    println!(
        "{} latency_ms={:.3}",
        report.status, report.timing.total_ms
    );
    if let Some(seg) = report.segment(&detector.params().segment) {
        println!("glyphs={}", seg.glyphs.len());
    }
}
