use plate_locator::config::plate;
use plate_locator::error::PlateError;
use plate_locator::image::io::{load_grayscale_image, save_gray, save_rgb, write_json_file};
use plate_locator::segment::glyph_strip;
use plate_locator::PlateDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlateError> {
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("{}", usage());
        std::process::exit(2);
    };
    let config = plate::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = PlateDetector::new(config.params);
    let report = detector.process(&gray);
    let dir = &config.output.dir;

    save_gray(&report.binary, &dir.join("binary.png"))?;
    save_rgb(&report.candidates_overlay, &dir.join("candidates.png"))?;
    save_rgb(&report.plate_overlay, &dir.join("plate.png"))?;
    save_gray(&report.plate_crop, &dir.join("plate_gray.png"))?;

    println!(
        "{}: {} ({} candidates)",
        config.input.display(),
        report.status,
        report.candidates.len()
    );

    if let Some(seg) = report.segment(&detector.params().segment) {
        save_gray(&seg.binary, &dir.join("plate_binary.png"))?;
        save_rgb(&seg.marked, &dir.join("plate_marked.png"))?;
        for (i, glyph) in seg.glyphs.iter().enumerate() {
            if glyph.raster.width() > 0 && glyph.raster.height() > 0 {
                save_gray(&glyph.raster, &dir.join(format!("glyph_{:02}.png", i + 1)))?;
            }
        }
        if let Some(strip) = glyph_strip(&seg.glyphs, detector.params().segment.separator_px) {
            save_gray(&strip, &dir.join("glyphs.png"))?;
        }
        println!("Saved {} glyphs to {}", seg.glyphs.len(), dir.display());
    }

    let summary = report.summary();
    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &summary)?;
            println!("JSON report written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn usage() -> String {
    "Usage: plate_demo <config.json>".to_string()
}
