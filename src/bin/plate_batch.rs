use plate_locator::config::batch;
use plate_locator::detector::detect_batch;
use plate_locator::diagnostics::BatchSummary;
use plate_locator::error::PlateError;
use plate_locator::image::io::write_json_file;
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
    let config = batch::load_config(Path::new(&config_path))?;

    let detector = PlateDetector::new(config.params);
    let entries = detect_batch(&detector, &config.inputs());

    let summaries: Vec<BatchSummary> = entries.iter().map(|e| e.summary()).collect();
    for s in &summaries {
        println!("{}: {}", s.name, s.status);
    }
    let detected = entries.iter().filter(|e| e.status.is_detected()).count();
    println!("{detected}/{} plates detected", entries.len());

    if let Some(path) = &config.report_json {
        write_json_file(path, &summaries)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: plate_batch <config.json>".to_string()
}
