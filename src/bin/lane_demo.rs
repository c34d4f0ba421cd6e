use lane_tracker::config::lane_demo;
use lane_tracker::image::io::{load_rgb_image, save_gray_u8, save_rgb, write_json_file};
use lane_tracker::image::RgbFrame;
use lane_tracker::overlay::{draw_hough_lines, draw_lane_lines};
use lane_tracker::LaneTracker;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = lane_demo::load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let frame = RgbFrame::from_rgb_image(&image).map_err(|e| e.to_string())?;

    let start = Instant::now();
    let tracker = LaneTracker::new(config.lane_params());
    let report = tracker.process_frame(&frame).map_err(|e| e.to_string())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let overlay = draw_lane_lines(
        &image,
        &report.pixel_lines(),
        config.overlay.lane_color,
        config.overlay.lane_thickness,
    );
    save_rgb(&overlay, &config.output.overlay_image)?;

    if let Some(path) = &config.output.segments_image {
        let segments = draw_hough_lines(&image, &report.segments, config.overlay.segment_thickness);
        save_rgb(&segments, path)?;
    }

    if let (Some(path), Some(masked)) = (&config.output.edges_image, &report.masked_edges) {
        save_gray_u8(masked, path)?;
    }

    write_json_file(&config.output.report_json, &report)?;

    println!("Time: {elapsed_ms:.3} ms");
    println!(
        "Saved lane overlay to {} and report to {}",
        config.output.overlay_image.display(),
        config.output.report_json.display()
    );
    if report.on_track() {
        println!("On track");
    } else {
        println!("Out of track ({:?})", report.track.status);
    }

    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}
