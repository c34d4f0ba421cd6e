use super::params::LaneParams;
use super::report::LaneReport;
use super::LaneTracker;
use crate::error::LaneError;
use crate::image::RgbFrame;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Process independent frames in parallel.
///
/// Every frame gets its own tracker, so results are identical to processing
/// the frames one by one; output order matches input order.
pub fn process_batch(
    frames: &[RgbFrame<'_>],
    params: &LaneParams,
) -> Vec<Result<LaneReport, LaneError>> {
    let t0 = Instant::now();
    let reports: Vec<_> = frames
        .par_iter()
        .map(|frame| LaneTracker::new(params.clone()).process_frame(frame))
        .collect();
    debug!(
        "Batch: frames={} on_track={} elapsed_ms={:.3}",
        frames.len(),
        reports
            .iter()
            .filter(|r| matches!(r, Ok(rep) if rep.on_track()))
            .count(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    reports
}
