//! Per-frame lane pipeline.
//!
//! ```text
//! RgbFrame ──EdgeDetector──▶ edges ──ROI mask──▶ masked edges
//!          ──SegmentDetector──▶ raw segments ──fit──▶ LaneLine × 2
//!          ──project──▶ PixelLaneLine × 2      ──track──▶ TrackResult
//! ```
//!
//! Three entry points cover the three input boundaries: a color frame, an
//! already computed binary edge map, or a list of raw segments. Inputs are
//! validated once on entry; past that point degenerate geometry shows up as
//! absent lines or an off-track status, never as an error.
//!
//! A `LaneTracker` holds configuration only, so one instance can process any
//! number of frames, from any number of threads, in any order.

mod batch;
mod params;
mod report;

pub use batch::process_batch;
pub use params::LaneParams;
pub use report::LaneReport;

use crate::diagnostics::{LaneDiagnostics, StageTiming, TimingBreakdown};
use crate::edges::{CannyEdges, EdgeDetector};
use crate::error::LaneError;
use crate::hough::{ProbabilisticHough, SegmentDetector};
use crate::image::{GrayImageU8, ImageView, RgbFrame};
use crate::lanes::{average_slope_intercept, evaluate_track, lane_lines, RawSegment};
use crate::roi::{apply_mask, build_roi_mask};
use log::debug;
use std::time::Instant;

/// Reject frames that have no pixels.
pub fn validate_frame(w: usize, h: usize) -> Result<(), LaneError> {
    if w == 0 || h == 0 {
        return Err(LaneError::InvalidInput(format!(
            "frame must be non-empty, got {w}x{h}"
        )));
    }
    Ok(())
}

#[inline]
fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

pub struct LaneTracker<E = CannyEdges, S = ProbabilisticHough> {
    params: LaneParams,
    edge_detector: E,
    segment_detector: S,
}

impl LaneTracker {
    /// Tracker with the built-in edge and segment detectors.
    pub fn new(params: LaneParams) -> Self {
        let edge_detector = CannyEdges::new(params.edges.clone());
        let segment_detector = ProbabilisticHough::new(params.hough.clone());
        Self {
            params,
            edge_detector,
            segment_detector,
        }
    }
}

impl Default for LaneTracker {
    fn default() -> Self {
        Self::new(LaneParams::default())
    }
}

impl<E: EdgeDetector, S: SegmentDetector> LaneTracker<E, S> {
    /// Tracker with caller-provided collaborators.
    pub fn with_detectors(params: LaneParams, edge_detector: E, segment_detector: S) -> Self {
        Self {
            params,
            edge_detector,
            segment_detector,
        }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Full pipeline from a color frame.
    pub fn process_frame(&self, frame: &RgbFrame<'_>) -> Result<LaneReport, LaneError> {
        let (w, h) = (frame.width(), frame.height());
        validate_frame(w, h)?;
        if frame.data().len() != w * h * 3 {
            return Err(LaneError::InvalidInput(format!(
                "RGB buffer has {} bytes, expected {} for {w}x{h}",
                frame.data().len(),
                w * h * 3
            )));
        }
        let t0 = Instant::now();
        let edges = self.edge_detector.detect(frame);
        let edges_ms = elapsed_ms(t0);
        if edges.width() != w || edges.height() != h {
            return Err(LaneError::SizeMismatch {
                expected: (w, h),
                actual: (edges.width(), edges.height()),
            });
        }
        let mut report = self.process_edges(&edges)?;
        report
            .diagnostics
            .timing
            .stages
            .insert(0, StageTiming::new("edges", edges_ms));
        report.diagnostics.timing.total_ms = elapsed_ms(t0);
        Ok(report)
    }

    /// Pipeline from a binary edge map (non-zero pixels are edges).
    pub fn process_edges(&self, edges: &GrayImageU8) -> Result<LaneReport, LaneError> {
        let (w, h) = (edges.width(), edges.height());
        validate_frame(w, h)?;
        let t0 = Instant::now();
        let mut timing = TimingBreakdown::default();

        let t_roi = Instant::now();
        let mask = build_roi_mask(w, h);
        let masked = apply_mask(edges, &mask)?;
        timing.push("roi", elapsed_ms(t_roi));

        let t_segments = Instant::now();
        let segments = self.segment_detector.detect(&masked);
        timing.push("segments", elapsed_ms(t_segments));

        let edge_pixels = edges.count_nonzero();
        let masked_edge_pixels = masked.count_nonzero();
        debug!(
            "Pipeline: {}x{} edge_pixels={} masked={} raw_segments={}",
            w,
            h,
            edge_pixels,
            masked_edge_pixels,
            segments.len()
        );

        let mut report = self.lanes_from_segments(w, h, segments, timing);
        report.diagnostics.edge_pixels = Some(edge_pixels);
        report.diagnostics.masked_edge_pixels = Some(masked_edge_pixels);
        report.diagnostics.timing.total_ms = elapsed_ms(t0);
        report.masked_edges = Some(masked);
        Ok(report)
    }

    /// Lane engine only: fit, project and evaluate already detected segments.
    pub fn process_segments(
        &self,
        w: usize,
        h: usize,
        segments: &[RawSegment],
    ) -> Result<LaneReport, LaneError> {
        validate_frame(w, h)?;
        let t0 = Instant::now();
        let mut report =
            self.lanes_from_segments(w, h, segments.to_vec(), TimingBreakdown::default());
        report.diagnostics.timing.total_ms = elapsed_ms(t0);
        Ok(report)
    }

    fn lanes_from_segments(
        &self,
        w: usize,
        h: usize,
        segments: Vec<RawSegment>,
        mut timing: TimingBreakdown,
    ) -> LaneReport {
        let t_fit = Instant::now();
        let fit = average_slope_intercept(&segments, &self.params.lanes);
        timing.push("fit", elapsed_ms(t_fit));

        let t_project = Instant::now();
        let (left_pixels, right_pixels) = lane_lines(&fit, h);
        timing.push("project", elapsed_ms(t_project));

        let t_track = Instant::now();
        let track = evaluate_track(fit.left.as_ref(), fit.right.as_ref(), w, h);
        timing.push("track", elapsed_ms(t_track));

        debug!(
            "Pipeline: on_track={} status={:?} vp={:?}",
            track.on_track, track.status, track.vanishing_point
        );

        LaneReport {
            width: w,
            height: h,
            left: fit.left,
            right: fit.right,
            left_pixels,
            right_pixels,
            track,
            segments,
            diagnostics: LaneDiagnostics {
                edge_pixels: None,
                masked_edge_pixels: None,
                segments: fit.stats,
                timing,
            },
            masked_edges: None,
        }
    }
}
