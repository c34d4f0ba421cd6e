#![doc = include_str!("../README.md")]

// Lane engine and pipeline
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod lanes;
pub mod pipeline;
pub mod roi;

// Default collaborators and presentation
pub mod config;
pub mod edges;
pub mod hough;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

pub use crate::edges::{CannyEdges, EdgeDetector, EdgeParams};
pub use crate::error::LaneError;
pub use crate::hough::{HoughParams, ProbabilisticHough, SegmentDetector};
pub use crate::lanes::{
    LaneFitParams, LaneLine, LaneSide, PixelLaneLine, RawSegment, TrackResult, TrackStatus,
};
pub use crate::pipeline::{process_batch, LaneParams, LaneReport, LaneTracker};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_tracker::prelude::*;
///
/// # fn main() -> Result<(), LaneError> {
/// let segments = RawSegment::from_flat(&[100, 200, 200, 100, 300, 200, 350, 250])?;
/// let report = LaneTracker::default().process_segments(400, 500, &segments)?;
/// println!("on_track={} vp={:?}", report.on_track(), report.track.vanishing_point);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbFrame;
    pub use crate::{LaneError, LaneParams, LaneReport, LaneTracker, RawSegment};
}
