//! Parameters for the full image → lane decision pipeline.
//!
//! The lane geometry itself (ROI hexagon, horizon band, centring window) is
//! fixed; only the collaborators and the optional slope filter are tunable.
use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use crate::lanes::LaneFitParams;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Edge extraction used by `LaneTracker::process_frame`.
    pub edges: EdgeParams,
    /// Segment detection on the masked edge map.
    pub hough: HoughParams,
    /// Segment aggregation.
    pub lanes: LaneFitParams,
}
