//! Lane line tracking engine.
//!
//! Turns a noisy, unordered set of raw line segments into at most two analytic
//! lane lines and decides whether the vehicle is centred in its lane:
//!
//! - `segment`: raw segments and their slope/intercept/length classification.
//!   Vertical segments (`x1 == x2`) have no slope and are dropped. Negative
//!   slopes (in image coordinates, y pointing down) belong to the LEFT
//!   boundary, everything else, zero included, to the RIGHT one.
//! - `fit`: length-weighted mean of `(slope, intercept)` per side, so long,
//!   confidently detected segments dominate short noisy ones.
//! - `project`: each line mapped to two pixel endpoints between the bottom of
//!   the frame and the horizon band at 60% of its height.
//! - `track`: intersection of the two analytic lines (the vanishing point) and
//!   the centring decision.
//!
//! Every stage returns `Option`s for missing data: a side with no segments,
//! a horizontal line that cannot be projected or parallel lanes are ordinary
//! outcomes, never errors. Nothing is kept between frames.

mod fit;
mod project;
mod segment;
mod track;

pub use fit::{average_slope_intercept, LaneFit, LaneFitParams, LaneLine, SlopeBand};
pub use project::{lane_lines, project_lane, PixelLaneLine, ProjectionBand, HORIZON_RATIO};
pub use segment::{classify_segment, ClassifiedSegment, LaneSide, RawSegment};
pub use track::{evaluate_track, vanishing_point, TrackResult, TrackStatus};
