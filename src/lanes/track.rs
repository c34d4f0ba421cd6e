use super::fit::LaneLine;
use super::project::HORIZON_RATIO;
use log::debug;
use serde::Serialize;

/// Horizontal window, as fractions of the width, that must contain the
/// vanishing point.
pub const CENTER_BAND: (f32, f32) = (0.25, 0.75);

/// Why a frame is (or is not) on track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    OnTrack,
    /// At least one boundary was not found.
    MissingLane,
    /// Both boundaries have the same slope and never meet.
    ParallelLanes,
    /// The lines meet outside the central half of the frame.
    VanishingPointOffCenter,
    /// The lines meet below the horizon band.
    VanishingPointBelowHorizon,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackResult {
    pub on_track: bool,
    pub status: TrackStatus,
    pub vanishing_point: Option<[f32; 2]>,
}

impl TrackResult {
    fn off(status: TrackStatus, vanishing_point: Option<[f32; 2]>) -> Self {
        Self {
            on_track: false,
            status,
            vanishing_point,
        }
    }
}

/// Intersection of two analytic lines, `None` when they are parallel.
pub fn vanishing_point(left: &LaneLine, right: &LaneLine) -> Option<[f32; 2]> {
    if left.slope == right.slope {
        return None;
    }
    let x = (right.intercept - left.intercept) / (left.slope - right.slope);
    let y = left.slope * x + left.intercept;
    Some([x, y])
}

/// Decide whether the vehicle is centred between the two lane boundaries.
///
/// The vanishing point must satisfy `0.25·w ≤ x ≤ 0.75·w` and `y ≤ 0.6·h`.
pub fn evaluate_track(
    left: Option<&LaneLine>,
    right: Option<&LaneLine>,
    w: usize,
    h: usize,
) -> TrackResult {
    let (Some(left), Some(right)) = (left, right) else {
        debug!(
            "Track: missing lane (left={}, right={})",
            left.is_some(),
            right.is_some()
        );
        return TrackResult::off(TrackStatus::MissingLane, None);
    };
    let Some(vp) = vanishing_point(left, right) else {
        debug!("Track: parallel lanes, slope={}", left.slope);
        return TrackResult::off(TrackStatus::ParallelLanes, None);
    };

    let (w, h) = (w as f32, h as f32);
    let [x, y] = vp;
    let centered = x >= w * CENTER_BAND.0 && x <= w * CENTER_BAND.1;
    let above_horizon = y <= h * HORIZON_RATIO;
    debug!(
        "Track: vanishing point ({x:.2}, {y:.2}) centered={centered} above_horizon={above_horizon}"
    );

    if !centered {
        TrackResult::off(TrackStatus::VanishingPointOffCenter, Some(vp))
    } else if !above_horizon {
        TrackResult::off(TrackStatus::VanishingPointBelowHorizon, Some(vp))
    } else {
        TrackResult {
            on_track: true,
            status: TrackStatus::OnTrack,
            vanishing_point: Some(vp),
        }
    }
}
