use super::segment::{classify_segment, ClassifiedSegment, LaneSide, RawSegment};
use crate::diagnostics::SegmentStats;
use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Analytic lane boundary `y = slope * x + intercept` in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaneLine {
    pub slope: f32,
    pub intercept: f32,
    pub side: LaneSide,
}

impl LaneLine {
    pub fn new(slope: f32, intercept: f32, side: LaneSide) -> Self {
        Self {
            slope,
            intercept,
            side,
        }
    }

    #[inline]
    pub fn y_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }

    /// Inverse of `y_at`; `None` for a horizontal line.
    #[inline]
    pub fn x_at(&self, y: f32) -> Option<f32> {
        if self.slope == 0.0 {
            return None;
        }
        let x = (y - self.intercept) / self.slope;
        x.is_finite().then_some(x)
    }
}

/// Optional rejection of implausible slopes before averaging.
///
/// A segment is kept when `min_abs < |slope| < max_abs`; this drops nearly
/// horizontal clutter (shadows, road seams) and nearly vertical poles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlopeBand {
    pub min_abs: f32,
    pub max_abs: f32,
}

impl Default for SlopeBand {
    fn default() -> Self {
        Self {
            min_abs: 0.5,
            max_abs: 15.0,
        }
    }
}

impl SlopeBand {
    #[inline]
    pub fn contains(&self, slope: f32) -> bool {
        let a = slope.abs();
        a > self.min_abs && a < self.max_abs
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneFitParams {
    /// `None` keeps every non-vertical segment.
    pub slope_band: Option<SlopeBand>,
}

/// Result of aggregating one frame's segments.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LaneFit {
    pub left: Option<LaneLine>,
    pub right: Option<LaneLine>,
    pub stats: SegmentStats,
}

/// Length-weighted `(slope, intercept)` accumulator for one side.
struct SideAccumulator {
    weighted: Vector2<f32>,
    total_weight: f32,
    count: usize,
}

impl SideAccumulator {
    fn new() -> Self {
        Self {
            weighted: Vector2::zeros(),
            total_weight: 0.0,
            count: 0,
        }
    }

    fn push(&mut self, seg: &ClassifiedSegment) {
        self.weighted += Vector2::new(seg.slope, seg.intercept) * seg.length;
        self.total_weight += seg.length;
        self.count += 1;
    }

    fn mean(&self, side: LaneSide) -> Option<LaneLine> {
        if self.count == 0 || self.total_weight <= 0.0 {
            return None;
        }
        let m = self.weighted / self.total_weight;
        Some(LaneLine::new(m.x, m.y, side))
    }
}

/// Split segments into LEFT/RIGHT and average each side weighted by length.
///
/// Sides without segments come back as `None`; an empty input yields two
/// `None`s.
pub fn average_slope_intercept(segments: &[RawSegment], params: &LaneFitParams) -> LaneFit {
    let mut left = SideAccumulator::new();
    let mut right = SideAccumulator::new();
    let mut stats = SegmentStats {
        total: segments.len(),
        ..Default::default()
    };

    for seg in segments {
        let Some(cls) = classify_segment(seg) else {
            stats.vertical_discarded += 1;
            continue;
        };
        if let Some(band) = &params.slope_band {
            if !band.contains(cls.slope) {
                stats.out_of_band += 1;
                continue;
            }
        }
        match cls.side {
            LaneSide::Left => left.push(&cls),
            LaneSide::Right => right.push(&cls),
        }
    }

    stats.left = left.count;
    stats.right = right.count;
    let fit = LaneFit {
        left: left.mean(LaneSide::Left),
        right: right.mean(LaneSide::Right),
        stats,
    };
    debug!(
        "Lanes: segments={} vertical={} out_of_band={} left={} right={} left_line={:?} right_line={:?}",
        fit.stats.total,
        fit.stats.vertical_discarded,
        fit.stats.out_of_band,
        fit.stats.left,
        fit.stats.right,
        fit.left.map(|l| (l.slope, l.intercept)),
        fit.right.map(|l| (l.slope, l.intercept)),
    );
    fit
}
