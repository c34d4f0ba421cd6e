use crate::error::LaneError;
use log::trace;
use serde::{Deserialize, Serialize};

/// Unclassified segment in integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RawSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Parse a flat `[x1, y1, x2, y2, x1, y1, ...]` list.
    pub fn from_flat(coords: &[i32]) -> Result<Vec<Self>, LaneError> {
        if coords.len() % 4 != 0 {
            return Err(LaneError::InvalidInput(format!(
                "segment list has {} coordinates, expected a multiple of 4",
                coords.len()
            )));
        }
        Ok(coords
            .chunks_exact(4)
            .map(|c| Self::new(c[0], c[1], c[2], c[3]))
            .collect())
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// Endpoint deltas, widened so any pair of `i32` endpoints fits.
    #[inline]
    fn deltas(&self) -> (f64, f64) {
        let dx = self.x2 as i64 - self.x1 as i64;
        let dy = self.y2 as i64 - self.y1 as i64;
        (dx as f64, dy as f64)
    }

    pub fn length(&self) -> f32 {
        let (dx, dy) = self.deltas();
        dx.hypot(dy) as f32
    }

    /// `(y2 - y1) / (x2 - x1)`, `None` for vertical segments.
    pub fn slope(&self) -> Option<f32> {
        (!self.is_vertical()).then(|| {
            let (dx, dy) = self.deltas();
            (dy / dx) as f32
        })
    }
}

impl From<[i32; 4]> for RawSegment {
    fn from(c: [i32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Which lane boundary a segment or line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneSide {
    Left,
    Right,
}

impl LaneSide {
    /// Negative slope is LEFT; zero and positive slopes are RIGHT.
    #[inline]
    pub fn from_slope(slope: f32) -> Self {
        if slope < 0.0 {
            LaneSide::Left
        } else {
            LaneSide::Right
        }
    }
}

/// Segment in slope/intercept form, tagged with its side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassifiedSegment {
    pub slope: f32,
    pub intercept: f32,
    pub length: f32,
    pub side: LaneSide,
}

/// Classify a raw segment; vertical segments yield `None`.
pub fn classify_segment(seg: &RawSegment) -> Option<ClassifiedSegment> {
    let Some(slope) = seg.slope() else {
        trace!("Lanes: dropping vertical segment {seg:?}");
        return None;
    };
    let intercept = seg.y1 as f32 - slope * seg.x1 as f32;
    Some(ClassifiedSegment {
        slope,
        intercept,
        length: seg.length(),
        side: LaneSide::from_slope(slope),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_slope_is_left_and_positive_is_right() {
        let left = classify_segment(&RawSegment::new(0, 100, 50, 50)).expect("not vertical");
        assert_eq!(left.side, LaneSide::Left);
        assert_eq!(left.slope, -1.0);
        assert_eq!(left.intercept, 100.0);

        let right = classify_segment(&RawSegment::new(0, 0, 10, 20)).expect("not vertical");
        assert_eq!(right.side, LaneSide::Right);
        assert_eq!(right.slope, 2.0);
        assert_eq!(right.intercept, 0.0);
    }

    #[test]
    fn zero_slope_goes_right() {
        let flat = classify_segment(&RawSegment::new(3, 40, 30, 40)).expect("not vertical");
        assert_eq!(flat.slope, 0.0);
        assert_eq!(flat.side, LaneSide::Right);
    }

    #[test]
    fn vertical_segments_are_not_classified() {
        assert!(classify_segment(&RawSegment::new(7, 0, 7, 90)).is_none());
        assert!(RawSegment::new(7, 0, 7, 90).slope().is_none());
    }

    #[test]
    fn length_is_euclidean() {
        let seg = RawSegment::new(1, 1, 4, 5);
        assert_eq!(seg.length(), 5.0);
        let cls = classify_segment(&seg).expect("not vertical");
        assert_eq!(cls.length, 5.0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let seg = RawSegment::new(i32::MIN, 0, i32::MAX, 10);
        let expected_len = u32::MAX as f32;
        assert!((seg.length() - expected_len).abs() / expected_len < 1e-6);
        let cls = classify_segment(&seg).expect("not vertical");
        assert!(cls.slope > 0.0 && cls.slope < 1e-8, "slope={}", cls.slope);
        assert_eq!(cls.side, LaneSide::Right);
        assert!(cls.intercept.is_finite());
    }

    #[test]
    fn flat_coordinates_must_come_in_fours() {
        let segs = RawSegment::from_flat(&[0, 1, 2, 3, 4, 5, 6, 7]).expect("two segments");
        assert_eq!(segs, vec![RawSegment::new(0, 1, 2, 3), RawSegment::new(4, 5, 6, 7)]);
        assert!(RawSegment::from_flat(&[]).expect("empty is fine").is_empty());
        assert!(matches!(
            RawSegment::from_flat(&[0, 1, 2]),
            Err(LaneError::InvalidInput(_))
        ));
    }
}
