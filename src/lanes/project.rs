use super::fit::{LaneFit, LaneLine};
use super::segment::LaneSide;
use log::warn;
use serde::Serialize;

/// Top of the drawing band as a fraction of the frame height.
pub const HORIZON_RATIO: f32 = 0.6;

/// Vertical range `[y_top, y_bottom]` in which lane lines are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectionBand {
    pub y_bottom: f32,
    pub y_top: f32,
}

impl ProjectionBand {
    /// From the bottom row (`y = h`) up to the horizon cutoff at `0.6 * h`.
    pub fn for_height(h: usize) -> Self {
        let y_bottom = h as f32;
        Self {
            y_bottom,
            y_top: y_bottom * HORIZON_RATIO,
        }
    }
}

/// Lane line as two endpoints: `bottom` on `y_bottom`, `top` on `y_top`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PixelLaneLine {
    pub side: LaneSide,
    pub bottom: [f32; 2],
    pub top: [f32; 2],
}

impl PixelLaneLine {
    /// Integer endpoints, truncated toward zero, for rasterization.
    pub fn to_pixels(&self) -> ((i32, i32), (i32, i32)) {
        (
            (self.bottom[0] as i32, self.bottom[1] as i32),
            (self.top[0] as i32, self.top[1] as i32),
        )
    }
}

/// Project an analytic line onto the band.
///
/// `None` when the line is absent or horizontal (`x = (y - b) / m` undefined).
pub fn project_lane(line: Option<&LaneLine>, band: ProjectionBand) -> Option<PixelLaneLine> {
    let line = line?;
    let (Some(x_bottom), Some(x_top)) = (line.x_at(band.y_bottom), line.x_at(band.y_top)) else {
        warn!(
            "Lanes: {:?} line with slope {} cannot be projected",
            line.side, line.slope
        );
        return None;
    };
    Some(PixelLaneLine {
        side: line.side,
        bottom: [x_bottom, band.y_bottom],
        top: [x_top, band.y_top],
    })
}

/// Project both sides of a fit for a frame of height `h`.
pub fn lane_lines(fit: &LaneFit, h: usize) -> (Option<PixelLaneLine>, Option<PixelLaneLine>) {
    let band = ProjectionBand::for_height(h);
    (
        project_lane(fit.left.as_ref(), band),
        project_lane(fit.right.as_ref(), band),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_spans_bottom_to_horizon() {
        let band = ProjectionBand::for_height(500);
        assert_eq!(band.y_bottom, 500.0);
        assert_eq!(band.y_top, 300.0);
    }

    #[test]
    fn endpoints_lie_on_the_line() {
        let line = LaneLine::new(-0.8, 620.0, LaneSide::Left);
        let band = ProjectionBand::for_height(480);
        let px = project_lane(Some(&line), band).expect("projectable");
        for [x, y] in [px.bottom, px.top] {
            let back = line.y_at(x);
            assert!((back - y).abs() < 1e-3, "y={y} reconstructed={back}");
        }
        assert_eq!(px.bottom[1], 480.0);
        assert_eq!(px.top[1], 288.0);
    }

    #[test]
    fn exact_values_for_unit_slope() {
        let line = LaneLine::new(1.0, -100.0, LaneSide::Right);
        let px = project_lane(Some(&line), ProjectionBand::for_height(500)).expect("projectable");
        assert_eq!(px.bottom, [600.0, 500.0]);
        assert_eq!(px.top, [400.0, 300.0]);
        assert_eq!(px.to_pixels(), ((600, 500), (400, 300)));
    }

    #[test]
    fn horizontal_or_missing_lines_are_not_projected() {
        let band = ProjectionBand::for_height(100);
        let flat = LaneLine::new(0.0, 50.0, LaneSide::Right);
        assert!(project_lane(Some(&flat), band).is_none());
        assert!(project_lane(None, band).is_none());
    }

    #[test]
    fn lane_lines_of_empty_fit_are_absent() {
        let (l, r) = lane_lines(&LaneFit::default(), 240);
        assert!(l.is_none() && r.is_none());
    }
}
