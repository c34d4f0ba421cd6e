use lane_tracker::lanes::{
    average_slope_intercept, classify_segment, evaluate_track, lane_lines, project_lane,
    ProjectionBand, TrackStatus,
};
use lane_tracker::{LaneError, LaneFitParams, LaneLine, LaneSide, LaneTracker, RawSegment};

fn fit(segments: &[RawSegment]) -> lane_tracker::lanes::LaneFit {
    average_slope_intercept(segments, &LaneFitParams::default())
}

#[test]
fn classification_follows_slope_sign() {
    let cases = [
        (RawSegment::new(0, 10, 10, 0), Some(LaneSide::Left)),
        (RawSegment::new(0, 0, 10, 1), Some(LaneSide::Right)),
        (RawSegment::new(0, 5, 10, 5), Some(LaneSide::Right)),
        (RawSegment::new(10, 0, 0, 3), Some(LaneSide::Left)),
        (RawSegment::new(4, 0, 4, 100), None),
    ];
    for (seg, expected) in cases {
        assert_eq!(
            classify_segment(&seg).map(|c| c.side),
            expected,
            "segment {seg:?}"
        );
    }
}

#[test]
fn vertical_segments_never_reach_a_group() {
    let f = fit(&[RawSegment::new(4, 0, 4, 100), RawSegment::new(9, 3, 9, 50)]);
    assert!(f.left.is_none() && f.right.is_none());
    assert_eq!(f.stats.vertical_discarded, 2);
}

#[test]
fn equal_length_segments_average_slopes() {
    // each of length 10: slopes -3/4, -4/3 (left) and 0.75 (right)
    let f = fit(&[
        RawSegment::new(0, 6, 8, 0),
        RawSegment::new(0, 8, 6, 0),
        RawSegment::new(0, 0, 8, 6),
    ]);
    let left = f.left.expect("left lane");
    let expected = (-0.75 - 4.0 / 3.0) / 2.0;
    assert!((left.slope - expected).abs() < 1e-6, "slope={}", left.slope);
    assert_eq!(f.right.map(|r| r.slope), Some(0.75));
}

#[test]
fn empty_input_is_absent_everywhere() {
    let f = fit(&[]);
    assert!(f.left.is_none() && f.right.is_none());
    let (l, r) = lane_lines(&f, 480);
    assert!(l.is_none() && r.is_none());
    let track = evaluate_track(f.left.as_ref(), f.right.as_ref(), 640, 480);
    assert!(!track.on_track);
}

#[test]
fn projected_endpoints_satisfy_the_line() {
    let band = ProjectionBand::for_height(720);
    for (m, b) in [(-0.5, 900.0), (2.0, -300.0), (0.25, 100.0), (-4.0, 2000.0)] {
        let line = LaneLine::new(m, b, LaneSide::from_slope(m));
        let px = project_lane(Some(&line), band).expect("non-zero slope");
        for (point, y) in [(px.bottom, band.y_bottom), (px.top, band.y_top)] {
            assert_eq!(point[1], y);
            let x_expected = (y - b) / m;
            assert_eq!(point[0], x_expected);
            let back = m * point[0] + b;
            assert!((back - y).abs() < 1e-3, "m={m} b={b}: {back} != {y}");
        }
    }
}

#[test]
fn single_flat_segment_is_right_and_unprojectable() {
    let f = fit(&[RawSegment::new(10, 50, 90, 50)]);
    assert!(f.left.is_none());
    let right = f.right.expect("flat segment classified right");
    assert_eq!(right.side, LaneSide::Right);
    let (_, r) = lane_lines(&f, 100);
    assert!(r.is_none(), "zero slope must not produce endpoints");
}

#[test]
fn documented_vanishing_point_is_on_track() {
    let left = LaneLine::new(-1.0, 300.0, LaneSide::Left);
    let right = LaneLine::new(1.0, -100.0, LaneSide::Right);
    let res = evaluate_track(Some(&left), Some(&right), 400, 500);
    assert_eq!(res.vanishing_point, Some([200.0, 100.0]));
    assert!(res.on_track);
}

#[test]
fn parallel_lines_are_never_on_track() {
    for slope in [-2.0f32, -0.5, 0.0, 0.5, 3.0] {
        for (bl, br) in [(0.0, 0.0), (100.0, 400.0), (-50.0, 50.0)] {
            let left = LaneLine::new(slope, bl, LaneSide::Left);
            let right = LaneLine::new(slope, br, LaneSide::Right);
            let res = evaluate_track(Some(&left), Some(&right), 640, 480);
            assert!(!res.on_track, "slope={slope} bl={bl} br={br}");
            assert_eq!(res.status, TrackStatus::ParallelLanes);
        }
    }
}

#[test]
fn left_only_segments_are_off_track() {
    let segments = [RawSegment::new(0, 400, 200, 200), RawSegment::new(20, 380, 120, 280)];
    let report = LaneTracker::default()
        .process_segments(640, 480, &segments)
        .expect("valid frame");
    assert!(report.left.is_some());
    assert!(report.right.is_none());
    assert!(report.left_pixels.is_some() && report.right_pixels.is_none());
    assert!(!report.on_track());
    assert_eq!(report.track.status, TrackStatus::MissingLane);
}

#[test]
fn flat_coordinate_lists_are_validated() {
    let segments = RawSegment::from_flat(&[0, 400, 200, 200, 400, 200, 600, 400])
        .expect("two segments");
    let report = LaneTracker::default()
        .process_segments(640, 480, &segments)
        .expect("valid frame");
    assert_eq!(report.diagnostics.segments.left, 1);
    assert_eq!(report.diagnostics.segments.right, 1);

    let err = RawSegment::from_flat(&[1, 2, 3, 4, 5]).unwrap_err();
    assert!(matches!(err, LaneError::InvalidInput(_)));
    assert!(err.to_string().starts_with("invalid input"));
}

#[test]
fn segments_spanning_the_whole_coordinate_range_are_handled() {
    let segments = [RawSegment::new(i32::MIN, 0, i32::MAX, 10)];
    let report = LaneTracker::default()
        .process_segments(640, 480, &segments)
        .expect("valid frame");
    let right = report.right.expect("near-flat segment is right");
    assert!(right.slope > 0.0 && right.intercept.is_finite());
    assert!(report.left.is_none());
    assert!(!report.on_track());
    assert_eq!(report.diagnostics.segments.right, 1);
}
