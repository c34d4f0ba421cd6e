use crate::diagnostics::LaneDiagnostics;
use crate::image::GrayImageU8;
use crate::lanes::{LaneLine, PixelLaneLine, RawSegment, TrackResult};
use serde::Serialize;

/// Everything produced for one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneReport {
    pub width: usize,
    pub height: usize,
    pub left: Option<LaneLine>,
    pub right: Option<LaneLine>,
    pub left_pixels: Option<PixelLaneLine>,
    pub right_pixels: Option<PixelLaneLine>,
    pub track: TrackResult,
    /// Raw segments the lines were fitted from.
    pub segments: Vec<RawSegment>,
    pub diagnostics: LaneDiagnostics,
    /// ROI-masked edge map the segments were detected on; `None` when the
    /// report was built from segments.
    #[serde(skip)]
    pub masked_edges: Option<GrayImageU8>,
}

impl LaneReport {
    #[inline]
    pub fn on_track(&self) -> bool {
        self.track.on_track
    }

    /// Projected lines that exist, left first.
    pub fn pixel_lines(&self) -> Vec<PixelLaneLine> {
        self.left_pixels.into_iter().chain(self.right_pixels).collect()
    }
}
