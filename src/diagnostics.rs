//! Per-frame diagnostics returned alongside the lane decision.
use serde::{Deserialize, Serialize};

/// Counts collected while classifying raw segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    pub total: usize,
    /// Segments with `x1 == x2` (no slope).
    pub vertical_discarded: usize,
    /// Segments rejected by the optional slope band.
    pub out_of_band: usize,
    pub left: usize,
    pub right: usize,
}

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Elapsed time of the first stage named `label`.
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneDiagnostics {
    /// Non-zero pixels of the edge map before ROI masking (image input only).
    pub edge_pixels: Option<usize>,
    /// Non-zero pixels left after ROI masking (image input only).
    pub masked_edge_pixels: Option<usize>,
    pub segments: SegmentStats,
    pub timing: TimingBreakdown,
}
