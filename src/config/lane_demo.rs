use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use crate::lanes::LaneFitParams;
use crate::overlay::{LANE_COLOR, LANE_THICKNESS, SEGMENT_THICKNESS};
use crate::pipeline::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edges: EdgeParams,
    #[serde(default)]
    pub hough: HoughParams,
    #[serde(default)]
    pub lanes: LaneFitParams,
    #[serde(default)]
    pub overlay: OverlayConfig,
    pub output: LaneDemoOutputConfig,
}

impl LaneDemoConfig {
    pub fn lane_params(&self) -> LaneParams {
        LaneParams {
            edges: self.edges.clone(),
            hough: self.hough.clone(),
            lanes: self.lanes.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub lane_color: [u8; 3],
    pub lane_thickness: u32,
    pub segment_thickness: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            lane_color: LANE_COLOR,
            lane_thickness: LANE_THICKNESS,
            segment_thickness: SEGMENT_THICKNESS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LaneDemoOutputConfig {
    /// Frame with the fitted lane lines.
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    /// Frame with the raw segments colored by side.
    #[serde(default)]
    pub segments_image: Option<PathBuf>,
    /// Binary edge map after ROI masking.
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<LaneDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
