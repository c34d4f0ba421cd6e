use std::fmt;

/// Errors raised at the pipeline boundary.
///
/// Degenerate geometry (missing lane, zero slope, parallel lanes) is never an
/// error; it surfaces as `None` or an off-track status instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaneError {
    /// Malformed frame or segment input, rejected before any geometry runs.
    InvalidInput(String),
    /// Mask and edge map sizes disagree.
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            LaneError::SizeMismatch { expected, actual } => write!(
                f,
                "image size mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for LaneError {}
