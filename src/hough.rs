//! Progressive probabilistic Hough transform over a binary edge map.
//!
//! This is the default raw segment detector feeding the lane engine. The
//! algorithm follows the classic progressive scheme:
//!
//! 1. Visit edge pixels in a random (seeded, reproducible) order.
//! 2. Each pixel votes for every `(θ, ρ)` line through it; when the best bin
//!    for that pixel reaches `threshold`, walk from the pixel along that line
//!    in both directions, tolerating runs of up to `max_line_gap` missing
//!    pixels.
//! 3. Pixels on the walked span are removed from the edge set; if the span is
//!    at least `min_line_length` long along x or y, their votes are withdrawn
//!    and the span is reported as a segment.
//!
//! Walking uses 16-bit fixed point along the minor axis so results do not
//! depend on float rounding of the step.
use crate::image::{GrayImageU8, ImageView};
use crate::lanes::RawSegment;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const SHIFT: u32 = 16;

/// Finds straight segments in a binary edge image.
pub trait SegmentDetector {
    fn detect(&self, edges: &GrayImageU8) -> Vec<RawSegment>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angle resolution of the accumulator in radians.
    pub theta: f32,
    /// Minimum votes before a line is walked.
    pub threshold: u32,
    /// Minimum extent (along x or y) of a reported segment.
    pub min_line_length: f32,
    /// Maximum run of missing pixels bridged while walking.
    pub max_line_gap: f32,
    /// Stop after this many segments.
    pub max_lines: usize,
    /// Seed of the pixel visiting order.
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta: std::f32::consts::PI / 180.0,
            threshold: 20,
            min_line_length: 10.0,
            max_line_gap: 100.0,
            max_lines: 4096,
            seed: 0x9E37_79B9_7F4A_7C15,
        }
    }
}

/// Default segment detector.
#[derive(Clone, Debug, Default)]
pub struct ProbabilisticHough {
    pub params: HoughParams,
}

impl ProbabilisticHough {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }
}

impl SegmentDetector for ProbabilisticHough {
    fn detect(&self, edges: &GrayImageU8) -> Vec<RawSegment> {
        hough_lines_p(edges, &self.params)
    }
}

/// Small xorshift generator; only used to shuffle the visiting order.
struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x2545_F491_4F6C_DD1D } else { seed })
    }

    fn below(&mut self, n: usize) -> usize {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x % n as u64) as usize
    }
}

struct Accumulator {
    num_rho: usize,
    /// `(cos θ / ρ, sin θ / ρ)` per angle bin.
    trig: Vec<(f32, f32)>,
    votes: Vec<u32>,
}

impl Accumulator {
    fn new(w: usize, h: usize, params: &HoughParams) -> Self {
        let num_angle = ((std::f32::consts::PI / params.theta).round() as usize).max(1);
        let num_rho = ((((w + h) * 2 + 1) as f32 / params.rho).round() as usize).max(1);
        let irho = 1.0 / params.rho;
        let trig = (0..num_angle)
            .map(|n| {
                let ang = n as f32 * params.theta;
                (ang.cos() * irho, ang.sin() * irho)
            })
            .collect();
        Self {
            num_rho,
            trig,
            votes: vec![0; num_angle * num_rho],
        }
    }

    #[inline]
    fn bin(&self, n: usize, x: usize, y: usize) -> usize {
        let (c, s) = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round() as i64 + (self.num_rho as i64 - 1) / 2;
        n * self.num_rho + r.clamp(0, self.num_rho as i64 - 1) as usize
    }

    /// Add the votes of `(x, y)`, returning the best `(votes, angle bin)`.
    fn vote(&mut self, x: usize, y: usize) -> (u32, usize) {
        let mut best = (0u32, 0usize);
        for n in 0..self.trig.len() {
            let idx = self.bin(n, x, y);
            self.votes[idx] += 1;
            if self.votes[idx] > best.0 {
                best = (self.votes[idx], n);
            }
        }
        best
    }

    fn unvote(&mut self, x: usize, y: usize) {
        for n in 0..self.trig.len() {
            let idx = self.bin(n, x, y);
            self.votes[idx] = self.votes[idx].saturating_sub(1);
        }
    }
}

/// Walk state along one line, stepping one pixel on the major axis.
#[derive(Clone, Copy)]
struct Walker {
    x_major: bool,
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
}

impl Walker {
    fn new(px: usize, py: usize, dir_x: f32, dir_y: f32) -> Self {
        let (px, py) = (px as i64, py as i64);
        let half = 1i64 << (SHIFT - 1);
        if dir_x.abs() > dir_y.abs() {
            Self {
                x_major: true,
                x: px,
                y: (py << SHIFT) + half,
                dx: if dir_x > 0.0 { 1 } else { -1 },
                dy: (dir_y * (1i64 << SHIFT) as f32 / dir_x.abs()).round() as i64,
            }
        } else {
            Self {
                x_major: false,
                x: (px << SHIFT) + half,
                y: py,
                dx: (dir_x * (1i64 << SHIFT) as f32 / dir_y.abs()).round() as i64,
                dy: if dir_y > 0.0 { 1 } else { -1 },
            }
        }
    }

    fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            ..self
        }
    }

    #[inline]
    fn pixel(&self) -> (i64, i64) {
        if self.x_major {
            (self.x, self.y >> SHIFT)
        } else {
            (self.x >> SHIFT, self.y)
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

/// Detect line segments in `edges` (non-zero pixels are edge points).
pub fn hough_lines_p(edges: &GrayImageU8, params: &HoughParams) -> Vec<RawSegment> {
    let (w, h) = (edges.width(), edges.height());
    let mut segments = Vec::new();
    if w == 0 || h == 0 || params.max_lines == 0 {
        return segments;
    }
    let valid_step = |v: f32| v.is_finite() && v > 0.0;
    if !valid_step(params.rho) || !valid_step(params.theta) {
        warn!(
            "Hough: rho={} theta={} must be finite and positive; no segments",
            params.rho, params.theta
        );
        return segments;
    }

    let mut mask: Vec<bool> = edges.data().iter().map(|&v| v != 0).collect();
    let mut points: Vec<(usize, usize)> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| mask[y * w + x])
        .collect();
    let total_points = points.len();

    let mut acc = Accumulator::new(w, h, params);
    let mut rng = XorShift64::new(params.seed);
    let max_gap = params.max_line_gap.max(0.0) as i64;
    let min_len = params.min_line_length.max(0.0);

    while !points.is_empty() {
        let pick = rng.below(points.len());
        let (px, py) = points.swap_remove(pick);
        if !mask[py * w + px] {
            continue;
        }

        let (best_votes, best_n) = acc.vote(px, py);
        if best_votes < params.threshold {
            continue;
        }

        let (c, s) = acc.trig[best_n];
        let start = Walker::new(px, py, -s, c);

        let mut line_end = [(px as i64, py as i64); 2];
        for (k, end) in line_end.iter_mut().enumerate() {
            let mut walker = if k == 0 { start } else { start.reversed() };
            let mut gap = 0i64;
            loop {
                let (x, y) = walker.pixel();
                if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                    break;
                }
                if mask[y as usize * w + x as usize] {
                    gap = 0;
                    *end = (x, y);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                walker.advance();
            }
        }

        let good_line = (line_end[1].0 - line_end[0].0).abs() as f32 >= min_len
            || (line_end[1].1 - line_end[0].1).abs() as f32 >= min_len;

        for (k, end) in line_end.iter().enumerate() {
            let mut walker = if k == 0 { start } else { start.reversed() };
            loop {
                let (x, y) = walker.pixel();
                if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                    break;
                }
                let idx = y as usize * w + x as usize;
                if mask[idx] {
                    if good_line {
                        acc.unvote(x as usize, y as usize);
                    }
                    mask[idx] = false;
                }
                if (x, y) == *end {
                    break;
                }
                walker.advance();
            }
        }

        if good_line {
            segments.push(RawSegment::new(
                line_end[0].0 as i32,
                line_end[0].1 as i32,
                line_end[1].0 as i32,
                line_end[1].1 as i32,
            ));
            if segments.len() >= params.max_lines {
                break;
            }
        }
    }

    debug!(
        "Hough: {}x{} edge_points={} segments={}",
        w,
        h,
        total_points,
        segments.len()
    );
    segments
}
