/// Frame size used by the synthetic road scenes.
pub const ROAD_W: usize = 320;
pub const ROAD_H: usize = 240;
/// Where the painted lane markings converge.
pub const ROAD_VP: (f32, f32) = (160.0, 96.0);

const ASPHALT: u8 = 60;
const PAINT: u8 = 230;
const MARKING_HALF_WIDTH: f32 = 2.5;
const MARKING_TOP_Y: usize = 130;

/// Generates a dark road with bright lane markings converging at `ROAD_VP`.
///
/// The left marking reaches the bottom edge at x=20, the right one at x=300.
/// Markings are painted from `MARKING_TOP_Y` down to the last row.
pub fn road_rgb(left: bool, right: bool) -> Vec<u8> {
    let (w, h) = (ROAD_W, ROAD_H);
    let mut img = vec![ASPHALT; w * h * 3];
    let mut paint_line = |x_bottom: f32| {
        let slope = (ROAD_VP.1 - h as f32) / (ROAD_VP.0 - x_bottom);
        for y in MARKING_TOP_Y..h {
            let xc = ROAD_VP.0 + (y as f32 - ROAD_VP.1) / slope;
            for x in 0..w {
                if (x as f32 - xc).abs() <= MARKING_HALF_WIDTH {
                    let i = (y * w + x) * 3;
                    img[i..i + 3].fill(PAINT);
                }
            }
        }
    };
    if left {
        paint_line(20.0);
    }
    if right {
        paint_line(300.0);
    }
    img
}
