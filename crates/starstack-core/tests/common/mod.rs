#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3};

use starstack_core::frame::Frame;
use starstack_core::io::save_image;

/// Render a Gaussian star of the given peak into `data`, centered at `(cx, cy)`.
pub fn add_star(data: &mut Array2<f32>, cx: f64, cy: f64, sigma: f64, peak: f32) {
    let (h, w) = data.dim();
    for row in 0..h {
        for col in 0..w {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let v = (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
            data[[row, col]] += peak * v as f32;
        }
    }
}

/// 16-bit mono frame with Gaussian stars at `stars` on a black background.
pub fn star_field(h: usize, w: usize, stars: &[(f64, f64)]) -> Frame {
    let mut data = Array2::<f32>::zeros((h, w));
    for &(x, y) in stars {
        add_star(&mut data, x, y, 1.5, 20_000.0);
    }
    Frame::from_mono(data, 16)
}

/// Frame with every sample set to `value`.
pub fn constant_frame(h: usize, w: usize, channels: usize, value: f32, bit_depth: u8) -> Frame {
    Frame::new(Array3::from_elem((h, w, channels), value), bit_depth)
}

/// Deterministic non-trivial 16-bit mono frame.
pub fn pattern_frame(h: usize, w: usize) -> Frame {
    let data = Array2::from_shape_fn((h, w), |(r, c)| ((r * 37 + c * 11) % 251) as f32 * 100.0);
    Frame::from_mono(data, 16)
}

/// Write `frames` into `dir` as `frame_000.tif`, `frame_001.tif`, ...
pub fn write_frames(dir: &Path, frames: &[Frame]) -> Vec<PathBuf> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let path = dir.join(format!("frame_{:03}.tif", i));
            save_image(frame, &path).expect("write test frame");
            path
        })
        .collect()
}
