mod common;

use approx::assert_abs_diff_eq;
use ndarray::{Array2, Array3};

use starstack_core::align::{refine_centroid, refine_centroid_frame};
use starstack_core::frame::{Frame, RoughPick, StarPosition};

#[test]
fn test_single_bright_pixel() {
    let mut data = Array2::<f32>::zeros((64, 64));
    data[[17, 33]] = 5000.0;

    let refined = refine_centroid(&data, RoughPick::new(30, 20), 8);
    assert_abs_diff_eq!(refined.x, 33.0, epsilon = 1e-9);
    assert_abs_diff_eq!(refined.y, 17.0, epsilon = 1e-9);
}

#[test]
fn test_gaussian_subpixel_center_for_any_containing_window() {
    let mut data = Array2::<f32>::zeros((64, 64));
    common::add_star(&mut data, 40.3, 25.7, 1.5, 1000.0);

    for half_size in [8, 10, 20, 30] {
        let refined = refine_centroid(&data, RoughPick::new(40, 26), half_size);
        assert_abs_diff_eq!(refined.x, 40.3, epsilon = 1e-3);
        assert_abs_diff_eq!(refined.y, 25.7, epsilon = 1e-3);
    }
}

#[test]
fn test_dark_window_returns_rough_pick() {
    let data = Array2::<f32>::zeros((32, 32));
    let refined = refine_centroid(&data, RoughPick::new(12, 9), 5);
    assert_eq!(refined, StarPosition::new(12.0, 9.0));
}

#[test]
fn test_dark_window_next_to_bright_region() {
    // The star sits outside the window, so the window itself is dark.
    let mut data = Array2::<f32>::zeros((64, 64));
    data[[50, 50]] = 1000.0;
    let refined = refine_centroid(&data, RoughPick::new(10, 10), 5);
    assert_eq!(refined, StarPosition::new(10.0, 10.0));
}

#[test]
fn test_window_clamped_at_frame_corner() {
    let mut data = Array2::<f32>::zeros((32, 32));
    common::add_star(&mut data, 1.0, 2.0, 0.6, 1000.0);

    let refined = refine_centroid(&data, RoughPick::new(0, 0), 10);
    assert!((refined.x - 1.0).abs() < 0.1, "x={}", refined.x);
    assert!((refined.y - 2.0).abs() < 0.1, "y={}", refined.y);
}

#[test]
fn test_window_clamped_at_far_edge() {
    let mut data = Array2::<f32>::zeros((32, 48));
    data[[31, 47]] = 10.0;
    let refined = refine_centroid(&data, RoughPick::new(46, 30), 6);
    assert_abs_diff_eq!(refined.x, 47.0, epsilon = 1e-9);
    assert_abs_diff_eq!(refined.y, 31.0, epsilon = 1e-9);
}

#[test]
fn test_pick_outside_frame_keeps_rough_pick() {
    let data = Array2::<f32>::from_elem((16, 16), 100.0);
    let refined = refine_centroid(&data, RoughPick::new(-50, 200), 5);
    assert_eq!(refined, StarPosition::new(-50.0, 200.0));
}

#[test]
fn test_frame_centroid_uses_channel_mean() {
    // Star only in the red channel still pulls the luminance centroid.
    let mut data = Array3::<f32>::zeros((32, 32, 3));
    data[[10, 20, 0]] = 300.0;
    data[[10, 22, 1]] = 300.0;
    let frame = Frame::new(data, 16);

    let refined = refine_centroid_frame(&frame, RoughPick::new(21, 10), 4);
    assert_abs_diff_eq!(refined.x, 21.0, epsilon = 1e-9);
    assert_abs_diff_eq!(refined.y, 10.0, epsilon = 1e-9);
}
