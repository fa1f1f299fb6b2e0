mod common;

use ndarray::Array3;

use starstack_core::error::StarstackError;
use starstack_core::frame::Frame;
use starstack_core::stack::{mean_stack, CombineMethod, Compositor};

#[test]
fn test_identical_frames_unchanged() {
    let frame = common::pattern_frame(16, 16);
    let mut compositor = Compositor::for_reference(&frame, CombineMethod::Mean);
    for _ in 0..5 {
        compositor.include(&frame).unwrap();
    }
    assert_eq!(compositor.count(), 5);
    let result = compositor.finalize().unwrap();
    assert_eq!(result.data, frame.data);
    assert_eq!(result.bit_depth, 16);
}

#[test]
fn test_skipped_frame_excluded_from_mean() {
    let values = [100.0, 200.0, 9999.0, 300.0];
    let skipped = 2;

    let mut compositor = Compositor::new((4, 4, 1), 16, CombineMethod::Mean);
    for (i, &v) in values.iter().enumerate() {
        if i == skipped {
            continue;
        }
        compositor.include(&common::constant_frame(4, 4, 1, v, 16)).unwrap();
    }
    let result = compositor.finalize().unwrap();
    assert!(result.data.iter().all(|&v| v == 200.0));
}

#[test]
fn test_zero_frames_fails() {
    let compositor = Compositor::new((4, 4, 3), 16, CombineMethod::Mean);
    assert!(matches!(
        compositor.finalize(),
        Err(StarstackError::EmptyComposite)
    ));
}

#[test]
fn test_shape_mismatch_rejected_without_side_effects() {
    let mut compositor = Compositor::new((4, 4, 1), 16, CombineMethod::Mean);
    compositor.include(&common::constant_frame(4, 4, 1, 10.0, 16)).unwrap();

    let wrong_size = common::constant_frame(4, 5, 1, 1000.0, 16);
    let wrong_channels = common::constant_frame(4, 4, 3, 1000.0, 16);
    assert!(matches!(
        compositor.include(&wrong_size),
        Err(StarstackError::ShapeMismatch { .. })
    ));
    assert!(compositor.include(&wrong_channels).is_err());
    assert_eq!(compositor.count(), 1);

    let result = compositor.finalize().unwrap();
    assert!(result.data.iter().all(|&v| v == 10.0));
}

#[test]
fn test_values_clipped_only_at_finalize() {
    let mut compositor = Compositor::new((2, 2, 1), 16, CombineMethod::Mean);
    compositor.include(&common::constant_frame(2, 2, 1, 70_000.0, 16)).unwrap();
    compositor.include(&common::constant_frame(2, 2, 1, 50_000.0, 16)).unwrap();
    let result = compositor.finalize().unwrap();
    assert!(result.data.iter().all(|&v| v == 60_000.0));

    let mut over = Compositor::new((2, 2, 1), 16, CombineMethod::Mean);
    over.include(&common::constant_frame(2, 2, 1, 90_000.0, 16)).unwrap();
    assert!(over.finalize().unwrap().data.iter().all(|&v| v == 65_535.0));

    let mut under = Compositor::new((2, 2, 1), 8, CombineMethod::Mean);
    under.include(&common::constant_frame(2, 2, 1, -40.0, 8)).unwrap();
    assert!(under.finalize().unwrap().data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_finalize_quantizes_to_integers() {
    let mut compositor = Compositor::new((1, 1, 1), 8, CombineMethod::Mean);
    compositor.include(&common::constant_frame(1, 1, 1, 1.0, 8)).unwrap();
    compositor.include(&common::constant_frame(1, 1, 1, 2.0, 8)).unwrap();
    compositor.include(&common::constant_frame(1, 1, 1, 2.0, 8)).unwrap();
    let result = compositor.finalize().unwrap();
    assert_eq!(result.data[[0, 0, 0]], 2.0);
}

#[test]
fn test_order_independent() {
    let a = common::constant_frame(3, 3, 1, 10.0, 16);
    let b = common::constant_frame(3, 3, 1, 40.0, 16);
    let c = common::pattern_frame(3, 3);

    let mut forward = Compositor::new((3, 3, 1), 16, CombineMethod::Mean);
    let mut backward = Compositor::new((3, 3, 1), 16, CombineMethod::Mean);
    for f in [&a, &b, &c] {
        forward.include(f).unwrap();
    }
    for f in [&c, &b, &a] {
        backward.include(f).unwrap();
    }
    assert_eq!(forward.finalize().unwrap().data, backward.finalize().unwrap().data);
}

#[test]
fn test_max_and_min_methods() {
    let mut low = Array3::<f32>::zeros((1, 2, 1));
    low[[0, 0, 0]] = 5.0;
    low[[0, 1, 0]] = 50.0;
    let mut high = Array3::<f32>::zeros((1, 2, 1));
    high[[0, 0, 0]] = 30.0;
    high[[0, 1, 0]] = 20.0;
    let frames = [Frame::new(low, 8), Frame::new(high, 8)];

    let mut max = Compositor::new((1, 2, 1), 8, CombineMethod::Max);
    let mut min = Compositor::new((1, 2, 1), 8, CombineMethod::Min);
    for f in &frames {
        max.include(f).unwrap();
        min.include(f).unwrap();
    }
    let max = max.finalize().unwrap();
    let min = min.finalize().unwrap();
    assert_eq!(max.data.as_slice().unwrap(), &[30.0, 50.0]);
    assert_eq!(min.data.as_slice().unwrap(), &[5.0, 20.0]);
}

#[test]
fn test_mean_stack() {
    let frames: Vec<Frame> = [0.0, 1000.0]
        .iter()
        .map(|&v| common::constant_frame(4, 4, 2, v, 16))
        .collect();
    let result = mean_stack(&frames).unwrap();
    assert!(result.data.iter().all(|&v| v == 500.0));
    assert!(mean_stack(&[]).is_err());
}

#[test]
fn test_method_display() {
    assert_eq!(format!("{}", CombineMethod::Mean), "Mean");
    assert_eq!(format!("{}", CombineMethod::Max), "Max");
    assert_eq!(format!("{}", CombineMethod::Min), "Min");
}
