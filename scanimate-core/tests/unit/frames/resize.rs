use super::*;
use image::{Rgba, RgbaImage};

fn frame(w: u32, h: u32) -> Frame {
    Frame::new(RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255])))
}

#[test]
fn strict_passes_frames_through() {
    let out = unify_sizes(vec![frame(4, 4), frame(8, 2)], ResizeStrategy::Strict).unwrap();
    assert_eq!(out[0].size(), Size::new(4, 4));
    assert_eq!(out[1].size(), Size::new(8, 2));
}

#[test]
fn first_matches_frame_zero() {
    let out = unify_sizes(
        vec![frame(6, 3), frame(12, 6).with_label("big.png")],
        ResizeStrategy::First,
    )
    .unwrap();
    assert!(out.iter().all(|f| f.size() == Size::new(6, 3)));
    assert_eq!(out[1].label(), Some("big.png"));
}

#[test]
fn min_takes_each_axis_independently() {
    let out = unify_sizes(vec![frame(10, 4), frame(6, 8)], ResizeStrategy::Min).unwrap();
    assert!(out.iter().all(|f| f.size() == Size::new(6, 4)));
}

#[test]
fn resizing_a_solid_frame_keeps_its_color() {
    let out = unify_sizes(vec![frame(2, 2), frame(8, 8)], ResizeStrategy::First).unwrap();
    for p in out[1].pixels().pixels() {
        for (got, want) in p.0.iter().zip([10u8, 20, 30, 255]) {
            assert!(got.abs_diff(want) <= 1, "{p:?}");
        }
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(
        unify_sizes(Vec::new(), ResizeStrategy::First),
        Err(ScanError::EmptyFrameSet)
    ));
}

#[test]
fn strategy_names_round_trip() {
    for s in [
        ResizeStrategy::Strict,
        ResizeStrategy::First,
        ResizeStrategy::Min,
    ] {
        assert_eq!(s.as_str().parse::<ResizeStrategy>().unwrap(), s);
    }
    assert!("biggest".parse::<ResizeStrategy>().is_err());
}
