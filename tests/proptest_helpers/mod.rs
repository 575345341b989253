#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use reformat_labels::ir::{BBoxXYXY, Pixel};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Tolerance for values that went through a divide and a multiply.
pub fn eps_pixel(image_w: u32, image_h: u32) -> f64 {
    image_w.max(image_h) as f64 * 1e-9
}

pub fn arb_image_size() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=8192, 1u32..=8192)
}

/// Corners anywhere in (and somewhat beyond) the image, in any order.
pub fn arb_corners(width: u32, height: u32) -> impl Strategy<Value = BBoxXYXY<Pixel>> {
    let w = width as f64;
    let h = height as f64;
    (-w..2.0 * w, -h..2.0 * h, -w..2.0 * w, -h..2.0 * h)
        .prop_map(|(x1, y1, x2, y2)| BBoxXYXY::from_xyxy(x1, y1, x2, y2))
}

/// Corners inside `[0, width] x [0, height]`, in any order.
pub fn arb_corners_within(width: u32, height: u32) -> impl Strategy<Value = BBoxXYXY<Pixel>> {
    let w = width as f64;
    let h = height as f64;
    (0.0..=w, 0.0..=h, 0.0..=w, 0.0..=h)
        .prop_map(|(x1, y1, x2, y2)| BBoxXYXY::from_xyxy(x1, y1, x2, y2))
}

/// An image size together with a box for it.
pub fn arb_sized_box() -> impl Strategy<Value = (u32, u32, BBoxXYXY<Pixel>)> {
    arb_image_size().prop_flat_map(|(w, h)| (Just(w), Just(h), arb_corners(w, h)))
}

pub fn arb_sized_box_within() -> impl Strategy<Value = (u32, u32, BBoxXYXY<Pixel>)> {
    arb_image_size().prop_flat_map(|(w, h)| (Just(w), Just(h), arb_corners_within(w, h)))
}
