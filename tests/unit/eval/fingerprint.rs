use super::*;
use crate::{
    config::presets::preset,
    eval::evaluator::Evaluator,
    foundation::core::FrameIndex,
};

fn state(name: &str, f: u64) -> FrameState {
    let reel = preset(name).unwrap().build().unwrap();
    Evaluator::eval_frame(&reel, FrameIndex(f)).unwrap()
}

#[test]
fn same_frame_same_fingerprint() {
    assert_eq!(
        fingerprint_frame(&state("network", 120)),
        fingerprint_frame(&state("network", 120))
    );
}

#[test]
fn opacity_change_changes_fingerprint() {
    let a = state("network", 10);
    let mut b = a.clone();
    b.sprites[0].opacity *= 0.5;
    assert_ne!(fingerprint_frame(&a), fingerprint_frame(&b));
}

#[test]
fn link_set_is_hashed() {
    let a = state("network", 10);
    let mut b = a.clone();
    b.links.clear();
    b.link_color = None;
    assert_ne!(fingerprint_frame(&a), fingerprint_frame(&b));
}

#[test]
fn display_is_32_hex_digits() {
    let fp = FrameFingerprint { hi: 1, lo: 0xff };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ff");
}
