use super::*;
use crate::foundation::core::{FrameIndex, Fps};

fn ctx(frame: u64) -> SceneCtx {
    SceneCtx {
        frame: FrameIndex(frame),
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::FULL_HD,
        duration: 300,
    }
}

#[test]
fn fades_in_from_zero() {
    let h = Heading::top(Canvas::FULL_HD, "Network Particles", Some("connected by distance")).unwrap();
    assert_eq!(h.opacity(&ctx(0)), 0.0);
    assert!(h.opacity(&ctx(10)) > 0.5);
    assert!((h.opacity(&ctx(120)) - 1.0).abs() < 1e-3);
}

#[test]
fn subtitle_sits_below_title() {
    let h = Heading::top(Canvas::FULL_HD, "A", Some("b")).unwrap();
    let sprites = h.sprites(&ctx(30));
    assert_eq!(sprites.len(), 2);
    assert_eq!(sprites[0].shape, Shape::Label("A".into()));
    assert!(sprites[1].center.y > sprites[0].center.y);
    assert_eq!(sprites[0].opacity, sprites[1].opacity);
}

#[test]
fn title_only_heading_has_one_sprite() {
    let h = Heading::centered(Canvas::FULL_HD, "Solo", None).unwrap();
    let sprites = h.sprites(&ctx(5));
    assert_eq!(sprites.len(), 1);
    assert_eq!(sprites[0].center, Canvas::FULL_HD.center());
}

#[test]
fn frame_counter_is_zero_padded() {
    let s = frame_counter(&ctx(7), 7, 0.1);
    assert_eq!(s.shape, Shape::Label("007".into()));
    assert!((s.color.a - 0.1).abs() < 1e-12);
    let s = frame_counter(&ctx(1234), 1234, 0.1);
    assert_eq!(s.shape, Shape::Label("1234".into()));
}

#[test]
fn delayed_heading_stays_hidden_until_its_start() {
    let h = Heading::centered(Canvas::FULL_HD, "Late", None)
        .unwrap()
        .delayed(20.0);
    assert_eq!(h.opacity(&ctx(0)), 0.0);
    assert_eq!(h.opacity(&ctx(20)), 0.0);
    assert!(h.opacity(&ctx(30)) > 0.5);
}
