use super::*;
use crate::foundation::core::FrameIndex;

fn build() -> (ShapeDanceScene, SceneSetup) {
    let setup = SceneSetup::full_hd(120);
    (ShapeDanceScene::new(ShapeDanceParams::default(), setup).unwrap(), setup)
}

#[test]
fn shapes_pop_in_by_delay() {
    let (s, setup) = build();
    let ctx = setup.ctx(FrameIndex(5));
    let first = s.dancer(0, 5.0, &ctx).unwrap();
    let second = s.dancer(1, 5.0, &ctx).unwrap();
    assert!(first.scale.x > 0.0);
    assert_eq!(second.scale.x, 0.0);
}

#[test]
fn rotation_extends_past_one_turn() {
    let (s, setup) = build();
    let ctx = setup.ctx(FrameIndex(90));
    let d = s.dancer(0, 90.0, &ctx).unwrap();
    assert!((d.rotation_deg - 540.0).abs() < 1e-9);
    // Before its delay the last dancer spins backwards.
    let last = s.dancer(5, 10.0, &ctx).unwrap();
    assert!(last.rotation_deg < 0.0);
}

#[test]
fn bounce_is_bounded() {
    let (s, setup) = build();
    for f in 0..120 {
        let ctx = setup.ctx(FrameIndex(f));
        let d = s.dancer(2, f as f64, &ctx).unwrap();
        let rest_y = 350.0 + 50.0;
        assert!((d.center.y - rest_y).abs() <= 30.0 + 1e-9);
    }
}

#[test]
fn squares_are_rounded() {
    let (s, setup) = build();
    let ctx = setup.ctx(FrameIndex(30));
    assert_eq!(s.dancer(1, 30.0, &ctx).unwrap().shape, Shape::RoundedRect(15.0));
    assert!(s.dancer(6, 30.0, &ctx).is_none());
}

#[test]
fn spring_overshoots_then_settles() {
    let (s, setup) = build();
    let ctx = setup.ctx(FrameIndex(0));
    let peak = (0..60)
        .map(|f| s.dancer(0, f as f64, &ctx).unwrap().scale.x)
        .fold(0.0, f64::max);
    assert!(peak > 1.0);
    let settled = s.dancer(0, 119.0, &ctx).unwrap().scale.x;
    assert!((settled - 1.0).abs() < 0.01);
}
