use super::*;
use crate::foundation::core::FrameIndex;

fn build() -> (FloatFieldScene, SceneSetup) {
    let setup = SceneSetup::full_hd(120);
    (FloatFieldScene::new(FloatFieldParams::default(), setup).unwrap(), setup)
}

#[test]
fn motes_are_absent_before_their_delay() {
    let (s, _) = build();
    for (i, m) in s.motes.iter().enumerate() {
        if m.delay > 0.0 {
            assert!(s.mote(i, 0.0).is_none());
        }
        assert!(s.mote(i, m.delay + 0.5).is_some());
    }
}

#[test]
fn all_motes_visible_after_max_delay() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(30)));
    assert_eq!(frame.sprites.iter().filter(|sp| sp.layer == "mote").count(), 80);
}

#[test]
fn fade_in_caps_at_point_eight() {
    let (s, _) = build();
    let m = s.motes[5];
    let sp = s.mote(5, m.delay + 10.0).unwrap();
    assert!((sp.opacity - 0.4).abs() < 1e-9);
    let sp = s.mote(5, m.delay + 100.0).unwrap();
    assert!((sp.opacity - 0.8).abs() < 1e-12);
}

#[test]
fn motes_stay_near_home() {
    let (s, _) = build();
    for f in [40.0, 77.0, 119.0] {
        for (i, m) in s.motes.iter().enumerate() {
            let sp = s.mote(i, f).unwrap();
            assert!((sp.center.x - m.home.x).abs() <= 30.0 + 1e-9);
            assert!((sp.center.y - m.home.y).abs() <= 50.0 + 1e-9);
            assert!(sp.size.width <= m.size * 1.3 + 1e-9);
        }
    }
}

#[test]
fn palette_drives_colors() {
    let (s, _) = build();
    let palette = FloatFieldParams::default().palette;
    assert!(s.motes.iter().all(|m| palette.contains(&m.color)));
    let empty = FloatFieldParams {
        palette: Vec::new(),
        ..FloatFieldParams::default()
    };
    assert!(FloatFieldScene::new(empty, SceneSetup::full_hd(10)).is_err());
}

#[test]
fn titles_fade_in_on_their_own_schedule() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(25)));
    let title = frame.sprites.iter().find(|sp| sp.layer == "title").unwrap();
    let sub = frame.sprites.iter().find(|sp| sp.layer == "subtitle").unwrap();
    assert!((title.opacity - 25.0 / 30.0).abs() < 1e-9);
    assert!((sub.opacity - 5.0 / 30.0).abs() < 1e-9);
}
