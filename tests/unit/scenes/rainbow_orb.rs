use super::*;
use crate::foundation::core::FrameIndex;

fn build() -> (RainbowOrbScene, SceneSetup) {
    let setup = SceneSetup::full_hd(300);
    (RainbowOrbScene::new(RainbowOrbParams::default(), setup).unwrap(), setup)
}

#[test]
fn rings_are_hidden_before_their_delay() {
    let (s, _) = build();
    for (i, r) in s.rings.iter().enumerate() {
        if r.delay > 0.0 {
            assert_eq!(s.ring(i, r.delay - 1e-6), None);
        }
        assert!(s.ring(i, r.delay).is_some());
    }
}

#[test]
fn ring_life_ramps_holds_and_fades() {
    let (s, _) = build();
    let d = s.rings[0].delay;
    let at = |p: f64| s.ring(0, d + p * 60.0).unwrap();
    assert!(at(0.0).opacity.abs() < 1e-12);
    assert!((at(0.15).opacity - 0.4).abs() < 1e-9);
    assert!((at(0.5).opacity - 0.8).abs() < 1e-12);
    assert!((at(0.85).opacity - 0.4).abs() < 1e-9);
    assert!((at(0.0).scale - 0.3).abs() < 1e-12);
    assert!((at(0.3).scale - 1.0).abs() < 1e-9);
}

#[test]
fn rings_loop_every_lifetime() {
    let (s, _) = build();
    let d = s.rings[3].delay;
    let a = s.ring(3, d + 10.0).unwrap();
    let b = s.ring(3, d + 70.0).unwrap();
    assert!((a.progress - b.progress).abs() < 1e-9);
    assert!((a.opacity - b.opacity).abs() < 1e-9);
    // Rotation and hue keep advancing across loops.
    assert!(a.rotation != b.rotation || s.rings[3].spin == 0.0);
}

#[test]
fn hues_stay_in_range() {
    let (s, setup) = build();
    for f in [0u64, 100, 299, 2000] {
        for i in 0..15 {
            if let Some(r) = s.ring(i, f as f64) {
                assert!((0.0..360.0).contains(&r.hue));
            }
        }
        let frame = s.evaluate(&setup.ctx(FrameIndex(f)));
        assert_eq!(frame.sprites.iter().filter(|sp| sp.layer == "glow").count(), 30);
        assert_eq!(frame.sprites.iter().filter(|sp| sp.layer == "core").count(), 1);
    }
}

#[test]
fn glows_orbit_within_pulsed_radius() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(77)));
    let c = setup.canvas.center();
    for sp in frame.sprites.iter().filter(|sp| sp.layer == "glow") {
        let r = (sp.center - c).hypot();
        assert!(r <= 40.0 * 1.05 + 1e-9);
    }
}

#[test]
fn pulse_stays_near_one() {
    for f in 0..400 {
        let p = global_pulse(f as f64);
        assert!((0.95..=1.05).contains(&p));
    }
}
