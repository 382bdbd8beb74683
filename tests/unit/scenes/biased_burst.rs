use super::*;

fn build() -> (BiasedBurstScene, SceneSetup) {
    let setup = SceneSetup::full_hd(360);
    (BiasedBurstScene::new(BiasedBurstParams::default(), setup).unwrap(), setup)
}

#[test]
fn subsets_have_expected_sizes() {
    let (s, _) = build();
    assert_eq!(s.embers.len(), 60);
    assert_eq!(s.embers.iter().filter(|e| e.border).count(), 12);
    assert_eq!(s.embers.iter().filter(|e| e.trail).count(), 15);
    // 9 big ones: the only way to exceed size_min + size_spread.
    assert!(s.embers.iter().filter(|e| e.size > 20.0).count() <= 9);
}

#[test]
fn targets_lie_in_the_distance_band() {
    let (s, _) = build();
    for e in &s.embers {
        let d = (e.target - s.center).hypot();
        assert!((100.0 - 1e-9..=450.0 + 1e-9).contains(&d), "{d}");
    }
}

#[test]
fn colors_come_from_the_table() {
    let (s, _) = build();
    let table = BiasedBurstParams::default().colors;
    for e in &s.embers {
        assert!(table.entries().iter().any(|(c, _)| *c == e.color));
    }
}

#[test]
fn particles_start_at_center_and_reach_target() {
    let (s, setup) = build();
    let i = 0;
    let delay = s.embers[i].clock.delay as u64;
    assert_eq!(s.progress(i, FrameIndex(delay)), Some(0.0));
    assert_eq!(s.progress(i, FrameIndex(delay + 80)), Some(1.0));
    let frame = s.evaluate(&setup.ctx(FrameIndex(delay + 80)));
    let sp = frame
        .sprites
        .iter()
        .find(|sp| sp.layer == "particle" && sp.index == i)
        .unwrap();
    assert!((sp.center - s.embers[i].target).hypot() < 1e-9);
    assert!((sp.opacity - 0.3).abs() < 1e-9);
}

#[test]
fn ghosts_only_mid_flight() {
    let (s, setup) = build();
    for f in 0..120u64 {
        let frame = s.evaluate(&setup.ctx(FrameIndex(f)));
        for g in frame.sprites.iter().filter(|sp| sp.layer == "trail") {
            let p = s.progress(g.index, FrameIndex(f)).unwrap();
            assert!(p > 0.1 && p < 0.9);
            assert!(s.embers[g.index].trail);
        }
    }
}

#[test]
fn cycle_repeats() {
    let (s, setup) = build();
    let a = s.evaluate(&setup.ctx(FrameIndex(37)));
    let b = s.evaluate(&setup.ctx(FrameIndex(157)));
    let strip = |f: SceneFrame| -> Vec<Sprite> {
        f.sprites
            .into_iter()
            .filter(|sp| sp.layer == "particle" || sp.layer == "trail")
            .collect()
    };
    assert_eq!(strip(a), strip(b));
}

#[test]
fn zero_cycle_is_rejected() {
    let params = BiasedBurstParams {
        cycle: 0,
        ..BiasedBurstParams::default()
    };
    assert!(BiasedBurstScene::new(params, SceneSetup::full_hd(10)).is_err());
}
