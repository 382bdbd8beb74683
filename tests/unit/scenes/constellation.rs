use super::*;

fn build() -> (ConstellationScene, SceneSetup) {
    let setup = SceneSetup::full_hd(300);
    (ConstellationScene::new(ConstellationParams::default(), setup).unwrap(), setup)
}

#[test]
fn descriptors_follow_their_ranges() {
    let (s, _) = build();
    assert_eq!(s.stars.len(), 80);
    for st in &s.stars {
        assert!((2.0..6.0).contains(&st.size));
        assert!((0.3..1.0).contains(&st.opacity));
        assert!(st.drift.velocity.x.abs() <= 2.0 && st.drift.velocity.y.abs() <= 2.0);
    }
}

#[test]
fn every_shape_is_drawn_from_the_table() {
    let (s, _) = build();
    let defaults = ConstellationParams::default().shapes;
    assert!(s.stars.iter().all(|st| defaults.contains(&st.shape)));
    // 80 uniform draws over 4 shapes should hit each at least once.
    for shape in defaults {
        assert!(s.stars.iter().any(|st| st.shape == shape), "{shape:?}");
    }
}

#[test]
fn wraparound_matches_direct_formula_at_frame_1000() {
    let (s, _) = build();
    let pts = s.positions(FrameIndex(1000));
    for (i, p) in pts.iter().enumerate().take(10) {
        let x = random_at("x", i) * 1920.0 + (random_at("vx", i) - 0.5) * 4.0 * 1000.0;
        let ex = ((x % 1920.0) + 1920.0) % 1920.0;
        assert!((p.x - ex).abs() < 1e-9 || (p.x - ex).abs() > 1919.0);
    }
}

#[test]
fn links_are_euclidean_and_bounded() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(45)));
    for l in &frame.links {
        assert!((l.to - l.from).hypot() < 150.0);
        assert!(l.opacity <= 0.4);
    }
}

#[test]
fn empty_shape_table_is_rejected() {
    let params = ConstellationParams {
        shapes: Vec::new(),
        ..ConstellationParams::default()
    };
    assert!(ConstellationScene::new(params, SceneSetup::full_hd(10)).is_err());
}

#[test]
fn evaluated_particles_sit_at_positions() {
    let (s, setup) = build();
    for f in [0u64, 45, 1000] {
        let pts = s.positions(FrameIndex(f));
        let frame = s.evaluate(&setup.ctx(FrameIndex(f)));
        let centers: Vec<Point> = frame
            .sprites
            .iter()
            .filter(|sp| sp.layer == "particle")
            .map(|sp| sp.center)
            .collect();
        assert_eq!(centers, pts);
        assert_eq!(frame.links, links(&pts, &s.params.link));
    }
}
