use super::*;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn starts_at_from_and_settles_at_to() {
    let s = Spring::new(SpringConfig::damped(20.0)).unwrap();
    assert_eq!(s.sample(0.0, fps()), 0.0);
    assert_eq!(s.sample(-12.0, fps()), 0.0);
    assert!((s.sample(300.0, fps()) - 1.0).abs() < 1e-6);
}

#[test]
fn underdamped_spring_overshoots() {
    let s = Spring::new(SpringConfig::with(10.0, 100.0)).unwrap();
    assert!(SpringConfig::with(10.0, 100.0).damping_ratio() < 1.0);
    let peak = (0..60)
        .map(|f| s.sample(f as f64, fps()))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "peak {peak}");
}

#[test]
fn critically_damped_spring_never_overshoots() {
    // ratio = 20 / (2 * sqrt(100)) = 1
    let s = Spring::new(SpringConfig::damped(20.0)).unwrap();
    let mut prev = 0.0;
    for f in 0..120 {
        let v = s.sample(f as f64, fps());
        assert!(v <= 1.0 + 1e-12);
        assert!(v >= prev - 1e-12);
        prev = v;
    }
}

#[test]
fn overshoot_clamping_caps_at_target() {
    let cfg = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::with(5.0, 200.0)
    };
    let s = Spring::new(cfg).unwrap();
    for f in 0..90 {
        assert!(s.sample(f as f64, fps()) <= 1.0);
    }
}

#[test]
fn from_to_maps_linearly() {
    let unit = Spring::new(SpringConfig::damped(15.0)).unwrap();
    let rot = Spring::between(SpringConfig::damped(15.0), -180.0, 0.0).unwrap();
    for f in [1.0, 5.0, 12.5, 40.0] {
        let expected = -180.0 + 180.0 * unit.sample(f, fps());
        assert!((rot.sample(f, fps()) - expected).abs() < 1e-9);
    }
}

#[test]
fn delayed_sampling_shifts_time() {
    let s = Spring::new(SpringConfig::default()).unwrap();
    assert_eq!(s.sample_delayed(10.0, 10.0, fps()), 0.0);
    assert_eq!(
        s.sample_delayed(25.0, 10.0, fps()),
        s.sample(15.0, fps())
    );
}

#[test]
fn invalid_constants_are_rejected() {
    assert!(Spring::new(SpringConfig {
        mass: 0.0,
        ..SpringConfig::default()
    })
    .is_err());
    assert!(Spring::new(SpringConfig::with(10.0, 0.0)).is_err());
    assert!(Spring::new(SpringConfig::damped(-1.0)).is_err());
    assert!(Spring::between(SpringConfig::default(), 0.0, f64::INFINITY).is_err());
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping": 12, "stiffness": 200}"#).unwrap();
    assert_eq!(cfg.mass, 1.0);
    assert_eq!(cfg.damping, 12.0);
    assert!(!cfg.overshoot_clamping);
}
