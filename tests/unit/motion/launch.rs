use super::*;

#[test]
fn launch_reaches_ninety_percent_at_sixty_percent_progress() {
    let l = RadialLaunch::new(Point::new(960.0, 540.0), 0.0, 300.0);
    assert!((l.travelled(0.6) - 270.0).abs() < 1e-9);
    assert!((l.travelled(1.0) - 300.0).abs() < 1e-9);
    assert_eq!(l.travelled(0.0), 0.0);
    assert_eq!(l.at(0.0), Point::new(960.0, 540.0));
}

#[test]
fn launch_is_monotonic() {
    let l = RadialLaunch::new(Point::ZERO, 1.0, 200.0);
    let mut last = -1.0;
    for i in 0..=100 {
        let d = l.travelled(i as f64 / 100.0);
        assert!(d >= last);
        last = d;
    }
}

#[test]
fn launch_heading_is_respected() {
    let l = RadialLaunch::new(Point::ZERO, std::f64::consts::PI, 100.0).with_ease(Ease::Linear);
    let p = l.at(0.5);
    assert!((p.x + 50.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

#[test]
fn cycle_clock_waits_then_rises_then_holds() {
    let c = CycleClock {
        period: 120,
        delay: 10.0,
        duration: 80.0,
    };
    assert_eq!(c.progress(0), 0.0);
    assert_eq!(c.progress(10), 0.0);
    assert!((c.progress(50) - 0.5).abs() < 1e-12);
    assert_eq!(c.progress(90), 1.0);
    assert_eq!(c.progress(119), 1.0);
    // Next cycle restarts.
    assert_eq!(c.progress(120), 0.0);
    assert!((c.progress(170) - 0.5).abs() < 1e-12);
}
