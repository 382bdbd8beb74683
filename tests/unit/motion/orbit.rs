use super::*;

#[test]
fn radius_is_preserved() {
    let o = Orbit::new(Point::new(960.0, 540.0), 25.0, 0.3, 0.04);
    for f in 0..500 {
        let p = o.at(f as f64);
        let d = (p - o.center).hypot();
        assert!((d - 25.0).abs() < 1e-9);
    }
}

#[test]
fn starts_at_initial_angle() {
    let o = Orbit::new(Point::new(0.0, 0.0), 10.0, std::f64::consts::FRAC_PI_2, 0.1);
    let p = o.at(0.0);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
    assert!((o.angle_at(10.0) - (std::f64::consts::FRAC_PI_2 + 1.0)).abs() < 1e-12);
}
