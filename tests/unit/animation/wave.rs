use super::*;

fn bars() -> WaveStack {
    WaveStack::new()
        .with(Wave::sin(0.5, 0.15).index_phase(0.3).offset(0.5))
        .with(Wave::sin(0.3, 0.08).index_phase(0.5).offset(0.3))
        .with(Wave::cos(0.2, 0.12).index_phase(0.2).offset(0.2))
}

#[test]
fn single_wave_matches_formula() {
    let w = Wave::sin(0.5, 0.1).phase(1.0).offset(0.5);
    let f = 17.0_f64;
    assert!((w.at(f, 0.0) - (0.5 + 0.5 * (0.1 * f + 1.0).sin())).abs() < 1e-12);
}

#[test]
fn stack_is_mean_of_terms() {
    let stack = bars();
    assert_eq!(stack.len(), 3);
    let (f, i) = (42.0_f64, 7.0_f64);
    let p1 = (f * 0.15 + i * 0.3).sin() * 0.5 + 0.5;
    let p2 = (f * 0.08 + i * 0.5).sin() * 0.3 + 0.3;
    let p3 = (f * 0.12 + i * 0.2).cos() * 0.2 + 0.2;
    assert!((stack.at(f, i) - (p1 + p2 + p3) / 3.0).abs() < 1e-12);
}

#[test]
fn stack_stays_normalized() {
    let stack = bars();
    for f in 0..300 {
        for i in 0..64 {
            let v = stack.at(f as f64, i as f64);
            assert!((0.0..=1.0).contains(&v), "f={f} i={i} v={v}");
        }
    }
}

#[test]
fn empty_stack_is_zero() {
    assert!(WaveStack::new().is_empty());
    assert_eq!(WaveStack::new().at(3.0, 1.0), 0.0);
}
