use super::*;
use crate::foundation::core::FrameIndex;

fn build() -> (WaveformScene, SceneSetup) {
    let setup = SceneSetup::full_hd(120);
    (WaveformScene::new(WaveformParams::default(), setup).unwrap(), setup)
}

#[test]
fn level_matches_three_term_mix() {
    let (s, _) = build();
    let (f, i) = (33.0, 12usize);
    let fi = i as f64;
    let p1 = (f * 0.15 + fi * 0.3).sin() * 0.5 + 0.5;
    let p2 = (f * 0.08 + fi * 0.5).sin() * 0.3 + 0.3;
    let p3 = (f * 0.12 + fi * 0.2).cos() * 0.2 + 0.2;
    assert!((s.level(i, f) - (p1 + p2 + p3) / 3.0).abs() < 1e-12);
}

#[test]
fn heights_stay_in_band() {
    let (s, _) = build();
    for f in 0..120 {
        for i in 0..64 {
            let h = s.bar_height(i, f as f64);
            assert!((50.0..=400.0).contains(&h));
        }
    }
}

#[test]
fn bars_scale_in_left_to_right() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(0)));
    let bars: Vec<&Sprite> = frame.sprites.iter().filter(|sp| sp.layer == "bar").collect();
    assert_eq!(bars.len(), 64);
    assert!(bars.iter().all(|b| b.scale.y == 0.0));

    let frame = s.evaluate(&setup.ctx(FrameIndex(10)));
    let bars: Vec<&Sprite> = frame.sprites.iter().filter(|sp| sp.layer == "bar").collect();
    assert!(bars[0].scale.y > bars[19].scale.y);
    // Bar 20 starts at frame 10.
    assert_eq!(bars[20].scale.y, 0.0);
}

#[test]
fn bars_are_centered_and_colored_in_bands() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(60)));
    let bars: Vec<&Sprite> = frame.sprites.iter().filter(|sp| sp.layer == "bar").collect();
    let mid = (bars[0].center.x + bars[63].center.x) / 2.0;
    assert!((mid - 960.0).abs() < 1e-9);
    let palette = WaveformParams::default().palette;
    assert_eq!(bars[0].color, palette[0]);
    assert_eq!(bars[63].color, palette[4]);
}

#[test]
fn rings_fade_outward() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(5)));
    let rings: Vec<&Sprite> = frame.sprites.iter().filter(|sp| sp.layer == "ring").collect();
    assert_eq!(rings.len(), 3);
    assert!(rings[0].opacity > rings[1].opacity && rings[1].opacity > rings[2].opacity);
}
