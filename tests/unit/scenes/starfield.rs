use super::*;
use crate::foundation::core::FrameIndex;
use crate::random::seeded::random;

fn build() -> (StarfieldScene, SceneSetup) {
    let setup = SceneSetup::full_hd(300);
    (StarfieldScene::new(StarfieldParams::default(), setup).unwrap(), setup)
}

#[test]
fn layers_hold_170_stars() {
    let (s, _) = build();
    assert_eq!(s.len(), 170);
    assert_eq!(s.stars.iter().filter(|t| t.layer == 2).count(), 20);
}

#[test]
fn descriptors_use_layered_keys() {
    let (s, _) = build();
    let near0 = s.stars.iter().find(|t| t.layer == 2).unwrap();
    let expected = 3.0 + random("size-near-0") * 3.0;
    assert_eq!(near0.size, expected);
    assert_eq!(near0.drift.origin.x, random("x-near-0") * 1920.0);
}

#[test]
fn opacity_never_exceeds_layer_peak() {
    let (s, setup) = build();
    for f in [0u64, 17, 123, 299] {
        let frame = s.evaluate(&setup.ctx(FrameIndex(f)));
        for sp in frame.sprites.iter().filter(|sp| sp.layer == "star") {
            let peak = s.params.layers[s.stars[sp.index].layer].opacity;
            assert!(sp.opacity <= peak + 1e-12);
        }
    }
}

#[test]
fn near_stars_glow_wider() {
    let (s, setup) = build();
    let frame = s.evaluate(&setup.ctx(FrameIndex(0)));
    for sp in frame.sprites.iter().filter(|sp| sp.layer == "star") {
        let factor = if s.stars[sp.index].layer == 2 { 3.0 } else { 2.0 };
        assert!((sp.glow - sp.size.width * factor).abs() < 1e-12);
    }
}

#[test]
fn inverted_size_range_is_rejected() {
    let mut params = StarfieldParams::default();
    params.layers[0].size_max = 0.5;
    assert!(StarfieldScene::new(params, SceneSetup::full_hd(10)).is_err());
}

fn subtitle_text(s: &StarfieldScene, setup: &SceneSetup) -> Option<String> {
    let frame = s.evaluate(&setup.ctx(FrameIndex(30)));
    frame.sprites.iter().find(|sp| sp.layer == "subtitle").and_then(|sp| match &sp.shape {
        Shape::Label(text) => Some(text.clone()),
        _ => None,
    })
}

#[test]
fn default_subtitle_lists_three_layers() {
    let (s, setup) = build();
    assert_eq!(
        subtitle_text(&s, &setup).as_deref(),
        Some("3 layers: Far (100) • Mid (50) • Near (20)")
    );
}

#[test]
fn subtitle_follows_configured_layers() {
    let params = StarfieldParams {
        layers: vec![
            LayerSpec::new("dust", 40, (1.0, 2.0), 0.2, 0.1, 1.0),
            LayerSpec::new("near", 5, (3.0, 6.0), 0.8, 1.0, 3.0),
        ],
        ..Default::default()
    };
    let setup = SceneSetup::full_hd(60);
    let s = StarfieldScene::new(params, setup).unwrap();
    assert_eq!(
        subtitle_text(&s, &setup).as_deref(),
        Some("2 layers: Dust (40) • Near (5)")
    );

    let single = StarfieldParams {
        layers: vec![LayerSpec::new("far", 7, (1.0, 2.0), 0.3, 0.2, 2.0)],
        ..Default::default()
    };
    let s = StarfieldScene::new(single, setup).unwrap();
    assert_eq!(subtitle_text(&s, &setup).as_deref(), Some("1 layer: Far (7)"));
}

#[test]
fn empty_field_has_no_subtitle() {
    let params = StarfieldParams {
        layers: Vec::new(),
        ..Default::default()
    };
    let setup = SceneSetup::full_hd(60);
    let s = StarfieldScene::new(params, setup).unwrap();
    assert!(s.is_empty());
    assert_eq!(subtitle_text(&s, &setup), None);
}
