use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn hsla_percent_notation_matches_css() {
    let red = Color::hsla(0.0, 100.0, 50.0, 1.0);
    assert!((red.r - 1.0).abs() < 1e-9);
    assert!(red.g.abs() < 1e-9);
    assert!(red.b.abs() < 1e-9);

    // Hue wraps.
    let wrapped = Color::hsla(360.0 + 120.0, 100.0, 50.0, 1.0);
    assert!((wrapped.g - 1.0).abs() < 1e-9);
}

#[test]
fn premul_quantization_scales_by_alpha() {
    let c = Color::WHITE.with_alpha(0.5).to_rgba8_premul();
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    let faded = Color::WHITE.fade(0.0).to_rgba8_premul();
    assert_eq!(faded.a, 0);
}
