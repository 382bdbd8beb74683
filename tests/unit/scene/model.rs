use super::*;

#[test]
fn sprite_defaults_are_neutral() {
    let s = Sprite::disc("p", 3, Shape::Circle, Point::new(1.0, 2.0), 4.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.scale, Vec2::new(1.0, 1.0));
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.paint, Paint::Fill);
    assert_eq!(s.size, Size::new(4.0, 4.0));
}

#[test]
fn opacity_is_clamped() {
    let s = Sprite::disc("p", 0, Shape::Circle, Point::ZERO, 1.0);
    assert_eq!(s.clone().opacity(1.7).opacity, 1.0);
    assert_eq!(s.opacity(-0.2).opacity, 0.0);
}

#[test]
fn sprites_serialize_with_tagged_shape() {
    let s = Sprite::disc("glyph", 0, Shape::Glyph('R'), Point::ZERO, 10.0).stroke(2.0);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["shape"]["kind"], "glyph");
    assert_eq!(v["shape"]["value"], "R");
    assert_eq!(v["paint"]["kind"], "stroke");
    assert_eq!(v["layer"], "glyph");
}

#[test]
fn shape_names_are_stable() {
    assert_eq!(Shape::Star.name(), "star");
    assert_eq!(Shape::Label("x".into()).name(), "label");
    assert_eq!(Shape::RoundedRect(4.0).name(), "rounded_rect");
}

#[test]
fn particle_shapes_map_onto_shapes() {
    assert_eq!(Shape::from(ParticleShape::Triangle), Shape::Triangle);
    let parsed: Vec<ParticleShape> = serde_json::from_str(r#"["circle","star"]"#).unwrap();
    assert_eq!(parsed, vec![ParticleShape::Circle, ParticleShape::Star]);
}

#[test]
fn setup_builds_contexts() {
    let setup = SceneSetup::full_hd(120);
    let ctx = setup.ctx(FrameIndex(7));
    assert_eq!(ctx.frame, FrameIndex(7));
    assert_eq!(ctx.duration, 120);
    assert_eq!(ctx.f(), 7.0);
}
