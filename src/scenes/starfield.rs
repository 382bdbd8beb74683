use std::f64::consts::TAU;

use crate::{
    animation::wave::Wave,
    foundation::{
        color::Color,
        core::{Point, Vec2},
        error::{ReelError, ReelResult},
    },
    motion::wrap::WrapDrift,
    random::seeded::SeedKey,
    scene::{
        heading::{Heading, frame_counter},
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// One parallax depth band.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSpec {
    /// Layer name, part of every seed key of the layer.
    pub name: String,
    /// Number of stars.
    pub count: usize,
    /// Smallest diameter.
    pub size_min: f64,
    /// Largest diameter (exclusive).
    pub size_max: f64,
    /// Peak opacity.
    pub opacity: f64,
    /// Drift speed scale; vertical drift is half as fast.
    pub speed: f64,
    /// Glow radius as a multiple of the diameter.
    pub glow: f64,
}

impl LayerSpec {
    fn new(name: &str, count: usize, size: (f64, f64), opacity: f64, speed: f64, glow: f64) -> Self {
        Self {
            name: name.to_string(),
            count,
            size_min: size.0,
            size_max: size.1,
            opacity,
            speed,
            glow,
        }
    }
}

/// Parameters of the layered starfield.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarfieldParams {
    /// Depth layers, back to front.
    pub layers: Vec<LayerSpec>,
    /// Star color; alpha is replaced by the twinkling opacity.
    pub color: Color,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            layers: vec![
                LayerSpec::new("far", 100, (1.0, 2.0), 0.3, 0.2, 2.0),
                LayerSpec::new("mid", 50, (2.0, 4.0), 0.5, 0.5, 2.0),
                LayerSpec::new("near", 20, (3.0, 6.0), 0.8, 1.0, 3.0),
            ],
            color: Color::WHITE,
        }
    }
}

/// Subtitle listing each layer with its star count, e.g. `2 layers: Far (100) • Near (20)`.
fn layer_summary(layers: &[LayerSpec]) -> Option<String> {
    if layers.is_empty() {
        return None;
    }
    let parts: Vec<String> = layers
        .iter()
        .map(|l| {
            let mut chars = l.name.chars();
            let name: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            format!("{name} ({})", l.count)
        })
        .collect();
    let noun = if layers.len() == 1 { "layer" } else { "layers" };
    Some(format!("{} {noun}: {}", layers.len(), parts.join(" • ")))
}

#[derive(Clone, Debug, PartialEq)]
struct Twinkler {
    layer: usize,
    drift: WrapDrift,
    size: f64,
    twinkle: Wave,
}

/// Three depth layers of wrapping, twinkling stars behind a centered title.
#[derive(Debug)]
pub struct StarfieldScene {
    params: StarfieldParams,
    stars: Vec<Twinkler>,
    heading: Heading,
}

impl StarfieldScene {
    /// Draw every star of every layer.
    pub fn new(params: StarfieldParams, setup: SceneSetup) -> ReelResult<Self> {
        let canvas = setup.canvas;
        let mut stars = Vec::new();
        for (li, layer) in params.layers.iter().enumerate() {
            if layer.size_max < layer.size_min {
                return Err(ReelError::validation(format!(
                    "starfield layer '{}' has size_max < size_min",
                    layer.name
                )));
            }
            let draw = |attr: &str, i: usize| SeedKey::new(attr).part(&layer.name).index(i).draw();
            for i in 0..layer.count {
                let speed = 0.5 + draw("twinkle", i) * 2.0;
                stars.push(Twinkler {
                    layer: li,
                    drift: WrapDrift::new(
                        Point::new(draw("x", i) * canvas.w(), draw("y", i) * canvas.h()),
                        Vec2::new(
                            (draw("driftX", i) - 0.5) * layer.speed,
                            (draw("driftY", i) - 0.5) * layer.speed * 0.5,
                        ),
                    ),
                    size: layer.size_min + draw("size", i) * (layer.size_max - layer.size_min),
                    twinkle: Wave::sin(0.5, 0.1 * speed)
                        .phase(draw("offset", i) * TAU)
                        .offset(0.5),
                });
            }
            tracing::debug!(layer = %layer.name, count = layer.count, "starfield layer built");
        }
        let summary = layer_summary(&params.layers);
        Ok(Self {
            heading: Heading::centered(canvas, "Background Particles", summary.as_deref())?,
            params,
            stars,
        })
    }

    /// Number of stars across all layers.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// `true` when every layer is empty.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl Scene for StarfieldScene {
    fn kind(&self) -> &'static str {
        "starfield"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let mut sprites: Vec<Sprite> = self
            .stars
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let layer = &self.params.layers[s.layer];
                let opacity = layer.opacity * s.twinkle.at(f, 0.0);
                Sprite::disc("star", i, Shape::Circle, s.drift.at(f, ctx.canvas), s.size)
                    .color(self.params.color)
                    .opacity(opacity)
                    .glow(s.size * layer.glow)
            })
            .collect();
        sprites.extend(self.heading.sprites(ctx));
        sprites.push(frame_counter(ctx, ctx.frame.0, 0.05));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/starfield.rs"]
mod tests;
