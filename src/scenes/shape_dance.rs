use kurbo::Size;

use crate::{
    animation::{
        interpolate::Interpolation,
        spring::{Spring, SpringConfig},
    },
    foundation::{
        color::Color,
        core::{Point, Vec2},
        error::ReelResult,
    },
    scene::{
        heading::Heading,
        model::{ParticleShape, Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// One dancing shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dancer {
    /// Geometry; squares get rounded corners.
    pub shape: ParticleShape,
    /// Fill color.
    pub color: Color,
    /// Frames before it springs in.
    pub delay: f64,
    /// Top-left corner of its box at rest.
    pub at: Point,
}

/// Parameters of the shape dance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeDanceParams {
    /// Shapes in draw order.
    pub dancers: Vec<Dancer>,
    /// Scale-in spring.
    pub spring: SpringConfig,
    /// Bounce height in pixels.
    pub bounce: f64,
}

impl Default for ShapeDanceParams {
    fn default() -> Self {
        let dancer = |shape, rgb: (u8, u8, u8), delay: f64, x: f64, y: f64| Dancer {
            shape,
            color: Color::rgb8(rgb.0, rgb.1, rgb.2, 1.0),
            delay,
            at: Point::new(x, y),
        };
        Self {
            dancers: vec![
                dancer(ParticleShape::Circle, (0xFF, 0x6B, 0x6B), 0.0, 300.0, 300.0),
                dancer(ParticleShape::Square, (0x4E, 0xCD, 0xC4), 5.0, 600.0, 500.0),
                dancer(ParticleShape::Triangle, (0x45, 0xB7, 0xD1), 10.0, 900.0, 350.0),
                dancer(ParticleShape::Circle, (0x96, 0xCE, 0xB4), 15.0, 1200.0, 450.0),
                dancer(ParticleShape::Square, (0xFF, 0xEA, 0xA7), 20.0, 1500.0, 300.0),
                dancer(ParticleShape::Triangle, (0xDD, 0xA0, 0xDD), 25.0, 800.0, 700.0),
            ],
            spring: SpringConfig::with(10.0, 100.0),
            bounce: 30.0,
        }
    }
}

fn footprint(shape: ParticleShape) -> (Shape, Size) {
    match shape {
        ParticleShape::Circle => (Shape::Circle, Size::new(120.0, 120.0)),
        ParticleShape::Square => (Shape::RoundedRect(15.0), Size::new(100.0, 100.0)),
        ParticleShape::Triangle => (Shape::Triangle, Size::new(120.0, 100.0)),
        ParticleShape::Star => (Shape::Star, Size::new(120.0, 120.0)),
    }
}

/// Shapes that spring in one after another, spin and bounce.
#[derive(Debug)]
pub struct ShapeDanceScene {
    params: ShapeDanceParams,
    pop: Spring,
    spin: Interpolation,
    heading: Heading,
    caption: Heading,
}

impl ShapeDanceScene {
    /// Validate the spring and build the spin curve.
    pub fn new(params: ShapeDanceParams, setup: SceneSetup) -> ReelResult<Self> {
        let canvas = setup.canvas;
        tracing::debug!(dancers = params.dancers.len(), "shape dance built");
        Ok(Self {
            pop: Spring::new(params.spring)?,
            spin: Interpolation::new(&[0.0, 60.0], &[0.0, 360.0])?,
            heading: Heading::at(Point::new(canvas.w() / 2.0, 104.0), 48.0, "interpolate + spring", None)?,
            caption: Heading::at(
                Point::new(canvas.w() / 2.0, canvas.h() - 100.0),
                32.0,
                "Smooth physics-based animations",
                None,
            )?
            .delayed(30.0),
            params,
        })
    }

    /// Sprite of dancer `i` at frame `f`.
    pub fn dancer(&self, i: usize, f: f64, ctx: &SceneCtx) -> Option<Sprite> {
        let d = self.params.dancers.get(i)?;
        let local = f - d.delay;
        let (shape, size) = footprint(d.shape);
        let bounce = (local * 0.15).sin() * self.params.bounce;
        let center = d.at + Vec2::new(size.width / 2.0, size.height / 2.0 + bounce);
        Some(
            Sprite::new("shape", i, shape, center, size)
                .color(d.color)
                .uniform_scale(self.pop.sample(local, ctx.fps))
                .rotation(self.spin.sample(local))
                .glow(30.0),
        )
    }
}

impl Scene for ShapeDanceScene {
    fn kind(&self) -> &'static str {
        "shape_dance"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let mut sprites = self.heading.sprites(ctx);
        sprites.extend((0..self.params.dancers.len()).filter_map(|i| self.dancer(i, f, ctx)));
        sprites.extend(self.caption.sprites(ctx));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/shape_dance.rs"]
mod tests;
