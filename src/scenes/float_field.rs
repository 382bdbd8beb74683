use kurbo::Size;

use crate::{
    animation::interpolate::{Extrapolate, Interpolation},
    foundation::{
        color::Color,
        core::{Point, Vec2},
        error::{ReelError, ReelResult},
    },
    random::seeded::random_at,
    scene::{
        heading::frame_counter,
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the floating field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FloatFieldParams {
    /// Number of particles.
    pub count: usize,
    /// Palette picked uniformly per particle.
    pub palette: Vec<Color>,
    /// Appearance delays are drawn from `[0, max_delay)` frames.
    pub max_delay: f64,
}

impl Default for FloatFieldParams {
    fn default() -> Self {
        Self {
            count: 80,
            palette: vec![
                Color::rgb8(0xFF, 0x6B, 0x6B, 1.0),
                Color::rgb8(0x4E, 0xCD, 0xC4, 1.0),
                Color::rgb8(0x45, 0xB7, 0xD1, 1.0),
                Color::rgb8(0x96, 0xCE, 0xB4, 1.0),
                Color::rgb8(0xFF, 0xEA, 0xA7, 1.0),
                Color::rgb8(0xDD, 0xA0, 0xDD, 1.0),
                Color::rgb8(0x74, 0xB9, 0xFF, 1.0),
                Color::rgb8(0xFD, 0x79, 0xA8, 1.0),
            ],
            max_delay: 30.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Mote {
    home: Point,
    size: f64,
    color: Color,
    speed: f64,
    delay: f64,
}

/// Colored motes that appear one by one, then bob and pulse around their home spot.
#[derive(Debug)]
pub struct FloatFieldScene {
    motes: Vec<Mote>,
    fade_in: Interpolation,
    title_fade: Interpolation,
    subtitle_fade: Interpolation,
}

impl FloatFieldScene {
    /// Draw every mote.
    pub fn new(params: FloatFieldParams, setup: SceneSetup) -> ReelResult<Self> {
        if params.palette.is_empty() {
            return Err(ReelError::validation("float_field palette must not be empty"));
        }
        let canvas = setup.canvas;
        let n_colors = params.palette.len();
        let motes: Vec<Mote> = (0..params.count)
            .map(|i| {
                let pick = ((random_at("color", i) * n_colors as f64) as usize).min(n_colors - 1);
                Mote {
                    home: Point::new(random_at("x", i) * canvas.w(), random_at("y", i) * canvas.h()),
                    size: 5.0 + random_at("size", i) * 25.0,
                    color: params.palette[pick],
                    speed: 0.5 + random_at("speed", i) * 2.0,
                    delay: random_at("delay", i) * params.max_delay,
                }
            })
            .collect();
        tracing::debug!(count = motes.len(), "float field built");
        Ok(Self {
            motes,
            fade_in: Interpolation::new(&[0.0, 20.0], &[0.0, 0.8])?
                .extrapolate_right(Extrapolate::Clamp),
            title_fade: Interpolation::new(&[0.0, 30.0], &[0.0, 1.0])?
                .extrapolate(Extrapolate::Clamp),
            subtitle_fade: Interpolation::new(&[20.0, 50.0], &[0.0, 1.0])?
                .extrapolate(Extrapolate::Clamp),
        })
    }

    /// Mote `i` at frame `f`; `None` before it appears.
    pub fn mote(&self, i: usize, f: f64) -> Option<Sprite> {
        let m = self.motes.get(i)?;
        let active = f - m.delay;
        if active < 0.0 {
            return None;
        }
        let float = Vec2::new(
            (active * 0.03 * m.speed).cos() * 30.0,
            (active * 0.05 * m.speed).sin() * 50.0,
        );
        let pulse = 1.0 + (active * 0.1 * m.speed).sin() * 0.3;
        Some(
            Sprite::disc("mote", i, Shape::Circle, m.home + float, m.size * pulse)
                .color(m.color)
                .opacity(self.fade_in.sample(active))
                .glow(m.size * 2.0),
        )
    }
}

impl Scene for FloatFieldScene {
    fn kind(&self) -> &'static str {
        "float_field"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let mut sprites: Vec<Sprite> = (0..self.motes.len()).filter_map(|i| self.mote(i, f)).collect();
        let center = ctx.canvas.center();
        sprites.push(
            Sprite::new(
                "title",
                0,
                Shape::Label("random() + Loops".to_string()),
                Point::new(center.x, center.y - 30.0),
                Size::new(0.0, 72.0),
            )
            .opacity(self.title_fade.sample(f)),
        );
        sprites.push(
            Sprite::new(
                "subtitle",
                0,
                Shape::Label(format!(
                    "{} particles with deterministic randomness",
                    self.motes.len()
                )),
                Point::new(center.x, center.y + 50.0),
                Size::new(0.0, 32.0),
            )
            .color(Color::WHITE.with_alpha(0.6))
            .opacity(self.subtitle_fade.sample(f)),
        );
        sprites.push(frame_counter(ctx, ctx.frame.0, 0.1));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/float_field.rs"]
mod tests;
