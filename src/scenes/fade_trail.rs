use std::f64::consts::PI;

use crate::{
    animation::interpolate::Interpolation,
    foundation::{
        color::Color,
        core::{Canvas, Point, Vec2},
        error::{ReelError, ReelResult},
    },
    random::seeded::{SeedKey, random_at},
    scene::{
        heading::{Heading, frame_counter},
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the fading trail.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeTrailParams {
    /// Number of trail points behind the head.
    pub length: usize,
    /// Frames for two full passes of the curve.
    pub period: f64,
    /// Curve-parameter gap between the head and the last trail point.
    pub span: f64,
    /// Satellites per point are `min_satellites + floor(r * satellite_spread)`.
    pub min_satellites: usize,
    /// See `min_satellites`.
    pub satellite_spread: usize,
}

impl Default for FadeTrailParams {
    fn default() -> Self {
        Self {
            length: 40,
            period: 300.0,
            span: 0.8,
            min_satellites: 3,
            satellite_spread: 3,
        }
    }
}

/// Lissajous figure the head follows: `x = sin 2t * 400 + sin 3t * 150`,
/// `y = cos 3t * 300 + cos 2t * 100`, around the canvas center.
pub fn lissajous(canvas: Canvas, t: f64) -> Point {
    Point::new(
        canvas.w() / 2.0 + (t * 2.0).sin() * 400.0 + (t * 3.0).sin() * 150.0,
        canvas.h() / 2.0 + (t * 3.0).cos() * 300.0 + (t * 2.0).cos() * 100.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Satellite {
    offset: Vec2,
    size: f64,
    hue: f64,
}

/// A glowing head tracing a Lissajous curve, followed by a fading, shrinking trail.
#[derive(Debug)]
pub struct FadeTrailScene {
    params: FadeTrailParams,
    satellites: Vec<Vec<Satellite>>,
    fade: Interpolation,
    shrink: Interpolation,
    size_alpha: Interpolation,
    heading: Heading,
}

impl FadeTrailScene {
    /// Draw the satellites of every trail point.
    pub fn new(params: FadeTrailParams, setup: SceneSetup) -> ReelResult<Self> {
        if params.length < 2 {
            return Err(ReelError::validation("fade_trail length must be >= 2"));
        }
        if !(params.period.is_finite() && params.period > 0.0) {
            return Err(ReelError::validation("fade_trail period must be > 0"));
        }
        let satellites: Vec<Vec<Satellite>> = (0..params.length)
            .map(|t| {
                let n = params.min_satellites
                    + (random_at("count", t) * params.satellite_spread as f64) as usize;
                (0..n)
                    .map(|p| {
                        let draw = |attr: &str| SeedKey::new(attr).index(t).index(p).draw();
                        Satellite {
                            offset: Vec2::new((draw("ox") - 0.5) * 30.0, (draw("oy") - 0.5) * 30.0),
                            size: 3.0 + draw("size") * 8.0,
                            hue: 180.0 + draw("hue") * 60.0,
                        }
                    })
                    .collect()
            })
            .collect();
        tracing::debug!(
            points = satellites.len(),
            satellites = satellites.iter().map(Vec::len).sum::<usize>(),
            "fade trail built"
        );
        let last = (params.length - 1) as f64;
        Ok(Self {
            fade: Interpolation::new(&[0.0, last], &[1.0, 0.0])?,
            shrink: Interpolation::new(&[0.0, last], &[1.0, 0.3])?,
            size_alpha: Interpolation::new(&[3.0, 11.0], &[0.5, 1.0])?,
            heading: Heading::top(
                setup.canvas,
                "Fade Trail Particles",
                Some("Mouse trail style animation"),
            )?,
            params,
            satellites,
        })
    }

    /// Curve parameter of the head at frame `f`.
    pub fn head_t(&self, f: f64) -> f64 {
        f / self.params.period * PI * 4.0
    }

    /// Curve parameter of trail point `i` at frame `f`.
    pub fn trail_t(&self, i: usize, f: f64) -> f64 {
        self.head_t(f) - i as f64 / self.params.length as f64 * self.params.span
    }
}

impl Scene for FadeTrailScene {
    fn kind(&self) -> &'static str {
        "fade_trail"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let mut sprites = self.heading.sprites(ctx);
        let mut sat_index = 0;
        for (i, sats) in self.satellites.iter().enumerate() {
            let pos = lissajous(ctx.canvas, self.trail_t(i, f));
            let opacity = self.fade.sample(i as f64);
            let scale = self.shrink.sample(i as f64);
            sprites.push(
                Sprite::disc("trail", i, Shape::Circle, pos, 20.0 * scale)
                    .color(Color::hsla(200.0, 100.0, 70.0, 0.8))
                    .opacity(opacity)
                    .glow(20.0 * scale),
            );
            for s in sats {
                let size = s.size * scale;
                sprites.push(
                    Sprite::disc("satellite", sat_index, Shape::Circle, pos + s.offset * scale, size)
                        .color(Color::hsla(s.hue, 100.0, 70.0, 1.0))
                        .opacity(opacity * self.size_alpha.sample(s.size))
                        .glow(size),
                );
                sat_index += 1;
            }
        }
        let pulse = 1.0 + (f * 0.3).sin() * 0.1;
        sprites.push(
            Sprite::disc("head", 0, Shape::Circle, lissajous(ctx.canvas, self.head_t(f)), 50.0)
                .color(Color::hsla(200.0, 100.0, 80.0, 0.9))
                .uniform_scale(pulse)
                .glow(30.0),
        );
        sprites.push(frame_counter(ctx, ctx.frame.0, 0.08));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/fade_trail.rs"]
mod tests;
