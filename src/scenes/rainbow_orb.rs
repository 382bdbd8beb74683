use std::f64::consts::TAU;

use crate::{
    animation::interpolate::{Extrapolate, Interpolation},
    foundation::{
        color::Color,
        core::{Point, Vec2},
        error::{ReelError, ReelResult},
    },
    motion::orbit::Orbit,
    random::seeded::random_at,
    scene::{
        heading::Heading,
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the rainbow orb.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RainbowOrbParams {
    /// Number of looping rings.
    pub rings: usize,
    /// Frames per ring life.
    pub ring_lifetime: f64,
    /// Ring appearance delays are drawn from `[0, max_ring_delay)` frames.
    pub max_ring_delay: f64,
    /// Number of orbiting glow particles.
    pub glows: usize,
    /// Ring stroke width.
    pub ring_stroke: f64,
}

impl Default for RainbowOrbParams {
    fn default() -> Self {
        Self {
            rings: 15,
            ring_lifetime: 60.0,
            max_ring_delay: 20.0,
            glows: 30,
            ring_stroke: 3.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ring {
    rotation: f64,
    spin: f64,
    hue: f64,
    delay: f64,
    size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Glow {
    orbit: Orbit,
    hue: f64,
    size: f64,
}

/// Evaluated state of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingState {
    /// Life progress in `[0, 1)`.
    pub progress: f64,
    /// Opacity.
    pub opacity: f64,
    /// Scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
}

/// Looping rainbow rings around orbiting glow particles and a hue-cycling core.
#[derive(Debug)]
pub struct RainbowOrbScene {
    lifetime: f64,
    stroke: f64,
    rings: Vec<Ring>,
    glows: Vec<Glow>,
    ring_scale: Interpolation,
    heading: Heading,
    caption: Heading,
}

impl RainbowOrbScene {
    /// Draw ring and glow descriptors.
    pub fn new(params: RainbowOrbParams, setup: SceneSetup) -> ReelResult<Self> {
        if !(params.ring_lifetime.is_finite() && params.ring_lifetime > 0.0) {
            return Err(ReelError::validation("rainbow_orb ring_lifetime must be > 0"));
        }
        let rings: Vec<Ring> = (0..params.rings)
            .map(|i| Ring {
                rotation: random_at("rot", i) * 360.0,
                spin: (random_at("speed", i) - 0.5) * 20.0,
                hue: random_at("hue", i) * 360.0,
                delay: random_at("delay", i) * params.max_ring_delay,
                size: 80.0 + random_at("size", i) * 40.0,
            })
            .collect();
        let glows: Vec<Glow> = (0..params.glows)
            .map(|i| Glow {
                orbit: Orbit::new(
                    Point::ZERO,
                    10.0 + random_at("dist", i) * 30.0,
                    random_at("angle", i) * TAU,
                    0.02 + random_at("gspeed", i) * 0.03,
                ),
                hue: random_at("ghue", i) * 360.0,
                size: 5.0 + random_at("gsize", i) * 15.0,
            })
            .collect();
        tracing::debug!(rings = rings.len(), glows = glows.len(), "rainbow orb built");

        let canvas = setup.canvas;
        Ok(Self {
            lifetime: params.ring_lifetime,
            stroke: params.ring_stroke,
            rings,
            glows,
            ring_scale: Interpolation::new(&[0.0, 0.3, 1.0], &[0.3, 1.0, 1.2])?
                .extrapolate_right(Extrapolate::Clamp),
            heading: Heading::at(Point::new(canvas.w() / 2.0, 104.0), 48.0, "Rainbow Energy Orb", None)?,
            caption: Heading::at(
                Point::new(canvas.w() / 2.0, canvas.h() - 112.0),
                24.0,
                "Particle system rings",
                None,
            )?
            .delayed(20.0),
        })
    }

    /// Ring `i` at frame `f`; `None` before its delay.
    pub fn ring(&self, i: usize, f: f64) -> Option<RingState> {
        let ring = self.rings.get(i)?;
        let active = f - ring.delay;
        if active < 0.0 {
            return None;
        }
        let progress = (active % self.lifetime) / self.lifetime;
        let opacity = if progress < 0.3 {
            progress / 0.3 * 0.8
        } else if progress > 0.7 {
            0.8 - (progress - 0.7) / 0.3 * 0.8
        } else {
            0.8
        };
        Some(RingState {
            progress,
            opacity,
            scale: self.ring_scale.sample(progress),
            rotation: ring.rotation + active * ring.spin * 0.1,
            hue: (ring.hue + active * 0.5) % 360.0,
        })
    }
}

/// Slow breathing applied to the whole orb.
pub fn global_pulse(f: f64) -> f64 {
    1.0 + (f * 0.05).sin() * 0.05
}

impl Scene for RainbowOrbScene {
    fn kind(&self) -> &'static str {
        "rainbow_orb"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let center = ctx.canvas.center();
        let pulse = global_pulse(f);

        let mut sprites = self.heading.sprites(ctx);
        for (i, ring) in self.rings.iter().enumerate() {
            let Some(st) = self.ring(i, f) else { continue };
            sprites.push(
                Sprite::disc("ring", i, Shape::Ring, center, ring.size)
                    .stroke(self.stroke)
                    .color(Color::hsla(st.hue, 80.0, 60.0, 1.0))
                    .opacity(st.opacity)
                    .rotation(st.rotation)
                    .uniform_scale(st.scale * pulse)
                    .glow(20.0),
            );
        }
        for (i, g) in self.glows.iter().enumerate() {
            let offset: Vec2 = g.orbit.at(f).to_vec2() * pulse;
            let wobble = 1.0 + (f * 0.1 + i as f64).sin() * 0.3;
            let hue = (g.hue + f * 0.3) % 360.0;
            sprites.push(
                Sprite::disc("glow", i, Shape::Circle, center + offset, g.size * wobble)
                    .color(Color::hsla(hue, 90.0, 70.0, 0.8))
                    .uniform_scale(pulse)
                    .glow(g.size * 2.0),
            );
        }
        let core_hue = (f * 2.0) % 360.0;
        sprites.push(
            Sprite::disc("core", 0, Shape::Circle, center, 60.0)
                .color(Color::hsla(core_hue, 80.0, 70.0, 0.9))
                .uniform_scale(pulse)
                .glow(40.0),
        );
        sprites.extend(self.caption.sprites(ctx));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/rainbow_orb.rs"]
mod tests;
