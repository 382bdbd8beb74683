use crate::{
    foundation::{
        color::Color,
        core::{FrameIndex, Point, Vec2},
        error::{ReelError, ReelResult},
    },
    links::proximity::{DistanceMetric, LinkConfig, links},
    motion::reflect::ReflectTrack,
    random::seeded::random_at,
    scene::{
        heading::{Heading, frame_counter},
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the bouncing-network scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NetworkParams {
    /// Number of particles.
    pub count: usize,
    /// Velocity per axis is drawn from `[-max_speed / 2, max_speed / 2)`.
    pub max_speed: f64,
    /// Smallest particle diameter.
    pub size_min: f64,
    /// Diameter spread above `size_min`.
    pub size_spread: f64,
    /// Link threshold, opacity and metric.
    pub link: LinkConfig,
    /// Particle color.
    pub particle_color: Color,
    /// Link stroke color.
    pub link_color: Color,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 3.0,
            size_min: 3.0,
            size_spread: 3.0,
            link: LinkConfig {
                threshold: 180.0,
                max_alpha: 0.6,
                metric: DistanceMetric::Manhattan,
            },
            particle_color: Color::rgb8(150, 200, 255, 0.9),
            link_color: Color::rgb8(100, 180, 255, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NetworkParticle {
    track: ReflectTrack,
    size: f64,
}

/// Particles bouncing inside the canvas, joined by Manhattan-distance links.
#[derive(Debug)]
pub struct NetworkScene {
    params: NetworkParams,
    particles: Vec<NetworkParticle>,
    heading: Heading,
}

impl NetworkScene {
    /// Draw every particle and precompute its reflection track over the scene length.
    pub fn new(params: NetworkParams, setup: SceneSetup) -> ReelResult<Self> {
        params.link.validate()?;
        if !(params.max_speed.is_finite() && params.max_speed >= 0.0) {
            return Err(ReelError::validation("network max_speed must be finite and >= 0"));
        }
        let canvas = setup.canvas;
        let particles = (0..params.count)
            .map(|i| {
                let origin = Point::new(random_at("x", i) * canvas.w(), random_at("y", i) * canvas.h());
                let velocity = Vec2::new(
                    (random_at("vx", i) - 0.5) * params.max_speed,
                    (random_at("vy", i) - 0.5) * params.max_speed,
                );
                NetworkParticle {
                    track: ReflectTrack::build(origin, velocity, canvas, setup.duration),
                    size: params.size_min + random_at("size", i) * params.size_spread,
                }
            })
            .collect::<Vec<_>>();
        tracing::debug!(count = particles.len(), "network particles built");
        Ok(Self {
            heading: Heading::top(
                canvas,
                "Network Particles",
                Some("particles.js style - connected by distance"),
            )?,
            params,
            particles,
        })
    }

    /// Particle centers at a local frame.
    pub fn positions(&self, frame: FrameIndex) -> Vec<Point> {
        self.particles
            .iter()
            .map(|p| p.track.position(frame.0))
            .collect()
    }
}

impl Scene for NetworkScene {
    fn kind(&self) -> &'static str {
        "network"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let positions = self.positions(ctx.frame);
        let mut sprites = self.heading.sprites(ctx);
        sprites.extend(self.particles.iter().zip(&positions).enumerate().map(
            |(i, (p, &center))| {
                Sprite::disc("particle", i, Shape::Circle, center, p.size)
                    .color(self.params.particle_color)
                    .glow(10.0)
            },
        ));
        sprites.push(frame_counter(ctx, ctx.frame.0, 0.1));
        SceneFrame {
            links: links(&positions, &self.params.link),
            sprites,
            link_color: Some(self.params.link_color),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/network.rs"]
mod tests;
