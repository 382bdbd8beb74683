use crate::{
    foundation::{
        color::Color,
        core::{Canvas, FrameIndex, Point, Vec2},
        error::{ReelError, ReelResult},
    },
    links::proximity::{DistanceMetric, LinkConfig, links},
    motion::wrap::WrapDrift,
    random::seeded::random_at,
    scene::{
        heading::{Heading, frame_counter},
        model::{ParticleShape, Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the wrapping constellation scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConstellationParams {
    /// Number of particles.
    pub count: usize,
    /// Velocity per axis is drawn from `[-max_speed / 2, max_speed / 2)`.
    pub max_speed: f64,
    /// Smallest particle size.
    pub size_min: f64,
    /// Size spread above `size_min`.
    pub size_spread: f64,
    /// Lowest per-particle opacity; the rest is drawn up to 1.
    pub opacity_min: f64,
    /// Shapes picked uniformly per particle.
    pub shapes: Vec<ParticleShape>,
    /// Link threshold, opacity and metric.
    pub link: LinkConfig,
    /// Particle color.
    pub particle_color: Color,
    /// Link stroke color.
    pub link_color: Color,
}

impl Default for ConstellationParams {
    fn default() -> Self {
        Self {
            count: 80,
            max_speed: 4.0,
            size_min: 2.0,
            size_spread: 4.0,
            opacity_min: 0.3,
            shapes: vec![
                ParticleShape::Circle,
                ParticleShape::Triangle,
                ParticleShape::Square,
                ParticleShape::Star,
            ],
            link: LinkConfig {
                threshold: 150.0,
                max_alpha: 0.4,
                metric: DistanceMetric::Euclidean,
            },
            particle_color: Color::WHITE.with_alpha(0.8),
            link_color: Color::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Star {
    drift: WrapDrift,
    size: f64,
    shape: ParticleShape,
    opacity: f64,
}

/// Mixed-shape particles drifting across wrapped edges, linked by Euclidean proximity.
#[derive(Debug)]
pub struct ConstellationScene {
    params: ConstellationParams,
    canvas: Canvas,
    stars: Vec<Star>,
    heading: Heading,
}

impl ConstellationScene {
    /// Draw every particle descriptor.
    pub fn new(params: ConstellationParams, setup: SceneSetup) -> ReelResult<Self> {
        params.link.validate()?;
        if params.shapes.is_empty() {
            return Err(ReelError::validation("constellation needs at least one shape"));
        }
        if !(0.0..=1.0).contains(&params.opacity_min) {
            return Err(ReelError::validation("constellation opacity_min must be in [0, 1]"));
        }
        let canvas = setup.canvas;
        let n_shapes = params.shapes.len();
        let stars = (0..params.count)
            .map(|i| {
                let pick = ((random_at("shape", i) * n_shapes as f64) as usize).min(n_shapes - 1);
                Star {
                    drift: WrapDrift::new(
                        Point::new(random_at("x", i) * canvas.w(), random_at("y", i) * canvas.h()),
                        Vec2::new(
                            (random_at("vx", i) - 0.5) * params.max_speed,
                            (random_at("vy", i) - 0.5) * params.max_speed,
                        ),
                    ),
                    size: params.size_min + random_at("size", i) * params.size_spread,
                    shape: params.shapes[pick],
                    opacity: params.opacity_min + random_at("opacity", i) * (1.0 - params.opacity_min),
                }
            })
            .collect::<Vec<_>>();
        tracing::debug!(count = stars.len(), "constellation particles built");
        Ok(Self {
            heading: Heading::top(canvas, "particles.js Style", Some("Multiple shapes with line_linked"))?,
            params,
            canvas,
            stars,
        })
    }

    /// Particle centers at a local frame.
    pub fn positions(&self, frame: FrameIndex) -> Vec<Point> {
        self.stars
            .iter()
            .map(|s| s.drift.at(frame.as_f64(), self.canvas))
            .collect()
    }
}

impl Scene for ConstellationScene {
    fn kind(&self) -> &'static str {
        "constellation"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let positions = self.positions(ctx.frame);
        let mut sprites = self.heading.sprites(ctx);
        sprites.extend(self.stars.iter().zip(&positions).enumerate().map(
            |(i, (s, &center))| {
                Sprite::disc("particle", i, Shape::from(s.shape), center, s.size)
                    .color(self.params.particle_color)
                    .opacity(s.opacity)
            },
        ));
        sprites.push(frame_counter(ctx, ctx.frame.0, 0.08));
        SceneFrame {
            links: links(&positions, &self.params.link),
            sprites,
            link_color: Some(self.params.link_color),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/constellation.rs"]
mod tests;
