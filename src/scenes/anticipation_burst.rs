use kurbo::Size;

use crate::{
    animation::{
        ease::Ease,
        interpolate::{Extrapolate, Interpolation},
    },
    foundation::{
        color::Color,
        core::{FrameIndex, Point},
        error::{ReelError, ReelResult},
    },
    motion::launch::{CycleClock, RadialLaunch},
    random::seeded::random_at,
    scene::{
        heading::{Heading, frame_counter},
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the anticipation burst.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnticipationBurstParams {
    /// Number of particles, spread evenly around the circle.
    pub count: usize,
    /// Random extra angle per particle, in degrees.
    pub angle_jitter: f64,
    /// Minimum flight distance.
    pub distance_min: f64,
    /// Extra distance drawn per particle.
    pub distance_spread: f64,
    /// Minimum peak stretch factor.
    pub stretch_min: f64,
    /// Extra stretch drawn per particle.
    pub stretch_spread: f64,
    /// Per-particle delays are drawn from `[0, max_delay)` whole frames.
    pub max_delay: u64,
    /// Lowest hue in degrees.
    pub hue_min: f64,
    /// Hue spread in degrees.
    pub hue_spread: f64,
    /// Frames per cycle.
    pub cycle: u64,
    /// Frames of anticipation before any particle leaves.
    pub windup: f64,
    /// Frames of flight.
    pub flight: f64,
}

impl Default for AnticipationBurstParams {
    fn default() -> Self {
        Self {
            count: 24,
            angle_jitter: 15.0,
            distance_min: 200.0,
            distance_spread: 150.0,
            stretch_min: 2.0,
            stretch_spread: 6.0,
            max_delay: 10,
            hue_min: 30.0,
            hue_spread: 30.0,
            cycle: 90,
            windup: 20.0,
            flight: 60.0,
        }
    }
}

/// Stage of the burst cycle, shown by the indicator row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BurstPhase {
    /// Core contracts.
    Anticipation,
    /// Particles fly out.
    Launch,
    /// Particles settle and fade.
    FollowThrough,
}

impl BurstPhase {
    const ALL: [BurstPhase; 3] = [Self::Anticipation, Self::Launch, Self::FollowThrough];

    /// Phase active at a frame inside the cycle.
    pub fn at(cycle_frame: u64) -> Self {
        match cycle_frame {
            0..20 => Self::Anticipation,
            20..60 => Self::Launch,
            _ => Self::FollowThrough,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Anticipation => "Anticipation",
            Self::Launch => "Launch",
            Self::FollowThrough => "Follow-through",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Spark {
    angle_deg: f64,
    launch: RadialLaunch,
    stretch: Interpolation,
    hue: f64,
    clock: CycleClock,
}

/// Core that contracts, then launches particles with a fast-out, slow-settle curve.
#[derive(Debug)]
pub struct AnticipationBurstScene {
    center: Point,
    cycle: u64,
    sparks: Vec<Spark>,
    windup: Interpolation,
    core_scale: Interpolation,
    core_glow: Interpolation,
    fade: Interpolation,
    heading: Heading,
}

impl AnticipationBurstScene {
    /// Draw every particle and build the cycle curves.
    pub fn new(params: AnticipationBurstParams, setup: SceneSetup) -> ReelResult<Self> {
        if params.cycle == 0 {
            return Err(ReelError::validation("anticipation_burst cycle must be > 0"));
        }
        if !(params.flight.is_finite() && params.flight > 0.0) {
            return Err(ReelError::validation("anticipation_burst flight must be > 0"));
        }
        let center = setup.canvas.center();
        let step = if params.count == 0 {
            0.0
        } else {
            360.0 / params.count as f64
        };
        let sparks = (0..params.count)
            .map(|i| {
                let angle_deg = step * i as f64 + random_at("angle", i) * params.angle_jitter;
                let distance = params.distance_min + random_at("dist", i) * params.distance_spread;
                let s = params.stretch_min + random_at("stretch", i) * params.stretch_spread;
                let delay = (random_at("delay", i) * params.max_delay as f64).floor();
                Ok(Spark {
                    angle_deg,
                    launch: RadialLaunch::new(center, angle_deg.to_radians(), distance),
                    stretch: Interpolation::new(&[0.0, 0.3, 0.6, 1.0], &[1.0, s, s * 0.5, 1.0])?
                        .extrapolate_right(Extrapolate::Clamp),
                    hue: params.hue_min + random_at("hue", i) * params.hue_spread,
                    clock: CycleClock {
                        period: params.cycle,
                        delay: delay + params.windup,
                        duration: params.flight,
                    },
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;
        tracing::debug!(count = sparks.len(), "anticipation burst built");

        Ok(Self {
            center,
            cycle: params.cycle,
            sparks,
            windup: Interpolation::new(&[0.0, 15.0, 20.0], &[1.0, 0.3, 1.0])?
                .ease(Ease::InOutEase)
                .extrapolate_right(Extrapolate::Clamp),
            core_scale: Interpolation::new(
                &[0.0, 15.0, 20.0, 70.0, 90.0],
                &[1.0, 1.5, 0.8, 0.8, 1.0],
            )?
            .extrapolate_right(Extrapolate::Clamp),
            core_glow: Interpolation::new(&[15.0, 25.0], &[0.0, 1.0])?
                .extrapolate_right(Extrapolate::Clamp),
            fade: Interpolation::new(&[0.0, 0.1, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.0])?
                .extrapolate_right(Extrapolate::Clamp),
            heading: Heading::top(
                setup.canvas,
                "Merihari Particles",
                Some("Anticipation & Follow-through"),
            )?,
        })
    }

    /// Combined core scale (cycle curve times anticipation squash) at a local frame.
    pub fn core_scale(&self, frame: FrameIndex) -> f64 {
        let c = (frame.0 % self.cycle) as f64;
        self.core_scale.sample(c) * self.windup.sample(c)
    }

    /// Distance of particle `i` from the center at a local frame.
    pub fn distance(&self, i: usize, frame: FrameIndex) -> Option<f64> {
        self.sparks
            .get(i)
            .map(|s| s.launch.travelled(s.clock.progress(frame.0)))
    }
}

impl Scene for AnticipationBurstScene {
    fn kind(&self) -> &'static str {
        "anticipation_burst"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let cycle_frame = ctx.frame.0 % self.cycle;
        let c = cycle_frame as f64;
        let glow = self.core_glow.sample(c);

        let mut sprites = self.heading.sprites(ctx);
        sprites.push(
            Sprite::disc("core", 0, Shape::Circle, self.center, 60.0)
                .color(Color::hsla(40.0, 100.0, 60.0, 0.8 + glow * 0.2))
                .uniform_scale(self.core_scale(ctx.frame))
                .glow((20.0 + glow * 40.0).max(0.0)),
        );

        sprites.extend(self.sparks.iter().enumerate().map(|(i, s)| {
            let p = s.clock.progress(ctx.frame.0);
            let stretch = s.stretch.sample(p);
            Sprite::disc("spark", i, Shape::Circle, s.launch.at(p), 10.0)
                .color(Color::hsla(s.hue, 100.0, 60.0, 1.0))
                .opacity(self.fade.sample(p))
                .rotation(s.angle_deg)
                .scale(stretch, 1.0)
                .glow(10.0 + stretch * 5.0)
        }));

        let active = BurstPhase::at(cycle_frame);
        sprites.extend(BurstPhase::ALL.iter().enumerate().map(|(i, &phase)| {
            let lit = phase == active;
            let x = ctx.canvas.w() / 2.0 + (i as f64 - 1.0) * 160.0;
            Sprite::new(
                "phase",
                i,
                Shape::Label(phase.label().to_string()),
                Point::new(x, ctx.canvas.h() - 60.0),
                Size::new(140.0, 36.0),
            )
            .color(if lit {
                Color::rgb8(255, 150, 50, 0.8)
            } else {
                Color::WHITE.with_alpha(0.1)
            })
        }));
        sprites.push(frame_counter(ctx, cycle_frame, 0.08));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/anticipation_burst.rs"]
mod tests;
