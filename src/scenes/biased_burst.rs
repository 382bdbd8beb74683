use std::f64::consts::TAU;

use crate::{
    animation::interpolate::Interpolation,
    foundation::{
        color::Color,
        core::{FrameIndex, Point},
        error::{ReelError, ReelResult},
    },
    motion::launch::CycleClock,
    random::{
        pick::{WeightedTable, biased, fraction_of, sample_indices},
        seeded::random_at,
    },
    scene::{
        heading::{Heading, frame_counter},
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the biased burst.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BiasedBurstParams {
    /// Number of particles.
    pub count: usize,
    /// Weighted color table; common colors first.
    pub colors: WeightedTable<Color>,
    /// Exponent applied to the uniform draw for distance and size.
    pub bias: f64,
    /// Minimum launch distance.
    pub distance_min: f64,
    /// Extra distance reached by a draw of 1.
    pub distance_spread: f64,
    /// Minimum size.
    pub size_min: f64,
    /// Extra size for a biased draw of 0.
    pub size_spread: f64,
    /// Frames per burst cycle.
    pub cycle: u64,
    /// Per-particle delays are drawn from `[0, max_delay)` whole frames.
    pub max_delay: u64,
    /// Frames from launch to full distance.
    pub travel: f64,
    /// Fraction of particles drawn larger.
    pub big_fraction: f64,
    /// Size multiplier of the large ones.
    pub big_scale: f64,
    /// Fraction drawn as outlines.
    pub border_fraction: f64,
    /// Fraction that leave a ghost behind.
    pub trail_fraction: f64,
}

impl Default for BiasedBurstParams {
    fn default() -> Self {
        Self {
            count: 60,
            colors: WeightedTable::from_static(vec![
                (Color::hsla(50.0, 100.0, 60.0, 1.0), 70.0),
                (Color::hsla(30.0, 100.0, 55.0, 1.0), 20.0),
                (Color::hsla(0.0, 100.0, 50.0, 1.0), 10.0),
            ]),
            bias: 3.0,
            distance_min: 100.0,
            distance_spread: 350.0,
            size_min: 4.0,
            size_spread: 16.0,
            cycle: 120,
            max_delay: 20,
            travel: 80.0,
            big_fraction: 0.15,
            big_scale: 2.5,
            border_fraction: 0.2,
            trail_fraction: 0.25,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Ember {
    target: Point,
    size: f64,
    color: Color,
    border: bool,
    trail: bool,
    clock: CycleClock,
}

/// Particles launched from the center with skewed distances, sizes and colors.
#[derive(Debug)]
pub struct BiasedBurstScene {
    center: Point,
    cycle: u64,
    embers: Vec<Ember>,
    fade: Interpolation,
    heading: Heading,
}

impl BiasedBurstScene {
    /// Draw colors, distances, sizes and the big/border/trail subsets.
    pub fn new(params: BiasedBurstParams, setup: SceneSetup) -> ReelResult<Self> {
        if params.cycle == 0 {
            return Err(ReelError::validation("biased_burst cycle must be > 0"));
        }
        if !(params.travel.is_finite() && params.travel > 0.0) {
            return Err(ReelError::validation("biased_burst travel must be > 0"));
        }
        let n = params.count;
        let center = setup.canvas.center();
        let big = sample_indices(n, fraction_of(n, params.big_fraction), "big");
        let border = sample_indices(n, fraction_of(n, params.border_fraction), "border");
        let trail = sample_indices(n, fraction_of(n, params.trail_fraction), "trail");

        let embers = (0..n)
            .map(|i| {
                let angle = random_at("angle", i) * TAU;
                let distance =
                    params.distance_min + biased(&format!("dist-{i}"), params.bias) * params.distance_spread;
                let mut size =
                    params.size_min + (1.0 - biased(&format!("size-{i}"), params.bias)) * params.size_spread;
                if big.contains(&i) {
                    size *= params.big_scale;
                }
                Ember {
                    target: Point::new(
                        center.x + angle.cos() * distance,
                        center.y + angle.sin() * distance,
                    ),
                    size,
                    color: *params.colors.pick(&format!("color-{i}")),
                    border: border.contains(&i),
                    trail: trail.contains(&i),
                    clock: CycleClock {
                        period: params.cycle,
                        delay: (random_at("delay", i) * params.max_delay as f64).floor(),
                        duration: params.travel,
                    },
                }
            })
            .collect::<Vec<_>>();
        tracing::debug!(
            count = embers.len(),
            big = big.len(),
            border = border.len(),
            trail = trail.len(),
            "biased burst built"
        );
        Ok(Self {
            center,
            cycle: params.cycle,
            embers,
            fade: Interpolation::new(&[0.0, 0.1, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.3])?,
            heading: Heading::top(
                setup.canvas,
                "Biased Random",
                Some("Weighted probability & skewed distribution"),
            )?,
        })
    }

    /// Launch progress of particle `i` at a local frame.
    pub fn progress(&self, i: usize, frame: FrameIndex) -> Option<f64> {
        self.embers.get(i).map(|e| e.clock.progress(frame.0))
    }

    fn ember_sprites(&self, i: usize, e: &Ember, frame: u64) -> impl Iterator<Item = Sprite> {
        let p = e.clock.progress(frame);
        let center = self.center.lerp(e.target, p);
        let opacity = self.fade.sample(p);

        let ghost = (e.trail && p > 0.1 && p < 0.9).then(|| {
            Sprite::disc("trail", i, Shape::Circle, center, e.size)
                .color(e.color.with_alpha(0.3))
                .uniform_scale(1.0 + (1.0 - p) * 0.5)
        });

        let mut main = Sprite::disc("particle", i, Shape::Circle, center, e.size)
            .color(e.color)
            .opacity(opacity)
            .glow(e.size);
        if e.border {
            main = main.stroke(2.0);
        }
        ghost.into_iter().chain(std::iter::once(main))
    }
}

impl Scene for BiasedBurstScene {
    fn kind(&self) -> &'static str {
        "biased_burst"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let frame = ctx.frame.0;
        let mut sprites = self.heading.sprites(ctx);
        sprites.push(
            Sprite::disc("core", 0, Shape::Circle, self.center, 40.0)
                .color(Color::WHITE.with_alpha(0.3))
                .glow(30.0),
        );
        for (i, e) in self.embers.iter().enumerate() {
            sprites.extend(self.ember_sprites(i, e, frame));
        }
        sprites.push(frame_counter(ctx, frame % self.cycle, 0.08));
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/biased_burst.rs"]
mod tests;
