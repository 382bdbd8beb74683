use kurbo::Size;

use crate::{
    animation::{
        spring::{Spring, SpringConfig},
        wave::{Wave, WaveStack},
    },
    foundation::{
        color::Color,
        core::Point,
        error::{ReelError, ReelResult},
    },
    scene::{
        heading::Heading,
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// Parameters of the waveform visualizer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveformParams {
    /// Number of bars.
    pub bars: usize,
    /// Bar width in pixels.
    pub bar_width: f64,
    /// Gap between bars.
    pub gap: f64,
    /// Height of a silent bar.
    pub min_height: f64,
    /// Extra height at full level.
    pub height_range: f64,
    /// Colors spread left to right across the bars.
    pub palette: Vec<Color>,
    /// Bar scale-in spring.
    pub spring: SpringConfig,
    /// Frames between consecutive bars starting their scale-in.
    pub stagger: f64,
    /// Number of pulsing rings.
    pub rings: usize,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            bars: 64,
            bar_width: 20.0,
            gap: 4.0,
            min_height: 50.0,
            height_range: 350.0,
            palette: vec![
                Color::rgb8(0x66, 0x7E, 0xEA, 1.0),
                Color::rgb8(0x76, 0x4B, 0xA2, 1.0),
                Color::rgb8(0xF6, 0x4F, 0x59, 1.0),
                Color::rgb8(0xC4, 0x71, 0xED, 1.0),
                Color::rgb8(0x12, 0xC2, 0xE9, 1.0),
            ],
            spring: SpringConfig::with(15.0, 150.0),
            stagger: 0.5,
            rings: 3,
        }
    }
}

/// Bars whose heights mix three oscillations, over pulsing rings and a beat counter.
#[derive(Debug)]
pub struct WaveformScene {
    params: WaveformParams,
    level: WaveStack,
    scale_in: Spring,
    heading: Heading,
}

impl WaveformScene {
    /// Validate the bar layout and build the level oscillator.
    pub fn new(params: WaveformParams, setup: SceneSetup) -> ReelResult<Self> {
        if params.palette.is_empty() {
            return Err(ReelError::validation("waveform palette must not be empty"));
        }
        let scale_in = Spring::new(params.spring)?;
        tracing::debug!(bars = params.bars, rings = params.rings, "waveform built");
        Ok(Self {
            level: WaveStack::new()
                .with(Wave::sin(0.5, 0.15).index_phase(0.3).offset(0.5))
                .with(Wave::sin(0.3, 0.08).index_phase(0.5).offset(0.3))
                .with(Wave::cos(0.2, 0.12).index_phase(0.2).offset(0.2)),
            scale_in,
            heading: Heading::at(
                Point::new(setup.canvas.w() / 2.0, 128.0),
                56.0,
                "Audio Visualization",
                Some("Math.sin() + frame-based animation"),
            )?,
            params,
        })
    }

    /// Normalized level of bar `i` at frame `f`, in `[0, 1]`.
    pub fn level(&self, i: usize, f: f64) -> f64 {
        self.level.at(f, i as f64)
    }

    /// Unscaled height of bar `i` at frame `f`.
    pub fn bar_height(&self, i: usize, f: f64) -> f64 {
        self.params.min_height + self.level(i, f) * self.params.height_range
    }

    fn bar_color(&self, i: usize) -> Color {
        let n = self.params.palette.len();
        let idx = (i * n / self.params.bars.max(1)).min(n - 1);
        self.params.palette[idx]
    }
}

impl Scene for WaveformScene {
    fn kind(&self) -> &'static str {
        "waveform"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let p = &self.params;
        let mut sprites = Vec::new();

        let ring_center = Point::new(ctx.canvas.w() / 2.0, ctx.canvas.h() * 0.35);
        for i in 0..p.rings {
            let fi = i as f64;
            sprites.push(
                Sprite::disc("ring", i, Shape::Ring, ring_center, 300.0 + fi * 100.0)
                    .stroke(2.0)
                    .opacity(0.1 - fi * 0.03)
                    .uniform_scale(1.0 + (f * 0.1 + fi).sin() * 0.2),
            );
        }

        let total = p.bars as f64 * p.bar_width + p.bars.saturating_sub(1) as f64 * p.gap;
        let left = (ctx.canvas.w() - total) / 2.0;
        let baseline = ctx.canvas.h() - 200.0;
        for i in 0..p.bars {
            let x = left + i as f64 * (p.bar_width + p.gap) + p.bar_width / 2.0;
            let scale = self
                .scale_in
                .sample_delayed(f, i as f64 * p.stagger, ctx.fps);
            sprites.push(
                Sprite::new(
                    "bar",
                    i,
                    Shape::Bar,
                    Point::new(x, baseline),
                    Size::new(p.bar_width, self.bar_height(i, f)),
                )
                .color(self.bar_color(i))
                .scale(1.0, scale)
                .glow(20.0),
            );
        }

        sprites.extend(self.heading.sprites(ctx));
        sprites.push(
            Sprite::new(
                "bpm",
                0,
                Shape::Label("120 BPM".to_string()),
                Point::new(ctx.canvas.w() - 200.0, ctx.canvas.h() - 100.0),
                Size::new(0.0, 64.0),
            )
            .opacity(0.8 + (f * 0.2).sin() * 0.2),
        );
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/waveform.rs"]
mod tests;
