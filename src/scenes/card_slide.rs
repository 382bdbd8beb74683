use kurbo::Size;

use crate::{
    animation::{
        interpolate::{Extrapolate, Interpolation},
        spring::{Spring, SpringConfig},
    },
    foundation::{color::Color, core::Point, error::ReelResult},
    scene::{
        heading::Heading,
        model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
    },
};

/// One card of the row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    /// Card color.
    pub color: Color,
    /// Large symbol in the upper half.
    pub icon: String,
    /// Caption under the icon.
    pub label: String,
}

/// Parameters of the card slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardSlideParams {
    /// Cards left to right.
    pub cards: Vec<Card>,
    /// Frames between consecutive cards.
    pub stagger: f64,
    /// Frames for the progress bar to fill.
    pub progress_frames: f64,
}

impl Default for CardSlideParams {
    fn default() -> Self {
        let card = |rgb: (u8, u8, u8), icon: &str, label: &str| Card {
            color: Color::rgb8(rgb.0, rgb.1, rgb.2, 1.0),
            icon: icon.to_string(),
            label: label.to_string(),
        };
        Self {
            cards: vec![
                card((0xFF, 0x6B, 0x6B), "🎬", "Video"),
                card((0x4E, 0xCD, 0xC4), "🎨", "Design"),
                card((0x45, 0xB7, 0xD1), "⚛️", "React"),
                card((0x96, 0xCE, 0xB4), "🚀", "Export"),
            ],
            stagger: 10.0,
            progress_frames: 90.0,
        }
    }
}

const CARD: Size = Size::new(300.0, 400.0);
const GAP: f64 = 40.0;
const BAR_WIDTH: f64 = 400.0;

/// Evaluated pose of one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    /// Card center.
    pub center: Point,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

/// A row of cards that spring up into place one by one, above a progress bar.
#[derive(Debug)]
pub struct CardSlideScene {
    params: CardSlideParams,
    pop: Spring,
    lift: Spring,
    tilt: Interpolation,
    progress: Interpolation,
    heading: Heading,
}

impl CardSlideScene {
    /// Build the card curves.
    pub fn new(params: CardSlideParams, setup: SceneSetup) -> ReelResult<Self> {
        tracing::debug!(cards = params.cards.len(), "card slide built");
        let progress_end = params.progress_frames.max(f64::EPSILON);
        Ok(Self {
            pop: Spring::new(SpringConfig::with(12.0, 100.0))?,
            lift: Spring::between(SpringConfig::damped(15.0), 100.0, 0.0)?,
            tilt: Interpolation::new(&[0.0, 30.0, 60.0], &[-10.0, 5.0, 0.0])?
                .extrapolate_right(Extrapolate::Clamp),
            progress: Interpolation::new(&[0.0, progress_end], &[0.0, 1.0])?
                .extrapolate_right(Extrapolate::Clamp),
            heading: Heading::at(
                Point::new(setup.canvas.w() / 2.0, 104.0),
                48.0,
                "Sequence & Transitions",
                None,
            )?,
            params,
        })
    }

    /// Pose of card `i` at frame `f`.
    pub fn pose(&self, i: usize, f: f64, ctx: &SceneCtx) -> CardPose {
        let n = self.params.cards.len() as f64;
        let row = n * CARD.width + (n - 1.0).max(0.0) * GAP;
        let x = (ctx.canvas.w() - row) / 2.0 + i as f64 * (CARD.width + GAP) + CARD.width / 2.0;
        let local = f - i as f64 * self.params.stagger;
        let hover = (local * 0.1).sin() * 10.0;
        CardPose {
            center: Point::new(x, ctx.canvas.h() / 2.0 + self.lift.sample(local, ctx.fps) + hover),
            scale: self.pop.sample(local, ctx.fps),
            rotation: self.tilt.sample(local),
        }
    }

    /// Fill fraction of the progress bar at frame `f`.
    pub fn progress(&self, f: f64) -> f64 {
        self.progress.sample(f)
    }
}

impl Scene for CardSlideScene {
    fn kind(&self) -> &'static str {
        "card_slide"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let mut sprites = self.heading.sprites(ctx);
        for s in &mut sprites {
            s.color = Color::rgb8(0x33, 0x33, 0x33, 1.0);
        }
        for (i, card) in self.params.cards.iter().enumerate() {
            let pose = self.pose(i, f, ctx);
            sprites.push(
                Sprite::new("card", i, Shape::RoundedRect(30.0), pose.center, CARD)
                    .color(card.color)
                    .uniform_scale(pose.scale)
                    .rotation(pose.rotation)
                    .glow(60.0),
            );
            let icon_at = Point::new(pose.center.x, pose.center.y - 40.0 * pose.scale);
            let label_at = Point::new(pose.center.x, pose.center.y + 70.0 * pose.scale);
            sprites.push(
                Sprite::new("card_icon", i, Shape::Label(card.icon.clone()), icon_at, Size::new(0.0, 100.0))
                    .uniform_scale(pose.scale)
                    .rotation(pose.rotation),
            );
            sprites.push(
                Sprite::new("card_label", i, Shape::Label(card.label.clone()), label_at, Size::new(0.0, 36.0))
                    .uniform_scale(pose.scale)
                    .rotation(pose.rotation),
            );
        }

        let bar_center = Point::new(ctx.canvas.w() / 2.0, ctx.canvas.h() - 104.0);
        sprites.push(
            Sprite::new("progress_track", 0, Shape::RoundedRect(4.0), bar_center, Size::new(BAR_WIDTH, 8.0))
                .color(Color::rgba(0.0, 0.0, 0.0, 0.1)),
        );
        let fill = BAR_WIDTH * self.progress(f);
        sprites.push(
            Sprite::new(
                "progress_fill",
                0,
                Shape::RoundedRect(4.0),
                Point::new(bar_center.x - BAR_WIDTH / 2.0 + fill / 2.0, bar_center.y),
                Size::new(fill, 8.0),
            )
            .color(Color::rgb8(0x66, 0x7E, 0xEA, 1.0)),
        );
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/card_slide.rs"]
mod tests;
