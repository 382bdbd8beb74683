use kurbo::Size;

use crate::{
    animation::spring::{Spring, SpringConfig},
    foundation::{
        color::Color,
        core::{Canvas, Point},
        error::ReelResult,
    },
    scene::model::{SceneCtx, Shape, Sprite},
};

/// Title text with an optional subtitle, faded in by a heavily damped spring.
#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    title: String,
    subtitle: Option<String>,
    anchor: Point,
    title_px: f64,
    subtitle_px: f64,
    delay: f64,
    fade: Spring,
}

impl Heading {
    /// Heading centered horizontally near the top edge.
    pub fn top(canvas: Canvas, title: &str, subtitle: Option<&str>) -> ReelResult<Self> {
        Self::at(Point::new(canvas.w() / 2.0, 90.0), 52.0, title, subtitle)
    }

    /// Heading in the middle of the canvas, in a larger size.
    pub fn centered(canvas: Canvas, title: &str, subtitle: Option<&str>) -> ReelResult<Self> {
        Self::at(canvas.center(), 72.0, title, subtitle)
    }

    /// Heading whose title is centered on `anchor`.
    pub fn at(anchor: Point, title_px: f64, title: &str, subtitle: Option<&str>) -> ReelResult<Self> {
        Ok(Self {
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            anchor,
            title_px,
            subtitle_px: (title_px * 0.45).round(),
            delay: 0.0,
            fade: Spring::new(SpringConfig::damped(20.0))?,
        })
    }

    /// Start the fade `frames` after the scene starts.
    pub fn delayed(mut self, frames: f64) -> Self {
        self.delay = frames;
        self
    }

    /// Fade-in opacity at the scene's local frame.
    pub fn opacity(&self, ctx: &SceneCtx) -> f64 {
        self.fade
            .sample_delayed(ctx.f(), self.delay, ctx.fps)
            .clamp(0.0, 1.0)
    }

    /// Title and subtitle sprites.
    pub fn sprites(&self, ctx: &SceneCtx) -> Vec<Sprite> {
        let opacity = self.opacity(ctx);
        let mut out = vec![
            Sprite::new(
                "title",
                0,
                Shape::Label(self.title.clone()),
                self.anchor,
                Size::new(0.0, self.title_px),
            )
            .opacity(opacity),
        ];
        if let Some(sub) = &self.subtitle {
            let y = self.anchor.y + self.title_px * 0.5 + 10.0 + self.subtitle_px * 0.5;
            out.push(
                Sprite::new(
                    "subtitle",
                    0,
                    Shape::Label(sub.clone()),
                    Point::new(self.anchor.x, y),
                    Size::new(0.0, self.subtitle_px),
                )
                .color(Color::WHITE.with_alpha(0.6))
                .opacity(opacity),
            );
        }
        out
    }
}

/// Zero-padded counter (usually the local frame) in the bottom-right corner.
pub fn frame_counter(ctx: &SceneCtx, value: u64, alpha: f64) -> Sprite {
    let text = format!("{value:03}");
    Sprite::new(
        "frame_counter",
        0,
        Shape::Label(text),
        Point::new(ctx.canvas.w() - 140.0, ctx.canvas.h() - 80.0),
        Size::new(0.0, 80.0),
    )
    .color(Color::WHITE.with_alpha(alpha))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/heading.rs"]
mod tests;
