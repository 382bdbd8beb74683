use kurbo::Size;

use crate::{
    animation::spring::{Spring, SpringConfig},
    foundation::{
        color::Color,
        core::Point,
        error::{ReelError, ReelResult},
    },
    scene::model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
};

/// Parameters of the title card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TitleCardParams {
    /// Headline, animated glyph by glyph.
    pub title: String,
    /// Line that rises in below the headline.
    pub subtitle: String,
    /// Headline font size in pixels.
    pub font_px: f64,
    /// Frames between consecutive glyphs.
    pub stagger: f64,
    /// Frame the subtitle starts.
    pub subtitle_delay: f64,
}

impl Default for TitleCardParams {
    fn default() -> Self {
        Self {
            title: "REMOTION".to_string(),
            subtitle: "Demo Reel".to_string(),
            font_px: 150.0,
            stagger: 3.0,
            subtitle_delay: 30.0,
        }
    }
}

/// Headline glyphs that spring up and untwist one after another, then a rising subtitle.
#[derive(Debug)]
pub struct TitleCardScene {
    params: TitleCardParams,
    glyphs: Vec<char>,
    glyph_scale: Spring,
    glyph_turn: Spring,
    sub_fade: Spring,
    sub_rise: Spring,
}

impl TitleCardScene {
    /// Split the headline into glyphs and build the springs.
    pub fn new(params: TitleCardParams, _setup: SceneSetup) -> ReelResult<Self> {
        if !(params.font_px.is_finite() && params.font_px > 0.0) {
            return Err(ReelError::validation("title_card font_px must be > 0"));
        }
        let glyphs: Vec<char> = params.title.chars().collect();
        tracing::debug!(glyphs = glyphs.len(), "title card built");
        Ok(Self {
            glyphs,
            glyph_scale: Spring::new(SpringConfig::with(12.0, 200.0))?,
            glyph_turn: Spring::between(SpringConfig::damped(15.0), -180.0, 0.0)?,
            sub_fade: Spring::new(SpringConfig::damped(20.0))?,
            sub_rise: Spring::between(SpringConfig::damped(15.0), 50.0, 0.0)?,
            params,
        })
    }

    fn advance(&self) -> f64 {
        self.params.font_px * 0.7 + 10.0
    }
}

impl Scene for TitleCardScene {
    fn kind(&self) -> &'static str {
        "title_card"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let p = &self.params;
        let center = ctx.canvas.center();
        let advance = self.advance();
        let left = center.x - advance * (self.glyphs.len() as f64 - 1.0) / 2.0;

        let mut sprites: Vec<Sprite> = self
            .glyphs
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let delay = i as f64 * p.stagger;
                Sprite::new(
                    "glyph",
                    i,
                    Shape::Glyph(c),
                    Point::new(left + i as f64 * advance, center.y),
                    Size::new(p.font_px * 0.7, p.font_px),
                )
                .uniform_scale(self.glyph_scale.sample_delayed(f, delay, ctx.fps))
                .rotation(self.glyph_turn.sample_delayed(f, delay, ctx.fps))
            })
            .collect();

        let rise = self.sub_rise.sample_delayed(f, p.subtitle_delay, ctx.fps);
        sprites.push(
            Sprite::new(
                "subtitle",
                0,
                Shape::Label(p.subtitle.clone()),
                Point::new(center.x, ctx.canvas.h() - 330.0 + rise),
                Size::new(0.0, 60.0),
            )
            .color(Color::WHITE.with_alpha(0.9))
            .opacity(self.sub_fade.sample_delayed(f, p.subtitle_delay, ctx.fps)),
        );
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/title_card.rs"]
mod tests;
