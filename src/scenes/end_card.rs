use kurbo::Size;

use crate::{
    animation::{
        interpolate::{Extrapolate, Interpolation},
        spring::{Spring, SpringConfig},
    },
    foundation::{
        color::Color,
        core::Point,
        error::{ReelError, ReelResult},
    },
    scene::model::{Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite},
};

/// Parameters of the closing card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EndCardParams {
    /// Logo text.
    pub logo: String,
    /// Line under the logo.
    pub tagline: String,
    /// Feature pills, revealed left to right.
    pub features: Vec<String>,
    /// Footer text.
    pub url: String,
    /// Number of decorative rings.
    pub rings: usize,
    /// Frames of fade-out at the end.
    pub fade_out: f64,
}

impl Default for EndCardParams {
    fn default() -> Self {
        Self {
            logo: "Remotion".to_string(),
            tagline: "Make videos programmatically".to_string(),
            features: [
                "useCurrentFrame()",
                "useVideoConfig()",
                "spring()",
                "interpolate()",
                "<Sequence>",
                "<AbsoluteFill>",
                "random()",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            url: "remotion.dev".to_string(),
            rings: 5,
            fade_out: 30.0,
        }
    }
}

const PILL_HEIGHT: f64 = 48.0;
const PILL_GAP: f64 = 20.0;
const ROW_MAX: f64 = 1200.0;
const FEATURES_BOTTOM: f64 = 180.0;

/// Monospace label at 20px plus horizontal padding.
fn pill_width(text: &str) -> f64 {
    text.chars().count() as f64 * 12.0 + 48.0
}

/// Centers of the feature pills, wrapped into rows no wider than `ROW_MAX` and
/// stacked upwards from the bottom margin.
fn flow(features: &[String], canvas_w: f64, canvas_h: f64) -> Vec<(Point, f64)> {
    let mut rows: Vec<Vec<(usize, f64)>> = Vec::new();
    let mut used = 0.0;
    for (i, text) in features.iter().enumerate() {
        let w = pill_width(text);
        match rows.last_mut() {
            Some(row) if used + PILL_GAP + w <= ROW_MAX => {
                used += PILL_GAP + w;
                row.push((i, w));
            }
            _ => {
                used = w;
                rows.push(vec![(i, w)]);
            }
        }
    }

    let mut out = vec![(Point::ZERO, 0.0); features.len()];
    let bottom = canvas_h - FEATURES_BOTTOM;
    let n_rows = rows.len() as f64;
    for (r, row) in rows.iter().enumerate() {
        let width: f64 = row.iter().map(|(_, w)| w).sum::<f64>() + PILL_GAP * (row.len() as f64 - 1.0);
        let y = bottom - (n_rows - r as f64 - 1.0) * (PILL_HEIGHT + PILL_GAP) - PILL_HEIGHT / 2.0;
        let mut x = (canvas_w - width) / 2.0;
        for &(i, w) in row {
            out[i] = (Point::new(x + w / 2.0, y), w);
            x += w + PILL_GAP;
        }
    }
    out
}

/// Closing card: springing logo, expanding rings, staggered feature pills, fade-out.
#[derive(Debug)]
pub struct EndCardScene {
    params: EndCardParams,
    logo_scale: Spring,
    logo_turn: Spring,
    settle: Spring,
    pill_drop: Spring,
    gradient: Interpolation,
    end: f64,
    /// `None` when the card cuts out on its last frame.
    fade: Option<Interpolation>,
}

impl EndCardScene {
    /// Build the curves; the fade-out is anchored to the scene duration.
    pub fn new(params: EndCardParams, setup: SceneSetup) -> ReelResult<Self> {
        tracing::debug!(
            features = params.features.len(),
            rings = params.rings,
            "end card built"
        );
        if !(params.fade_out.is_finite() && params.fade_out >= 0.0) {
            return Err(ReelError::validation("end_card fade_out must be >= 0"));
        }
        let end = setup.duration as f64;
        let fade = if end - params.fade_out < end {
            Some(
                Interpolation::new(&[end - params.fade_out, end], &[1.0, 0.0])?
                    .extrapolate(Extrapolate::Clamp),
            )
        } else {
            None
        };
        Ok(Self {
            logo_scale: Spring::new(SpringConfig::with(10.0, 80.0))?,
            logo_turn: Spring::between(SpringConfig::damped(15.0), -20.0, 0.0)?,
            settle: Spring::new(SpringConfig::damped(20.0))?,
            pill_drop: Spring::between(SpringConfig::damped(15.0), 30.0, 0.0)?,
            gradient: Interpolation::new(&[0.0, 120.0], &[135.0, 225.0])?,
            end,
            fade,
            params,
        })
    }

    /// Whole-card opacity at frame `f`.
    pub fn fade(&self, f: f64) -> f64 {
        match &self.fade {
            Some(fade) => fade.sample(f),
            None if f < self.end => 1.0,
            None => 0.0,
        }
    }

    /// Backdrop gradient direction in degrees; keeps turning past frame 120.
    pub fn gradient_angle(&self, f: f64) -> f64 {
        self.gradient.sample(f)
    }
}

impl Scene for EndCardScene {
    fn kind(&self) -> &'static str {
        "end_card"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame {
        let f = ctx.f();
        let p = &self.params;
        let fade = self.fade(f);
        let center = ctx.canvas.center();
        let white = |a: f64| Color::WHITE.with_alpha(a);

        let mut sprites: Vec<Sprite> = (0..p.rings)
            .map(|i| {
                Sprite::disc("ring", i, Shape::Ring, center, 200.0 + i as f64 * 150.0)
                    .stroke(2.0)
                    .color(white(0.1))
                    .uniform_scale(self.settle.sample_delayed(f, i as f64 * 10.0, ctx.fps))
                    .opacity(fade)
            })
            .collect();

        let logo_at = Point::new(center.x, ctx.canvas.h() * 0.35);
        let scale = self.logo_scale.sample(f, ctx.fps);
        let turn = self.logo_turn.sample(f, ctx.fps);
        sprites.push(
            Sprite::new("logo", 0, Shape::Label(p.logo.clone()), logo_at, Size::new(0.0, 120.0))
                .uniform_scale(scale)
                .rotation(turn)
                .opacity(fade),
        );
        let tagline_at = Point::new(logo_at.x, logo_at.y + (60.0 + 10.0 + 18.0) * scale);
        sprites.push(
            Sprite::new("tagline", 0, Shape::Label(p.tagline.clone()), tagline_at, Size::new(0.0, 36.0))
                .color(white(0.9))
                .uniform_scale(scale)
                .rotation(turn)
                .opacity(fade),
        );

        for (i, (at, w)) in flow(&p.features, ctx.canvas.w(), ctx.canvas.h()).into_iter().enumerate() {
            let delay = 20.0 + i as f64 * 5.0;
            let shown = self.settle.sample_delayed(f, delay, ctx.fps).clamp(0.0, 1.0) * fade;
            let at = Point::new(at.x, at.y + self.pill_drop.sample_delayed(f, delay, ctx.fps));
            sprites.push(
                Sprite::new("pill", i, Shape::RoundedRect(30.0), at, Size::new(w, PILL_HEIGHT))
                    .color(white(0.2))
                    .opacity(shown),
            );
            sprites.push(
                Sprite::new("pill_label", i, Shape::Label(p.features[i].clone()), at, Size::new(0.0, 20.0))
                    .opacity(shown),
            );
        }

        let url_alpha = self.settle.sample_delayed(f, 60.0, ctx.fps).clamp(0.0, 1.0) * fade;
        sprites.push(
            Sprite::new(
                "url",
                0,
                Shape::Label(p.url.clone()),
                Point::new(center.x, ctx.canvas.h() - 60.0 - 14.0),
                Size::new(0.0, 28.0),
            )
            .color(white(0.7))
            .opacity(url_alpha),
        );
        SceneFrame::from_sprites(sprites)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/end_card.rs"]
mod tests;
