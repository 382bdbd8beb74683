use std::fmt::Debug;

use kurbo::Size;

use crate::{
    foundation::{
        color::Color,
        core::{Canvas, FrameIndex, Fps, Point, Vec2},
    },
    links::proximity::Link,
};

/// Geometry tag of a sprite. Pixel rendering is left to consumers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Shape {
    /// Filled disc.
    Circle,
    /// Circle outline.
    Ring,
    /// Upward-pointing triangle.
    Triangle,
    /// Axis-aligned square.
    Square,
    /// Rectangle with rounded corners, radius in pixels.
    RoundedRect(f64),
    /// Five-pointed star.
    Star,
    /// Vertical bar; `center` is its bottom midpoint and vertical scale grows upward.
    Bar,
    /// A single character.
    Glyph(char),
    /// A run of text.
    Label(String),
}

impl Shape {
    /// Stable name of the variant, used in fingerprints and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ring => "ring",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::RoundedRect(_) => "rounded_rect",
            Self::Star => "star",
            Self::Bar => "bar",
            Self::Glyph(_) => "glyph",
            Self::Label(_) => "label",
        }
    }
}

/// Configurable subset of [`Shape`] for particle tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleShape {
    /// Disc.
    Circle,
    /// Triangle.
    Triangle,
    /// Square.
    Square,
    /// Star.
    Star,
}

impl From<ParticleShape> for Shape {
    fn from(s: ParticleShape) -> Self {
        match s {
            ParticleShape::Circle => Shape::Circle,
            ParticleShape::Triangle => Shape::Triangle,
            ParticleShape::Square => Shape::Square,
            ParticleShape::Star => Shape::Star,
        }
    }
}

/// How a shape's area is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Solid interior.
    #[default]
    Fill,
    /// Outline only.
    Stroke {
        /// Line width in pixels.
        width: f64,
    },
}

/// Resolved visual properties of one element at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Sprite {
    /// Group the element belongs to inside its scene (e.g. `"particle"`, `"ring"`).
    pub layer: &'static str,
    /// Index inside the layer.
    pub index: usize,
    /// Geometry.
    pub shape: Shape,
    /// Center in canvas pixels.
    pub center: Point,
    /// Unscaled width and height.
    pub size: Size,
    /// Opacity in `[0, 1]`, multiplied with `color.a` by consumers.
    pub opacity: f64,
    /// Per-axis scale.
    pub scale: Vec2,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Base color.
    pub color: Color,
    /// Fill or stroke.
    pub paint: Paint,
    /// Glow radius hint in pixels; 0 when none.
    pub glow: f64,
}

impl Sprite {
    /// Fully opaque, unscaled, white filled sprite.
    pub fn new(layer: &'static str, index: usize, shape: Shape, center: Point, size: Size) -> Self {
        Self {
            layer,
            index,
            shape,
            center,
            size,
            opacity: 1.0,
            scale: Vec2::new(1.0, 1.0),
            rotation_deg: 0.0,
            color: Color::WHITE,
            paint: Paint::Fill,
            glow: 0.0,
        }
    }

    /// Square bounding box of side `d`.
    pub fn disc(layer: &'static str, index: usize, shape: Shape, center: Point, d: f64) -> Self {
        Self::new(layer, index, shape, center, Size::new(d, d))
    }

    /// Set opacity, clamped to `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Same scale on both axes.
    pub fn uniform_scale(mut self, s: f64) -> Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// Per-axis scale.
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Vec2::new(sx, sy);
        self
    }

    /// Rotation in degrees.
    pub fn rotation(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }

    /// Base color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Paint as an outline of the given width.
    pub fn stroke(mut self, width: f64) -> Self {
        self.paint = Paint::Stroke { width };
        self
    }

    /// Glow radius hint.
    pub fn glow(mut self, radius: f64) -> Self {
        self.glow = radius;
        self
    }
}

/// Everything a scene produces for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Sprites in back-to-front order.
    pub sprites: Vec<Sprite>,
    /// Proximity links, drawn under the sprites.
    pub links: Vec<Link>,
    /// Stroke color of the links.
    pub link_color: Option<Color>,
}

impl SceneFrame {
    /// Frame with sprites only.
    pub fn from_sprites(sprites: Vec<Sprite>) -> Self {
        Self {
            sprites,
            ..Self::default()
        }
    }
}

/// Inputs shared by every scene evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneCtx {
    /// Frame local to the scene, starting at 0.
    pub frame: FrameIndex,
    /// Reel frame rate.
    pub fps: Fps,
    /// Output surface.
    pub canvas: Canvas,
    /// Scene length in frames.
    pub duration: u64,
}

impl SceneCtx {
    /// Local frame as a float.
    pub fn f(&self) -> f64 {
        self.frame.as_f64()
    }
}

/// What a scene constructor knows about where it will be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSetup {
    /// Reel frame rate.
    pub fps: Fps,
    /// Output surface.
    pub canvas: Canvas,
    /// Scene length in frames.
    pub duration: u64,
}

impl SceneSetup {
    /// 30 fps on the full-HD canvas.
    pub fn full_hd(duration: u64) -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas::FULL_HD,
            duration,
        }
    }

    /// Evaluation context for a local frame.
    pub fn ctx(&self, frame: FrameIndex) -> SceneCtx {
        SceneCtx {
            frame,
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
        }
    }
}

/// A deterministic, seekable animated scene.
///
/// Descriptors are built in the constructor and never mutated; `evaluate` is a pure
/// function of the context, so any frame may be evaluated in any order or in parallel.
pub trait Scene: Send + Sync + Debug {
    /// Stable scene kind name.
    fn kind(&self) -> &'static str;

    /// Resolve every element for `ctx.frame`.
    fn evaluate(&self, ctx: &SceneCtx) -> SceneFrame;
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
