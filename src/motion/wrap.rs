use crate::foundation::{
    core::{Canvas, Point, Vec2},
    math::wrap,
};

/// Constant-velocity drift that re-enters from the opposite edge.
///
/// `p(frame) = (p0 + v * frame) mod canvas`, evaluated directly for any frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WrapDrift {
    /// Position at frame 0.
    pub origin: Point,
    /// Displacement per frame.
    pub velocity: Vec2,
}

impl WrapDrift {
    /// Drift from `origin` by `velocity` per frame.
    pub fn new(origin: Point, velocity: Vec2) -> Self {
        Self { origin, velocity }
    }

    /// Position at `frame`, wrapped into `[0, width) x [0, height)`.
    pub fn at(&self, frame: f64, canvas: Canvas) -> Point {
        let raw = self.origin + self.velocity * frame;
        Point::new(wrap(raw.x, canvas.w()), wrap(raw.y, canvas.h()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/wrap.rs"]
mod tests;
