use crate::foundation::core::{Point, Vec2};

/// Circular motion around a fixed center.
///
/// `p(frame) = center + (cos, sin)(angle + frame * speed) * radius`, angles in radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Orbit {
    /// Center of rotation.
    pub center: Point,
    /// Distance from the center.
    pub radius: f64,
    /// Angle at frame 0, in radians.
    pub angle: f64,
    /// Angular speed in radians per frame.
    pub speed: f64,
}

impl Orbit {
    /// Orbit around `center` at `radius`, starting at `angle` and advancing `speed` rad/frame.
    pub fn new(center: Point, radius: f64, angle: f64, speed: f64) -> Self {
        Self {
            center,
            radius,
            angle,
            speed,
        }
    }

    /// Angle at `frame`, in radians.
    pub fn angle_at(&self, frame: f64) -> f64 {
        self.angle + frame * self.speed
    }

    /// Position at `frame`.
    pub fn at(&self, frame: f64) -> Point {
        let a = self.angle_at(frame);
        self.center + Vec2::new(a.cos(), a.sin()) * self.radius
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/orbit.rs"]
mod tests;
