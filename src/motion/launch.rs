use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Vec2},
};

/// Position of one particle flung outward from a center along a fixed heading.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RadialLaunch {
    /// Launch origin.
    pub center: Point,
    /// Heading in radians.
    pub angle: f64,
    /// Distance reached at progress 1.
    pub distance: f64,
    /// Curve applied to progress before scaling by distance.
    pub ease: Ease,
}

impl RadialLaunch {
    /// Launch with the two-phase launch/settle curve.
    pub fn new(center: Point, angle: f64, distance: f64) -> Self {
        Self {
            center,
            angle,
            distance,
            ease: Ease::LaunchSettle,
        }
    }

    /// Replace the progress curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Distance travelled at `progress` (clamped to `[0, 1]`).
    pub fn travelled(&self, progress: f64) -> f64 {
        self.ease.apply(progress) * self.distance
    }

    /// Position at `progress`.
    pub fn at(&self, progress: f64) -> Point {
        self.center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.travelled(progress)
    }
}

/// Repeating per-particle schedule inside a looping cycle.
///
/// Within each cycle of `period` frames, progress stays 0 until `delay` frames have
/// passed, then rises linearly to 1 over `duration` frames and holds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CycleClock {
    /// Cycle length in frames.
    pub period: u64,
    /// Frames to wait at the start of each cycle.
    pub delay: f64,
    /// Frames from start of motion to progress 1.
    pub duration: f64,
}

impl CycleClock {
    /// Frame within the current cycle.
    pub fn cycle_frame(&self, frame: u64) -> u64 {
        if self.period == 0 {
            return frame;
        }
        frame % self.period
    }

    /// Progress in `[0, 1]` at global `frame`.
    pub fn progress(&self, frame: u64) -> f64 {
        let active = (self.cycle_frame(frame) as f64 - self.delay).max(0.0);
        if self.duration <= 0.0 {
            return if active > 0.0 { 1.0 } else { 0.0 };
        }
        (active / self.duration).min(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/launch.rs"]
mod tests;
