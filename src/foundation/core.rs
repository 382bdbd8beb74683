use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Vec2};

/// A 0-based frame index. Frames are the only time input in reelkit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Frame index as a float, for closed-form motion math.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame inside the range.
    pub start: FrameIndex,
    /// First frame after the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Build a range from a start frame and a length in frames.
    pub fn from_len(start: FrameIndex, len: u64) -> Self {
        Self {
            start,
            end: FrameIndex(start.0.saturating_add(len)),
        }
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frame.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Map a global frame into this range's local time. `None` outside the range.
    pub fn local(self, f: FrameIndex) -> Option<FrameIndex> {
        self.contains(f).then(|| FrameIndex(f.0 - self.start.0))
    }

    /// Clamp `f` into the range (inclusive of the last frame).
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Convert seconds to whole frames, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }

    pub(crate) fn validate(self) -> ReelResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }
}

/// Output surface size in pixels; also the wraparound/reflection bounds of particle motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The 1920x1080 canvas every built-in scene is laid out for.
    pub const FULL_HD: Canvas = Canvas {
        width: 1920,
        height: 1080,
    };

    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Width as a float.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    pub(crate) fn validate(self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
