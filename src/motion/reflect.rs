//! Bounded drift with elastic reflection.
//!
//! The reference definition is a replay from frame 0: every frame adds the velocity, and
//! an axis that leaves `[0, limit]` flips its velocity sign and is clamped back onto the
//! boundary. [`ReflectTrack`] answers the same question from a memo of checkpoints taken
//! at every flip (and at a fixed stride), replaying only the tail after the nearest
//! checkpoint. Both paths run the identical per-frame step, so results match bit for bit.

use crate::foundation::core::{Canvas, Point, Vec2};

/// Frames between forced checkpoints when no flip happens for a long time.
const CHECKPOINT_STRIDE: u64 = 64;

#[inline]
fn step_axis(pos: &mut f64, vel: &mut f64, limit: f64) -> bool {
    *pos += *vel;
    if *pos < 0.0 || *pos > limit {
        *vel = -*vel;
        *pos = pos.clamp(0.0, limit);
        return true;
    }
    false
}

/// Naive replay: state after `frame` steps from `(origin, velocity)`.
pub fn replay(origin: Point, velocity: Vec2, frame: u64, canvas: Canvas) -> (Point, Vec2) {
    let (mut x, mut y) = (origin.x, origin.y);
    let (mut vx, mut vy) = (velocity.x, velocity.y);
    for _ in 0..frame {
        step_axis(&mut x, &mut vx, canvas.w());
        step_axis(&mut y, &mut vy, canvas.h());
    }
    (Point::new(x, y), Vec2::new(vx, vy))
}

/// A velocity sign flip on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FlipEvent {
    /// Frame whose step caused the flip (state index after stepping).
    pub frame: u64,
    /// 0 for x, 1 for y.
    pub axis: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Checkpoint {
    frame: u64,
    pos: f64,
    vel: f64,
    flipped: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct AxisTrack {
    limit: f64,
    checkpoints: Vec<Checkpoint>,
}

impl AxisTrack {
    fn build(pos0: f64, vel0: f64, limit: f64, horizon: u64) -> Self {
        let mut checkpoints = vec![Checkpoint {
            frame: 0,
            pos: pos0,
            vel: vel0,
            flipped: false,
        }];
        let (mut pos, mut vel) = (pos0, vel0);
        for f in 1..=horizon {
            let flipped = step_axis(&mut pos, &mut vel, limit);
            if flipped || f % CHECKPOINT_STRIDE == 0 {
                checkpoints.push(Checkpoint {
                    frame: f,
                    pos,
                    vel,
                    flipped,
                });
            }
        }
        Self { limit, checkpoints }
    }

    fn at(&self, frame: u64) -> (f64, f64) {
        let idx = self.checkpoints.partition_point(|c| c.frame <= frame);
        // checkpoints[0] is frame 0, so idx >= 1.
        let cp = self.checkpoints[idx.saturating_sub(1)];
        let (mut pos, mut vel) = (cp.pos, cp.vel);
        for _ in cp.frame..frame {
            step_axis(&mut pos, &mut vel, self.limit);
        }
        (pos, vel)
    }
}

/// Memoized reflection trajectory for one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectTrack {
    x: AxisTrack,
    y: AxisTrack,
}

impl ReflectTrack {
    /// Precompute checkpoints for frames `0..=horizon`.
    ///
    /// Frames past the horizon are still answered exactly, by replaying from the last
    /// checkpoint.
    pub fn build(origin: Point, velocity: Vec2, canvas: Canvas, horizon: u64) -> Self {
        Self {
            x: AxisTrack::build(origin.x, velocity.x, canvas.w(), horizon),
            y: AxisTrack::build(origin.y, velocity.y, canvas.h(), horizon),
        }
    }

    /// Position and velocity after `frame` steps.
    pub fn at(&self, frame: u64) -> (Point, Vec2) {
        let (x, vx) = self.x.at(frame);
        let (y, vy) = self.y.at(frame);
        (Point::new(x, y), Vec2::new(vx, vy))
    }

    /// Position after `frame` steps.
    pub fn position(&self, frame: u64) -> Point {
        self.at(frame).0
    }

    /// Flip events recorded within the horizon, ordered by frame then axis.
    pub fn flips(&self) -> Vec<FlipEvent> {
        let mut out: Vec<FlipEvent> = [(0u8, &self.x), (1u8, &self.y)]
            .into_iter()
            .flat_map(|(axis, track)| {
                track
                    .checkpoints
                    .iter()
                    .filter(|c| c.flipped)
                    .map(move |c| FlipEvent {
                        frame: c.frame,
                        axis,
                    })
            })
            .collect();
        out.sort_by_key(|e| (e.frame, e.axis));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/reflect.rs"]
mod tests;
