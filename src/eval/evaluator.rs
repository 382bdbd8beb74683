use rayon::prelude::*;

use crate::{
    eval::reel::Reel,
    foundation::{
        color::Color,
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    links::proximity::Link,
    scene::model::{SceneCtx, Sprite},
};

/// Everything resolved for one global frame of a reel.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Global frame.
    pub frame: FrameIndex,
    /// Id of the active timeline entry.
    pub scene_id: String,
    /// Kind of the active scene.
    pub scene_kind: &'static str,
    /// Frame local to the active scene.
    pub local_frame: FrameIndex,
    /// Resolved elements in draw order.
    pub sprites: Vec<Sprite>,
    /// Proximity links in pair order.
    pub links: Vec<Link>,
    /// Base color for links, when the scene draws any.
    pub link_color: Option<Color>,
}

/// How [`Evaluator::eval_range`] spreads work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Threading {
    /// One frame after another on the calling thread.
    #[default]
    Sequential,
    /// Frames evaluated on the rayon pool; output order is still frame order.
    Parallel,
}

/// Stateless reel evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Resolve global `frame` of `reel`.
    #[tracing::instrument(skip(reel))]
    pub fn eval_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<FrameState> {
        let timeline = reel.timeline();
        let Some((idx, local)) = timeline.locate(frame) else {
            return Err(ReelError::evaluation("frame is out of bounds"));
        };
        let entry = &timeline.entries()[idx];
        let ctx = SceneCtx {
            frame: local,
            fps: reel.fps(),
            canvas: reel.canvas(),
            duration: entry.range.len_frames(),
        };
        let out = entry.item.evaluate(&ctx);
        Ok(FrameState {
            frame,
            scene_id: entry.id.clone(),
            scene_kind: entry.item.kind(),
            local_frame: local,
            sprites: out.sprites,
            links: out.links,
            link_color: out.link_color,
        })
    }

    /// Resolve every frame of `range`, in frame order.
    ///
    /// Fails on the first frame outside the reel.
    #[tracing::instrument(skip(reel))]
    pub fn eval_range(
        reel: &Reel,
        range: FrameRange,
        threading: Threading,
    ) -> ReelResult<Vec<FrameState>> {
        if range.end.0 > reel.total_frames() {
            return Err(ReelError::evaluation(format!(
                "range end {} exceeds reel length {}",
                range.end.0,
                reel.total_frames()
            )));
        }
        match threading {
            Threading::Sequential => (range.start.0..range.end.0)
                .map(|f| Self::eval_frame(reel, FrameIndex(f)))
                .collect(),
            Threading::Parallel => (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| Self::eval_frame(reel, FrameIndex(f)))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
