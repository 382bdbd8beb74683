use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{ReelError, ReelResult},
    },
    scene::model::{Scene, SceneSetup},
    timeline::composer::Timeline,
};

/// Scenes played back to back at one frame rate on one canvas.
#[derive(Debug)]
pub struct Reel {
    fps: Fps,
    canvas: Canvas,
    timeline: Timeline<Box<dyn Scene>>,
}

impl Reel {
    /// Start building a reel.
    pub fn builder(fps: Fps, canvas: Canvas) -> ReelBuilder {
        ReelBuilder::new(fps, canvas)
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Scene timeline.
    pub fn timeline(&self) -> &Timeline<Box<dyn Scene>> {
        &self.timeline
    }

    /// Total length in frames.
    pub fn total_frames(&self) -> u64 {
        self.timeline.total()
    }
}

/// Collects scenes in play order.
///
/// Scenes are constructed by the caller, usually from [`ReelBuilder::setup`], so the
/// builder only checks the shared settings and sequences what it is given.
pub struct ReelBuilder {
    fps: Fps,
    canvas: Canvas,
    scenes: Vec<(String, u64, Box<dyn Scene>)>,
}

impl ReelBuilder {
    /// Empty reel at `fps` on `canvas`.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            scenes: Vec::new(),
        }
    }

    /// Construction context for a scene of `duration` frames in this reel.
    pub fn setup(&self, duration: u64) -> SceneSetup {
        SceneSetup {
            fps: self.fps,
            canvas: self.canvas,
            duration,
        }
    }

    /// Append a scene.
    pub fn scene(self, id: impl Into<String>, duration: u64, scene: impl Scene + 'static) -> Self {
        self.boxed(id, duration, Box::new(scene))
    }

    /// Append an already boxed scene.
    pub fn boxed(mut self, id: impl Into<String>, duration: u64, scene: Box<dyn Scene>) -> Self {
        self.scenes.push((id.into(), duration, scene));
        self
    }

    /// Validate settings and ids, then sequence the scenes.
    pub fn build(self) -> ReelResult<Reel> {
        self.fps.validate()?;
        self.canvas.validate()?;
        if let Some((id, _, _)) = self.scenes.iter().find(|(id, _, _)| id.trim().is_empty()) {
            return Err(ReelError::validation(format!(
                "scene id must be non-empty (got '{id}')"
            )));
        }
        Ok(Reel {
            fps: self.fps,
            canvas: self.canvas,
            timeline: Timeline::compose(self.scenes)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/reel.rs"]
mod tests;
