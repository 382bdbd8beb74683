use crate::{
    eval::reel::Reel,
    foundation::{
        core::{Canvas, Fps},
        error::ReelResult,
    },
    scene::model::{Scene, SceneSetup},
    scenes::{
        anticipation_burst::{AnticipationBurstParams, AnticipationBurstScene},
        biased_burst::{BiasedBurstParams, BiasedBurstScene},
        card_slide::{CardSlideParams, CardSlideScene},
        constellation::{ConstellationParams, ConstellationScene},
        end_card::{EndCardParams, EndCardScene},
        fade_trail::{FadeTrailParams, FadeTrailScene},
        float_field::{FloatFieldParams, FloatFieldScene},
        network::{NetworkParams, NetworkScene},
        rainbow_orb::{RainbowOrbParams, RainbowOrbScene},
        shape_dance::{ShapeDanceParams, ShapeDanceScene},
        starfield::{StarfieldParams, StarfieldScene},
        title_card::{TitleCardParams, TitleCardScene},
        waveform::{WaveformParams, WaveformScene},
    },
};

/// A reel as loaded from JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ReelConfig {
    /// Frame rate shared by every scene.
    pub fps: Fps,
    /// Output surface shared by every scene.
    pub canvas: Canvas,
    /// Scenes in play order.
    pub scenes: Vec<SceneSpec>,
}

/// One timeline entry: `{"id": .., "duration": .., "kind": .., <params>}`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Unique entry id.
    pub id: String,
    /// Length in frames.
    pub duration: u64,
    /// Scene kind and its parameters; omitted parameters take their defaults.
    #[serde(flatten)]
    pub scene: SceneKind,
}

/// Every built-in scene, tagged by `kind`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneKind {
    /// Reflecting particles with Manhattan links.
    Network(NetworkParams),
    /// Wrapping shaped particles with Euclidean links.
    Constellation(ConstellationParams),
    /// Parallax star layers.
    Starfield(StarfieldParams),
    /// Weighted-color radial burst.
    BiasedBurst(BiasedBurstParams),
    /// Wind-up then launch burst.
    AnticipationBurst(AnticipationBurstParams),
    /// Looping rings around a hue-cycling core.
    RainbowOrb(RainbowOrbParams),
    /// Lissajous head with a fading trail.
    FadeTrail(FadeTrailParams),
    /// Floating, pulsing motes.
    FloatField(FloatFieldParams),
    /// Oscillating bar chart.
    Waveform(WaveformParams),
    /// Bouncing, spinning shapes.
    ShapeDance(ShapeDanceParams),
    /// Per-glyph title reveal.
    TitleCard(TitleCardParams),
    /// Sliding card row.
    CardSlide(CardSlideParams),
    /// Closing card.
    EndCard(EndCardParams),
}

impl SceneKind {
    /// Tag used in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Constellation(_) => "constellation",
            Self::Starfield(_) => "starfield",
            Self::BiasedBurst(_) => "biased_burst",
            Self::AnticipationBurst(_) => "anticipation_burst",
            Self::RainbowOrb(_) => "rainbow_orb",
            Self::FadeTrail(_) => "fade_trail",
            Self::FloatField(_) => "float_field",
            Self::Waveform(_) => "waveform",
            Self::ShapeDance(_) => "shape_dance",
            Self::TitleCard(_) => "title_card",
            Self::CardSlide(_) => "card_slide",
            Self::EndCard(_) => "end_card",
        }
    }

    /// Construct the scene for `setup`.
    pub fn build(&self, setup: SceneSetup) -> ReelResult<Box<dyn Scene>> {
        Ok(match self {
            Self::Network(p) => Box::new(NetworkScene::new(p.clone(), setup)?),
            Self::Constellation(p) => Box::new(ConstellationScene::new(p.clone(), setup)?),
            Self::Starfield(p) => Box::new(StarfieldScene::new(p.clone(), setup)?),
            Self::BiasedBurst(p) => Box::new(BiasedBurstScene::new(p.clone(), setup)?),
            Self::AnticipationBurst(p) => Box::new(AnticipationBurstScene::new(p.clone(), setup)?),
            Self::RainbowOrb(p) => Box::new(RainbowOrbScene::new(p.clone(), setup)?),
            Self::FadeTrail(p) => Box::new(FadeTrailScene::new(p.clone(), setup)?),
            Self::FloatField(p) => Box::new(FloatFieldScene::new(p.clone(), setup)?),
            Self::Waveform(p) => Box::new(WaveformScene::new(p.clone(), setup)?),
            Self::ShapeDance(p) => Box::new(ShapeDanceScene::new(p.clone(), setup)?),
            Self::TitleCard(p) => Box::new(TitleCardScene::new(p.clone(), setup)?),
            Self::CardSlide(p) => Box::new(CardSlideScene::new(p.clone(), setup)?),
            Self::EndCard(p) => Box::new(EndCardScene::new(p.clone(), setup)?),
        })
    }
}

impl ReelConfig {
    /// Parse a reel from JSON text.
    pub fn from_json(text: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total length in frames, without building any scene.
    pub fn total_frames(&self) -> u64 {
        self.scenes
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.duration))
    }

    /// Validate settings, construct every scene and sequence them.
    #[tracing::instrument(skip(self), fields(scenes = self.scenes.len()))]
    pub fn build(&self) -> ReelResult<Reel> {
        self.fps.validate()?;
        self.canvas.validate()?;
        let mut builder = Reel::builder(self.fps, self.canvas);
        for spec in &self.scenes {
            let scene = spec.scene.build(builder.setup(spec.duration))?;
            builder = builder.boxed(spec.id.clone(), spec.duration, scene);
        }
        builder.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
