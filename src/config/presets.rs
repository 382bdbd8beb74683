//! Built-in reels.

use crate::{
    config::model::{ReelConfig, SceneKind, SceneSpec},
    foundation::core::{Canvas, Fps},
};

/// Names accepted by [`preset`], the demo reel first.
pub const PRESET_NAMES: &[&str] = &[
    "demo_reel",
    "rainbow_orb",
    "network",
    "constellation",
    "anticipation_burst",
    "biased_burst",
    "fade_trail",
    "starfield",
];

/// Names accepted by [`preset`].
pub fn preset_names() -> &'static [&'static str] {
    PRESET_NAMES
}

fn spec(id: &str, duration: u64, scene: SceneKind) -> SceneSpec {
    SceneSpec {
        id: id.to_string(),
        duration,
        scene,
    }
}

fn reel(scenes: Vec<SceneSpec>) -> ReelConfig {
    ReelConfig {
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas::FULL_HD,
        scenes,
    }
}

/// The six-scene demo reel, 690 frames.
pub fn demo_reel() -> ReelConfig {
    reel(vec![
        spec("title", 90, SceneKind::TitleCard(Default::default())),
        spec("shapes", 120, SceneKind::ShapeDance(Default::default())),
        spec("slides", 120, SceneKind::CardSlide(Default::default())),
        spec("particles", 120, SceneKind::FloatField(Default::default())),
        spec("waveform", 120, SceneKind::Waveform(Default::default())),
        spec("end", 120, SceneKind::EndCard(Default::default())),
    ])
}

/// A single-scene reel by name, `None` for an unknown name.
pub fn preset(name: &str) -> Option<ReelConfig> {
    let one = |duration: u64, scene: SceneKind| Some(reel(vec![spec(name, duration, scene)]));
    match name {
        "demo_reel" => Some(demo_reel()),
        "rainbow_orb" => one(300, SceneKind::RainbowOrb(Default::default())),
        "network" => one(300, SceneKind::Network(Default::default())),
        "constellation" => one(300, SceneKind::Constellation(Default::default())),
        "anticipation_burst" => one(270, SceneKind::AnticipationBurst(Default::default())),
        "biased_burst" => one(360, SceneKind::BiasedBurst(Default::default())),
        "fade_trail" => one(300, SceneKind::FadeTrail(Default::default())),
        "starfield" => one(300, SceneKind::Starfield(Default::default())),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/presets.rs"]
mod tests;
