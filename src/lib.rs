//! reelkit is a deterministic, frame-driven motion-graphics engine.
//!
//! Every visual property is a pure function of the frame number (plus a string seed
//! where randomness is involved), so any frame can be evaluated in isolation, out of
//! order, or in parallel. The public API is:
//!
//! - Seeded randomness ([`random`], [`SeedKey`], [`WeightedTable`]) and animation
//!   primitives ([`Interpolation`], [`Spring`], [`Ease`], [`Wave`])
//! - Particle motion models ([`WrapDrift`], [`ReflectTrack`], [`Orbit`], [`RadialLaunch`])
//!   and proximity [`links`]
//! - Built-in [`Scene`]s, sequenced by a [`Timeline`] into a [`Reel`]
//! - [`Evaluator`] resolving a global frame into a [`FrameState`], and a
//!   [`FrameFingerprint`] over it
//!
//! Pixel rendering and encoding are left to consumers of [`FrameState`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod eval;
pub(crate) mod links;
pub(crate) mod motion;
pub(crate) mod random;
pub(crate) mod scene;
pub(crate) mod scenes;
pub(crate) mod timeline;

pub use crate::foundation::color::{Color, Rgba8Premul};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::{Ease, launch_settle};
pub use crate::animation::interpolate::{Extrapolate, Interpolation};
pub use crate::animation::spring::{Spring, SpringConfig};
pub use crate::animation::wave::{Trig, Wave, WaveStack};
pub use crate::random::pick::{WeightedTable, biased, fraction_of, sample_indices};
pub use crate::random::seeded::{SeedKey, random, random_at, random_range};

pub use crate::links::proximity::{DistanceMetric, Link, LinkConfig, links};
pub use crate::motion::launch::{CycleClock, RadialLaunch};
pub use crate::motion::orbit::Orbit;
pub use crate::motion::reflect::{FlipEvent, ReflectTrack, replay};
pub use crate::motion::wrap::WrapDrift;
pub use crate::timeline::composer::{Timeline, TimelineEntry};

pub use crate::scene::heading::{Heading, frame_counter};
pub use crate::scene::model::{
    Paint, ParticleShape, Scene, SceneCtx, SceneFrame, SceneSetup, Shape, Sprite,
};
pub use crate::scenes::anticipation_burst::{
    AnticipationBurstParams, AnticipationBurstScene, BurstPhase,
};
pub use crate::scenes::biased_burst::{BiasedBurstParams, BiasedBurstScene};
pub use crate::scenes::card_slide::{Card, CardPose, CardSlideParams, CardSlideScene};
pub use crate::scenes::constellation::{ConstellationParams, ConstellationScene};
pub use crate::scenes::end_card::{EndCardParams, EndCardScene};
pub use crate::scenes::fade_trail::{FadeTrailParams, FadeTrailScene, lissajous};
pub use crate::scenes::float_field::{FloatFieldParams, FloatFieldScene};
pub use crate::scenes::network::{NetworkParams, NetworkScene};
pub use crate::scenes::rainbow_orb::{RainbowOrbParams, RainbowOrbScene, RingState, global_pulse};
pub use crate::scenes::shape_dance::{Dancer, ShapeDanceParams, ShapeDanceScene};
pub use crate::scenes::starfield::{LayerSpec, StarfieldParams, StarfieldScene};
pub use crate::scenes::title_card::{TitleCardParams, TitleCardScene};
pub use crate::scenes::waveform::{WaveformParams, WaveformScene};

pub use crate::config::model::{ReelConfig, SceneKind, SceneSpec};
pub use crate::config::presets::{PRESET_NAMES, demo_reel, preset, preset_names};
pub use crate::eval::evaluator::{Evaluator, FrameState, Threading};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::reel::{Reel, ReelBuilder};
