pub(crate) mod anticipation_burst;
pub(crate) mod biased_burst;
pub(crate) mod card_slide;
pub(crate) mod constellation;
pub(crate) mod end_card;
pub(crate) mod fade_trail;
pub(crate) mod float_field;
pub(crate) mod network;
pub(crate) mod rainbow_orb;
pub(crate) mod shape_dance;
pub(crate) mod starfield;
pub(crate) mod title_card;
pub(crate) mod waveform;
