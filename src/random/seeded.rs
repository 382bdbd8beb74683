use crate::foundation::math::{Fnv1a64, mix64, unit_f64};

/// Deterministic pseudo-random value in `[0, 1)` for a string key.
///
/// The value is a pure function of the key bytes: FNV-1a over the key, finalized with
/// SplitMix64, top 53 bits mapped to the unit interval. There is no generator state, so
/// calls can happen in any order and repeated calls return the identical value across
/// runs, processes and platforms.
pub fn random(key: &str) -> f64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(key.as_bytes());
    unit_f64(mix64(h.finish()))
}

/// Builder for the `attr-layer-index` keys particle generators draw with.
///
/// `SeedKey::new("size").part("far").index(3)` renders as `"size-far-3"`, the same key a
/// hand-written `format!` would produce.
#[derive(Clone, Debug)]
pub struct SeedKey {
    buf: String,
}

impl SeedKey {
    /// Start a key with an attribute name.
    pub fn new(attr: &str) -> Self {
        Self {
            buf: attr.to_owned(),
        }
    }

    /// Append a textual segment (layer or sub-collection name).
    pub fn part(mut self, part: &str) -> Self {
        self.buf.push('-');
        self.buf.push_str(part);
        self
    }

    /// Append a numeric segment (particle or trail index).
    pub fn index(mut self, i: usize) -> Self {
        use std::fmt::Write as _;
        let _ = write!(self.buf, "-{i}");
        self
    }

    /// Draw the value for this key.
    pub fn draw(&self) -> f64 {
        random(&self.buf)
    }

    /// Rendered key text.
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Draw `random("{attr}-{i}")`, the most common key shape.
pub fn random_at(attr: &str, i: usize) -> f64 {
    random(&format!("{attr}-{i}"))
}

/// Uniform draw mapped into `[lo, hi)`.
pub fn random_range(key: &str, lo: f64, hi: f64) -> f64 {
    lo + random(key) * (hi - lo)
}

#[cfg(test)]
#[path = "../../tests/unit/random/seeded.rs"]
mod tests;
