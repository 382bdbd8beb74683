use std::collections::BTreeSet;

use crate::{
    foundation::error::{ReelError, ReelResult},
    random::seeded::random,
};

/// Categorical distribution over `T`, picked in proportion to per-entry weights.
///
/// The table is validated on construction: it must be non-empty, weights must be finite
/// and non-negative, and the total must be positive. Picking can therefore never divide
/// by zero.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<(T, f64)>", into = "Vec<(T, f64)>")]
pub struct WeightedTable<T: Clone> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T: Clone> WeightedTable<T> {
    /// Build a table from `(value, weight)` pairs, in pick order.
    pub fn new(entries: Vec<(T, f64)>) -> ReelResult<Self> {
        if entries.is_empty() {
            return Err(ReelError::validation("weighted table must not be empty"));
        }
        if entries.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ReelError::validation(
                "weighted table weights must be finite and >= 0",
            ));
        }
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(ReelError::validation(
                "weighted table total weight must be > 0",
            ));
        }
        Ok(Self { entries, total })
    }

    /// Table from built-in weights that are valid by construction.
    pub(crate) fn from_static(entries: Vec<(T, f64)>) -> Self {
        debug_assert!(Self::new(entries.clone()).is_ok());
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Entries in pick order.
    pub fn entries(&self) -> &[(T, f64)] {
        &self.entries
    }

    /// Pick with a uniform sample `u` in `[0, 1)`.
    ///
    /// `r = u * total`; each weight is subtracted in order and the first entry that
    /// brings `r` to `<= 0` wins. Rounding leftovers fall back to the first entry.
    pub fn pick_with(&self, u: f64) -> &T {
        let mut r = u * self.total;
        for (value, weight) in &self.entries {
            r -= weight;
            if r <= 0.0 {
                return value;
            }
        }
        &self.entries[0].0
    }

    /// Pick using `random(key)`.
    pub fn pick(&self, key: &str) -> &T {
        self.pick_with(random(key))
    }
}

impl<T: Clone> TryFrom<Vec<(T, f64)>> for WeightedTable<T> {
    type Error = ReelError;

    fn try_from(entries: Vec<(T, f64)>) -> ReelResult<Self> {
        Self::new(entries)
    }
}

impl<T: Clone> From<WeightedTable<T>> for Vec<(T, f64)> {
    fn from(table: WeightedTable<T>) -> Self {
        table.entries
    }
}

/// Skew a uniform draw toward zero: `random(key)^exponent`.
///
/// Exponents above 1 concentrate mass near 0; `(r*r)^1.5` is `exponent = 3`.
pub fn biased(key: &str, exponent: f64) -> f64 {
    random(key).powf(exponent)
}

/// Choose `count` distinct indices out of `0..n` without replacement.
///
/// Every index gets the sort key `random("{prefix}-{i}")`; indices are ordered by that
/// key and the first `count` are taken. `count >= n` returns every index.
pub fn sample_indices(n: usize, count: usize, prefix: &str) -> BTreeSet<usize> {
    let mut keyed: Vec<(f64, usize)> = (0..n)
        .map(|i| (random(&format!("{prefix}-{i}")), i))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    keyed.into_iter().take(count).map(|(_, i)| i).collect()
}

/// `round(n * fraction)`, the subset size used for "15% of the particles".
pub fn fraction_of(n: usize, fraction: f64) -> usize {
    ((n as f64) * fraction.clamp(0.0, 1.0)).round() as usize
}

#[cfg(test)]
#[path = "../../tests/unit/random/pick.rs"]
mod tests;
