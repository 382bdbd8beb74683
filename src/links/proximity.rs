use crate::foundation::{
    core::Point,
    error::{ReelError, ReelResult},
};

/// How distance between two particles is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// `|dx| + |dy|`.
    Manhattan,
}

impl DistanceMetric {
    /// Distance between `a` and `b` under this metric.
    pub fn distance(self, a: Point, b: Point) -> f64 {
        let d = b - a;
        match self {
            Self::Euclidean => d.hypot(),
            Self::Manhattan => d.x.abs() + d.y.abs(),
        }
    }
}

/// Proximity link parameters for one scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinkConfig {
    /// Pairs at or beyond this distance are not linked.
    pub threshold: f64,
    /// Opacity of a link between coincident particles.
    pub max_alpha: f64,
    /// Distance metric.
    #[serde(default)]
    pub metric: DistanceMetric,
}

impl LinkConfig {
    /// Build a validated config.
    pub fn new(threshold: f64, max_alpha: f64, metric: DistanceMetric) -> ReelResult<Self> {
        let cfg = Self {
            threshold,
            max_alpha,
            metric,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-positive thresholds and alphas outside `[0, 1]`.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ReelError::validation("link threshold must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.max_alpha) {
            return Err(ReelError::validation("link max_alpha must be in [0, 1]"));
        }
        Ok(())
    }
}

/// A line drawn between two nearby particles.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Link {
    /// Index of the first particle (`a < b`).
    pub a: usize,
    /// Index of the second particle.
    pub b: usize,
    /// Position of particle `a`.
    pub from: Point,
    /// Position of particle `b`.
    pub to: Point,
    /// `1 - distance / threshold`, in `(0, 1]`.
    pub strength: f64,
    /// `strength * max_alpha`.
    pub opacity: f64,
}

/// Every unordered pair closer than the threshold, in `(a, b)` lexicographic order.
///
/// Plain O(n^2) scan.
pub fn links(positions: &[Point], cfg: &LinkConfig) -> Vec<Link> {
    let mut out = Vec::new();
    for (a, &pa) in positions.iter().enumerate() {
        for (b, &pb) in positions.iter().enumerate().skip(a + 1) {
            let d = cfg.metric.distance(pa, pb);
            if d < cfg.threshold {
                let strength = 1.0 - d / cfg.threshold;
                out.push(Link {
                    a,
                    b,
                    from: pa,
                    to: pb,
                    strength,
                    opacity: strength * cfg.max_alpha,
                });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/links/proximity.rs"]
mod tests;
