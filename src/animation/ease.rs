/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// The standard `ease` curve, `cubic-bezier(0.42, 0, 1, 1)`, mirrored into an in/out.
    InOutEase,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// Two-phase launch: fast cubic ease-out to 90% over the first 60% of progress,
    /// then a cubic ease-in over the remaining 10% of distance.
    LaunchSettle,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutEase => {
                let ease = |x: f64| cubic_bezier_ease(x, 0.42, 0.0, 1.0, 1.0);
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
            Self::LaunchSettle => launch_settle(t),
        }
    }
}

/// Launch/settle curve: `out_cubic(t/0.6) * 0.9` below 0.6, then
/// `0.9 + in_cubic((t-0.6)/0.4) * 0.1`.
pub fn launch_settle(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.6 {
        Ease::OutCubic.apply(t / 0.6) * 0.9
    } else {
        0.9 + Ease::InCubic.apply((t - 0.6) / 0.4) * 0.1
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // Solve u such that bx(u) = x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, then fixed bisection refinement.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    let mut lo: f64 = 0.0;
    let mut hi: f64 = 1.0;
    for _ in 0..20 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-12 {
            break;
        }
        if x_t < x {
            lo = lo.max(t);
        } else {
            hi = hi.min(t);
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
