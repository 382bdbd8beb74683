use crate::foundation::{
    core::Fps,
    error::{ReelError, ReelResult},
};

/// Physical constants of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Mass of the moving body; must be > 0.
    pub mass: f64,
    /// Damping coefficient; must be >= 0.
    pub damping: f64,
    /// Spring stiffness; must be > 0.
    pub stiffness: f64,
    /// Never travel past the target value.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default constants with a different damping.
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Default mass with the given damping and stiffness.
    pub fn with(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// Check the constants describe a physical spring.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A spring released at rest at `from`, pulled toward `to`.
///
/// The response is the closed-form solution of the damped oscillator
/// `m x'' + c x' + k x = 0` with zero initial velocity, so any frame can be sampled
/// directly. Under-damped springs (ratio < 1) ring around the target; ratios >= 1 use the
/// critically damped response.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Physical constants.
    pub config: SpringConfig,
    /// Value at elapsed frame 0 and before.
    pub from: f64,
    /// Rest value.
    pub to: f64,
}

impl Spring {
    /// A `0 -> 1` spring.
    pub fn new(config: SpringConfig) -> ReelResult<Self> {
        Self::between(config, 0.0, 1.0)
    }

    /// A `from -> to` spring.
    pub fn between(config: SpringConfig, from: f64, to: f64) -> ReelResult<Self> {
        config.validate()?;
        if !(from.is_finite() && to.is_finite()) {
            return Err(ReelError::animation("spring endpoints must be finite"));
        }
        Ok(Self { config, from, to })
    }

    /// Value after `elapsed` frames (fractional and negative frames allowed).
    pub fn sample(&self, elapsed: f64, fps: Fps) -> f64 {
        if elapsed <= 0.0 {
            return self.from;
        }
        let t = fps.frames_to_secs(elapsed);
        let SpringConfig {
            mass: m,
            damping: c,
            stiffness: k,
            overshoot_clamping,
        } = self.config;

        let x0 = self.to - self.from;
        let omega0 = (k / m).sqrt();
        let zeta = c / (2.0 * (k * m).sqrt());

        let pos = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let frag = envelope
                * ((omega1 * t).sin() * (zeta * omega0 * x0 / omega1) + x0 * (omega1 * t).cos());
            self.to - frag
        } else {
            let envelope = (-omega0 * t).exp();
            self.to - envelope * (x0 + omega0 * x0 * t)
        };

        if overshoot_clamping {
            let past = if self.from <= self.to {
                pos > self.to
            } else {
                pos < self.to
            };
            if past {
                return self.to;
            }
        }
        pos
    }

    /// Sample the spring after a start delay, i.e. at `frame - delay`.
    pub fn sample_delayed(&self, frame: f64, delay: f64, fps: Fps) -> f64 {
        self.sample(frame - delay, fps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
