use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// What happens when the input leaves the first/last stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the edge segment's slope.
    #[default]
    Extend,
    /// Hold the edge output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

type Stops = SmallVec<[f64; 5]>;

/// Piecewise mapping of an input value onto an output range.
///
/// Stops are validated when the mapping is built, so [`Interpolation::sample`] is total.
/// Easing applies per segment to the normalized in-segment progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: Stops,
    output: Stops,
    ease: Ease,
    left: Extrapolate,
    right: Extrapolate,
}

impl Interpolation {
    /// Map `input` stops onto `output` stops.
    ///
    /// Both must have the same length (at least 2); input stops must be finite and
    /// strictly increasing.
    pub fn new(input: &[f64], output: &[f64]) -> ReelResult<Self> {
        if input.len() < 2 {
            return Err(ReelError::animation(
                "interpolation needs at least two input stops",
            ));
        }
        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "interpolation input has {} stops but output has {}",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(ReelError::animation("interpolation stops must be finite"));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReelError::animation(
                "interpolation input stops must be strictly increasing",
            ));
        }
        Ok(Self {
            input: input.iter().copied().collect(),
            output: output.iter().copied().collect(),
            ease: Ease::Linear,
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        })
    }

    /// Set the per-segment easing.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set both extrapolation modes.
    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.left = mode;
        self.right = mode;
        self
    }

    /// Set the extrapolation below the first stop.
    pub fn extrapolate_left(mut self, mode: Extrapolate) -> Self {
        self.left = mode;
        self
    }

    /// Set the extrapolation above the last stop.
    pub fn extrapolate_right(mut self, mode: Extrapolate) -> Self {
        self.right = mode;
        self
    }

    /// Map `x` through the stops.
    pub fn sample(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        let seg = (1..last)
            .find(|&i| self.input[i] >= x)
            .unwrap_or(last)
            - 1;

        let (in0, in1) = (self.input[seg], self.input[seg + 1]);
        let (out0, out1) = (self.output[seg], self.output[seg + 1]);

        let mut x = x;
        if x < in0 {
            match self.left {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in0,
                Extrapolate::Extend => {}
            }
        }
        if x > in1 {
            match self.right {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in1,
                Extrapolate::Extend => {}
            }
        }

        if out0 == out1 {
            return out0;
        }

        let t = (x - in0) / (in1 - in0);
        // Easing is defined on [0, 1]; extension outside it continues linearly.
        let te = if (0.0..=1.0).contains(&t) {
            self.ease.apply(t)
        } else {
            t
        };
        out0 + te * (out1 - out0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
