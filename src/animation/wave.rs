use smallvec::SmallVec;

/// Which trigonometric function drives a [`Wave`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trig {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
}

/// `offset + amp * trig(freq * frame + index_phase * index + phase)`.
///
/// Frequencies are in radians per frame, phases in radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    /// Driving function.
    pub trig: Trig,
    /// Amplitude.
    pub amp: f64,
    /// Angular speed per frame.
    pub freq: f64,
    /// Phase advance per element index.
    pub index_phase: f64,
    /// Constant phase.
    pub phase: f64,
    /// Constant offset.
    pub offset: f64,
}

impl Wave {
    /// `amp * sin(freq * frame)`.
    pub fn sin(amp: f64, freq: f64) -> Self {
        Self {
            trig: Trig::Sin,
            amp,
            freq,
            index_phase: 0.0,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// `amp * cos(freq * frame)`.
    pub fn cos(amp: f64, freq: f64) -> Self {
        Self {
            trig: Trig::Cos,
            ..Self::sin(amp, freq)
        }
    }

    /// Set the per-index phase step.
    pub fn index_phase(mut self, step: f64) -> Self {
        self.index_phase = step;
        self
    }

    /// Set the constant phase.
    pub fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Set the constant offset.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sample at `frame` for element `index`.
    pub fn at(&self, frame: f64, index: f64) -> f64 {
        let arg = self.freq * frame + self.index_phase * index + self.phase;
        let v = match self.trig {
            Trig::Sin => arg.sin(),
            Trig::Cos => arg.cos(),
        };
        self.offset + self.amp * v
    }
}

/// Mean of a handful of [`Wave`] terms.
///
/// With offsets equal to amplitudes each term lies in `[0, 2*amp]`, so a stack of
/// half-amplitude terms stays inside `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaveStack {
    terms: SmallVec<[Wave; 3]>,
}

impl WaveStack {
    /// Empty stack; samples to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term.
    pub fn with(mut self, wave: Wave) -> Self {
        self.terms.push(wave);
        self
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` when no terms were added.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Mean of all terms at `frame` for element `index`.
    pub fn at(&self, frame: f64, index: f64) -> f64 {
        if self.terms.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.terms.iter().map(|w| w.at(frame, index)).sum();
        sum / self.terms.len() as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
