//! Simple harmonic oscillator, `A·sin(ωt + φ)`.

use super::Oscillator;
use crate::{SamplingConfig, Signal};

/// A simple harmonic oscillator sampled on a fixed time grid.
///
/// Each call to `next_sample()` evaluates `A·sin(ω·t + φ)` at the next point
/// of the [`SamplingConfig`] time axis. The time is computed from the sample
/// index rather than accumulated, so long runs do not drift.
///
/// # Examples
///
/// ```
/// use superposition::{HarmonicOscillator, SamplingConfig, Signal};
///
/// let mut osc = HarmonicOscillator::new(2.0, 100.0, 0.0, SamplingConfig::default());
/// // First sample sits at t = 0, where sin(0) = 0
/// assert_eq!(osc.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    /// Peak amplitude (linear)
    amplitude: f64,
    /// Angular frequency in rad/s
    angular_frequency: f64,
    /// Phase offset in radians
    phase: f64,
    sampling: SamplingConfig,
    /// Index of the next sample on the grid
    index: usize,
}

impl HarmonicOscillator {
    /// Creates a new oscillator positioned at the start of the grid.
    ///
    /// No parameter is validated: zero or negative frequencies and
    /// amplitudes are accepted.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Linear peak amplitude
    /// * `angular_frequency` - Angular frequency in rad/s
    /// * `phase` - Phase offset in radians
    /// * `sampling` - Time grid the oscillator is evaluated on
    pub fn new(
        amplitude: f64,
        angular_frequency: f64,
        phase: f64,
        sampling: SamplingConfig,
    ) -> Self {
        Self {
            amplitude,
            angular_frequency,
            phase,
            sampling,
            index: 0,
        }
    }

    /// Evaluates the oscillator at an arbitrary time in seconds.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (self.angular_frequency * t + self.phase).sin()
    }

    /// Linear peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Phase offset in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Signal for HarmonicOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.value_at(self.sampling.time_at(self.index));
        self.index += 1;
        sample
    }
}

impl Oscillator for HarmonicOscillator {
    fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
