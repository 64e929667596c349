//! Superposition of two simple harmonic oscillations.
//!
//! [`WaveSuperposer`] holds the parameters of two oscillators, synthesizes
//! their sum on a [`SamplingConfig`] grid and finds the dominant frequency
//! component of a sampled signal. Synthesis and analysis share the same
//! grid, so the frequency axis used by the analysis always matches the
//! spacing of the synthesized samples.
//!
//! # Example
//!
//! ```
//! use superposition::WaveSuperposer;
//!
//! let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0);
//! let x = superposer.synthesize();
//! assert_eq!(x.len(), 1000);
//!
//! let peak = superposer.dominant_component(&x).unwrap();
//! // 200 rad/s is about 31.83 Hz
//! assert!((peak.frequency - 31.83).abs() < 0.1);
//! assert!(peak.amplitude_db > 80.0);
//! ```
//!
//! # Sample rate
//!
//! The time axis includes both of its endpoints, so the default grid of 1000
//! points over 10 s has an effective rate of `(1000 - 1) / 10 = 99.9` Hz, and
//! that is the rate the frequency bins are labelled with. Tools that label
//! the same 1000 samples at a fixed 1000 Hz put a 200 rad/s tone near
//! 319 Hz instead. To compare against such output, analyze with
//! `SpectrumAnalyzer::new(1000.0)`:
//!
//! ```
//! use superposition::{SpectrumAnalyzer, WaveSuperposer};
//!
//! let x = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0).synthesize();
//! let peak = SpectrumAnalyzer::new(1000.0)?.dominant_component(&x)?;
//! assert!((peak.frequency - 319.0).abs() < 1e-9);
//! # Ok::<(), superposition::Error>(())
//! ```

use crate::level::db_to_amplitude;
use crate::{
    HarmonicOscillator, Result, SamplingConfig, Signal, SignalExt, SpectralPeak,
    SpectrumAnalyzer,
};

/// Physical parameters of one simple harmonic oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    /// Signal level in decibels
    pub power_db: f64,
    /// Angular frequency in rad/s
    pub angular_frequency: f64,
    /// Phase offset in radians
    pub phase: f64,
}

impl OscillatorParams {
    /// Creates oscillator parameters with zero phase.
    pub fn new(power_db: f64, angular_frequency: f64) -> Self {
        Self {
            power_db,
            angular_frequency,
            phase: 0.0,
        }
    }

    /// Sets the phase offset in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Linear peak amplitude corresponding to `power_db`.
    pub fn amplitude(&self) -> f64 {
        db_to_amplitude(self.power_db)
    }

    /// Builds the oscillator these parameters describe on `sampling`.
    pub fn oscillator(&self, sampling: SamplingConfig) -> HarmonicOscillator {
        HarmonicOscillator::new(self.amplitude(), self.angular_frequency, self.phase, sampling)
    }
}

/// Samples of a waveform paired with the times they were taken at.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledWaveform {
    /// Sample times in seconds
    pub times: Vec<f64>,
    /// Sample values
    pub samples: Vec<f64>,
}

impl SampledWaveform {
    /// Iterates over `(time, amplitude)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.samples.iter().copied())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Superposes two simple harmonic oscillations and analyses the result.
///
/// Every method takes `&self`; the parameters never change after
/// construction, so a superposer can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSuperposer {
    first: OscillatorParams,
    second: OscillatorParams,
    sampling: SamplingConfig,
}

impl WaveSuperposer {
    /// Creates a superposer with zero phases and the default sampling grid
    /// (1000 points over 10 seconds).
    ///
    /// No parameter is validated; zero and negative frequencies are
    /// accepted.
    ///
    /// # Arguments
    ///
    /// * `power_db_1` - Level of the first oscillator in dB
    /// * `power_db_2` - Level of the second oscillator in dB
    /// * `angular_freq_1` - Angular frequency of the first oscillator in rad/s
    /// * `angular_freq_2` - Angular frequency of the second oscillator in rad/s
    pub fn new(power_db_1: f64, power_db_2: f64, angular_freq_1: f64, angular_freq_2: f64) -> Self {
        Self::from_params(
            OscillatorParams::new(power_db_1, angular_freq_1),
            OscillatorParams::new(power_db_2, angular_freq_2),
        )
    }

    /// Creates a superposer from two parameter sets and the default grid.
    pub fn from_params(first: OscillatorParams, second: OscillatorParams) -> Self {
        Self {
            first,
            second,
            sampling: SamplingConfig::default(),
        }
    }

    /// Sets the phase offsets of both oscillators, in radians.
    pub fn with_phases(mut self, phase_1: f64, phase_2: f64) -> Self {
        self.first.phase = phase_1;
        self.second.phase = phase_2;
        self
    }

    /// Replaces the sampling grid used by synthesis and analysis.
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Parameters of the first oscillator.
    pub fn first(&self) -> OscillatorParams {
        self.first
    }

    /// Parameters of the second oscillator.
    pub fn second(&self) -> OscillatorParams {
        self.second
    }

    /// Sampling grid shared by synthesis and analysis.
    pub fn sampling(&self) -> SamplingConfig {
        self.sampling
    }

    /// Time axis the waveform is sampled on, in seconds.
    pub fn time_axis(&self) -> Vec<f64> {
        self.sampling.time_axis()
    }

    /// Synthesizes `A1·sin(ω1·t+φ1) + A2·sin(ω2·t+φ2)` over the time axis.
    ///
    /// Recomputed on each call; identical parameters always give identical
    /// samples.
    pub fn synthesize(&self) -> Vec<f64> {
        let mut wave = self
            .first
            .oscillator(self.sampling)
            .add(self.second.oscillator(self.sampling));
        wave.take_samples(self.sampling.sample_count())
    }

    /// Synthesizes the waveform together with its time axis, ready for
    /// plotting.
    pub fn sampled_waveform(&self) -> SampledWaveform {
        SampledWaveform {
            times: self.time_axis(),
            samples: self.synthesize(),
        }
    }

    /// Analyzer labelled with this superposer's effective sample rate.
    pub fn analyzer(&self) -> Result<SpectrumAnalyzer> {
        SpectrumAnalyzer::new(self.sampling.sample_rate())
    }

    /// Finds the dominant frequency component of `signal`.
    ///
    /// The signal is assumed to be sampled on this superposer's grid; its
    /// length is checked against the grid so the frequency axis is valid.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptySignal`](crate::Error::EmptySignal) if `signal` is empty
    /// * [`Error::LengthMismatch`](crate::Error::LengthMismatch) if its length
    ///   differs from the grid's sample count
    pub fn dominant_component(&self, signal: &[f64]) -> Result<SpectralPeak> {
        self.sampling.check_len(signal.len())?;
        self.analyzer()?.dominant_component(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::TAU;

    #[test]
    fn test_defaults() {
        let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0);
        assert_eq!(superposer.first().phase, 0.0);
        assert_eq!(superposer.second().phase, 0.0);
        assert_eq!(superposer.sampling(), SamplingConfig::default());
    }

    #[test]
    fn test_synthesize_matches_closed_form() {
        let superposer = WaveSuperposer::new(6.0, -3.0, 40.0, 75.0).with_phases(0.2, 1.1);
        let a1 = db_to_amplitude(6.0);
        let a2 = db_to_amplitude(-3.0);
        let x = superposer.synthesize();
        for (t, sample) in superposer.time_axis().iter().zip(&x) {
            let expected = a1 * (40.0 * t + 0.2).sin() + a2 * (75.0 * t + 1.1).sin();
            assert_eq!(*sample, expected);
        }
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0).with_phases(0.4, 2.0);
        assert_eq!(superposer.synthesize(), superposer.synthesize());
    }

    #[test]
    fn test_sampled_waveform_pairs() {
        let waveform = WaveSuperposer::new(0.0, 0.0, 1.0, 2.0).sampled_waveform();
        assert_eq!(waveform.len(), 1000);
        let (t0, _) = waveform.iter().next().unwrap();
        let (t_last, _) = waveform.iter().last().unwrap();
        assert_eq!(t0, 0.0);
        assert_eq!(t_last, 10.0);
    }

    #[test]
    fn test_swap_symmetry() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut random_params = || {
                OscillatorParams::new(rng.gen_range(-40.0..100.0), rng.gen_range(-300.0..300.0))
                    .with_phase(rng.gen_range(-TAU..TAU))
            };
            let a = random_params();
            let b = random_params();
            assert_eq!(
                WaveSuperposer::from_params(a, b).synthesize(),
                WaveSuperposer::from_params(b, a).synthesize()
            );
        }
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0);
        assert_eq!(
            superposer.dominant_component(&[1.0; 10]),
            Err(Error::LengthMismatch {
                expected: 1000,
                actual: 10
            })
        );
        assert_eq!(superposer.dominant_component(&[]), Err(Error::EmptySignal));
    }

    #[test]
    fn test_custom_sampling_keeps_frequency_axis() {
        // 2000 points over 5 s: a different grid must still find 200 rad/s
        let sampling = SamplingConfig::new(2000, 5.0).unwrap();
        let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0).with_sampling(sampling);
        let x = superposer.synthesize();
        assert_eq!(x.len(), 2000);
        let peak = superposer.dominant_component(&x).unwrap();
        assert!((peak.frequency - 200.0 / TAU).abs() < 0.2);
    }

    #[test]
    fn test_analyzer_uses_effective_grid_rate() {
        let superposer = WaveSuperposer::new(60.0, 80.0, 100.0, 200.0);
        let analyzer = superposer.analyzer().unwrap();
        assert!((analyzer.sample_rate() - 99.9).abs() < 1e-9);

        // Same samples labelled at a literal 1000 Hz land ten times higher
        let x = superposer.synthesize();
        let effective = superposer.dominant_component(&x).unwrap();
        let literal = SpectrumAnalyzer::new(1000.0)
            .unwrap()
            .dominant_component(&x)
            .unwrap();
        assert_eq!(literal.amplitude_db, effective.amplitude_db);
        assert!((literal.frequency - 319.0).abs() < 1e-9);
    }

    #[test]
    fn test_dc_component_from_zero_frequency() {
        // ω = 0 with φ = π/2 is a constant offset of A
        let superposer = WaveSuperposer::new(20.0, 0.0, 0.0, 150.0).with_phases(TAU / 4.0, 0.0);
        let peak = superposer.dominant_component(&superposer.synthesize()).unwrap();
        assert_eq!(peak.frequency, 0.0);
    }
}
