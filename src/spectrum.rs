//! Frequency-domain analysis of sampled signals.
//!
//! The analyzer takes the full complex DFT of a real signal, labels each bin
//! with its frequency and reports the bin with the largest magnitude. No
//! window is applied and the DC bin is not removed, so a signal with a large
//! mean offset reports 0 Hz as its dominant component.

use crate::level::amplitude_to_db;
use crate::sampling::bin_frequencies;
use crate::{Error, Result};
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// The dominant component of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Magnitude of the dominant bin, in decibels
    pub amplitude_db: f64,
    /// Frequency of the dominant bin in Hz, always non-negative
    pub frequency: f64,
}

/// DFT-based analyzer for signals sampled at a known rate.
///
/// # Examples
///
/// ```
/// use superposition::SpectrumAnalyzer;
/// use std::f64::consts::TAU;
///
/// // 5 Hz tone, 100 samples at 100 Hz
/// let signal: Vec<f64> = (0..100)
///     .map(|i| (TAU * 5.0 * i as f64 / 100.0).sin())
///     .collect();
/// let peak = SpectrumAnalyzer::new(100.0)
///     .unwrap()
///     .dominant_component(&signal)
///     .unwrap();
/// assert!((peak.frequency - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumAnalyzer {
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    /// Creates an analyzer for signals sampled at `sample_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] unless `sample_rate` is positive
    /// and finite.
    pub fn new(sample_rate: f64) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Ok(Self { sample_rate })
    }

    /// Sample rate the frequency axis is labelled with, in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Complex DFT of a real signal.
    pub fn transform(&self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        if buffer.is_empty() {
            return buffer;
        }
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        buffer
    }

    /// Magnitude of every DFT bin, in the standard bin order.
    pub fn magnitudes(&self, signal: &[f64]) -> Vec<f64> {
        self.transform(signal).iter().map(|c| c.norm()).collect()
    }

    /// Frequency of every DFT bin for a signal of length `n`.
    pub fn frequencies(&self, n: usize) -> Vec<f64> {
        bin_frequencies(n, self.sample_rate)
    }

    /// Finds the bin with the largest magnitude.
    ///
    /// Ties go to the lowest bin index. The reported frequency is the
    /// absolute value of the bin frequency, so a mirror bin above Nyquist is
    /// folded onto its positive counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySignal`] if `signal` is empty.
    pub fn dominant_component(&self, signal: &[f64]) -> Result<SpectralPeak> {
        if signal.is_empty() {
            return Err(Error::EmptySignal);
        }

        let magnitudes = self.magnitudes(signal);
        let frequencies = self.frequencies(signal.len());

        let mut best = 0;
        for (k, &magnitude) in magnitudes.iter().enumerate().skip(1) {
            if magnitude > magnitudes[best] {
                best = k;
            }
        }

        let frequency = frequencies[best].abs();
        log::debug!(
            "dominant bin {} of {}: magnitude {}, frequency {} Hz",
            best,
            signal.len(),
            magnitudes[best],
            frequency
        );
        if best == 0 && signal.len() > 1 {
            log::warn!("DC bin dominates the spectrum; signal has a large mean offset");
        }

        Ok(SpectralPeak {
            amplitude_db: amplitude_to_db(magnitudes[best])?,
            frequency,
        })
    }
}
