//! Sampling grid shared by synthesis and spectral analysis.
//!
//! Synthesis evaluates the oscillators on an evenly spaced time axis and
//! analysis needs the matching sample rate to label its frequency bins.
//! Both read the same [`SamplingConfig`], so the two can never disagree.

use crate::{Error, Result};

/// Number of samples in the default window.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Length of the default window in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 10.0;

/// An evenly spaced time axis from `0` to `duration_seconds`, both ends
/// included, holding `sample_count` points.
///
/// # Examples
///
/// ```
/// use superposition::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// let t = config.time_axis();
/// assert_eq!(t.len(), 1000);
/// assert_eq!(t[0], 0.0);
/// assert_eq!(t[999], 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    sample_count: usize,
    duration_seconds: f64,
}

impl SamplingConfig {
    /// Creates a sampling configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampling`] if fewer than two samples are
    /// requested or the duration is not a positive finite number.
    pub fn new(sample_count: usize, duration_seconds: f64) -> Result<Self> {
        if sample_count < 2 || !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(Error::InvalidSampling {
                sample_count,
                duration_seconds,
            });
        }
        Ok(Self {
            sample_count,
            duration_seconds,
        })
    }

    /// Number of points on the time axis.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Length of the window in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Time between two adjacent samples in seconds.
    pub fn sample_interval(&self) -> f64 {
        self.duration_seconds / (self.sample_count - 1) as f64
    }

    /// Effective sample rate in Hz.
    ///
    /// Both endpoints are on the grid, so `sample_count` points span
    /// `sample_count - 1` intervals. For the default grid that is 99.9 Hz.
    pub fn sample_rate(&self) -> f64 {
        (self.sample_count - 1) as f64 / self.duration_seconds
    }

    /// Time of the sample at `index`, in seconds.
    pub fn time_at(&self, index: usize) -> f64 {
        // Pin the final point so the axis ends exactly on the duration.
        if index == self.sample_count - 1 {
            self.duration_seconds
        } else {
            index as f64 * self.sample_interval()
        }
    }

    /// The full time axis.
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.sample_count).map(|i| self.time_at(i)).collect()
    }

    /// Checks that a signal was sampled on this grid.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptySignal`] if `len` is zero
    /// * [`Error::LengthMismatch`] if `len` differs from the sample count
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::EmptySignal);
        }
        if len != self.sample_count {
            return Err(Error::LengthMismatch {
                expected: self.sample_count,
                actual: len,
            });
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

/// Frequency in Hz of each bin of an `n`-point DFT taken at `sample_rate`.
///
/// Bins follow the standard layout: zero first, then the positive
/// frequencies, then the negative frequencies for bins above Nyquist.
///
/// # Examples
///
/// ```
/// use superposition::sampling::bin_frequencies;
///
/// assert_eq!(bin_frequencies(4, 4.0), vec![0.0, 1.0, -2.0, -1.0]);
/// assert_eq!(bin_frequencies(5, 5.0), vec![0.0, 1.0, 2.0, -2.0, -1.0]);
/// ```
pub fn bin_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let resolution = sample_rate / n as f64;
    let positive = (n - 1) / 2 + 1;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * resolution
            } else {
                -((n - k) as f64) * resolution
            }
        })
        .collect()
}
