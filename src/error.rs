//! Error type shared by the level conversions, sampling configuration and
//! spectral analysis.

use std::fmt;

/// Errors produced when an input falls outside the domain of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A linear amplitude below zero was passed to a decibel conversion.
    NegativeAmplitude(f64),
    /// A NaN amplitude was passed to a decibel conversion.
    NonFiniteAmplitude(f64),
    /// Spectral analysis was asked to inspect an empty signal.
    EmptySignal,
    /// The signal length does not match the sampling configuration it is
    /// analysed against.
    LengthMismatch { expected: usize, actual: usize },
    /// A sample rate that is not a positive finite number of Hz.
    InvalidSampleRate(f64),
    /// A sampling configuration that cannot describe a time axis.
    InvalidSampling {
        sample_count: usize,
        duration_seconds: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeAmplitude(a) => {
                write!(f, "amplitude must not be negative, got {}", a)
            }
            Error::NonFiniteAmplitude(a) => write!(f, "amplitude is not a number: {}", a),
            Error::EmptySignal => write!(f, "signal contains no samples"),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "signal has {} samples but the sampling configuration expects {}",
                actual, expected
            ),
            Error::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be positive and finite, got {}", rate)
            }
            Error::InvalidSampling {
                sample_count,
                duration_seconds,
            } => write!(
                f,
                "invalid sampling: {} samples over {} s (need at least 2 samples and a positive duration)",
                sample_count, duration_seconds
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_negative_amplitude() {
        let err = Error::NegativeAmplitude(-2.0);
        assert_eq!(err.to_string(), "amplitude must not be negative, got -2");
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = Error::LengthMismatch {
            expected: 1000,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "signal has 10 samples but the sampling configuration expects 1000"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::EmptySignal);
        assert_eq!(err.to_string(), "signal contains no samples");
    }
}
