//! Conversions between decibel levels and linear amplitudes.
//!
//! Levels use the amplitude convention `dB = 20·log10(amplitude)`, so every
//! 20 dB is a tenfold change in amplitude.

use crate::{Error, Result};

/// Converts a decibel level to a linear amplitude.
///
/// Defined for every real input and strictly increasing. `-∞` maps to
/// silence (`0.0`).
///
/// # Examples
///
/// ```
/// use superposition::level::db_to_amplitude;
///
/// assert!((db_to_amplitude(60.0) - 1000.0).abs() < 1e-9);
/// assert_eq!(db_to_amplitude(f64::NEG_INFINITY), 0.0);
/// ```
pub fn db_to_amplitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Converts a linear amplitude to a decibel level.
///
/// Zero amplitude is silence and maps to `-∞`. A physical amplitude cannot be
/// negative, so negative input is rejected rather than producing NaN.
///
/// # Errors
///
/// * [`Error::NegativeAmplitude`] if `amplitude < 0`
/// * [`Error::NonFiniteAmplitude`] if `amplitude` is NaN
///
/// # Examples
///
/// ```
/// use superposition::level::amplitude_to_db;
///
/// assert_eq!(amplitude_to_db(0.0).unwrap(), f64::NEG_INFINITY);
/// assert!((amplitude_to_db(10.0).unwrap() - 20.0).abs() < 1e-12);
/// assert!(amplitude_to_db(-1.0).is_err());
/// ```
pub fn amplitude_to_db(amplitude: f64) -> Result<f64> {
    if amplitude.is_nan() {
        return Err(Error::NonFiniteAmplitude(amplitude));
    }
    if amplitude < 0.0 {
        return Err(Error::NegativeAmplitude(amplitude));
    }
    if amplitude == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(20.0 * amplitude.log10())
}
