//! Superposition - Interference of two simple harmonic oscillations
//!
//! This library sums two sinusoids given by level (dB), angular frequency and
//! phase, and recovers the dominant frequency component of the result with a
//! discrete Fourier transform.

pub mod combinators;
mod error;
pub mod level;
pub mod oscillators;
pub mod sampling;
mod signal;
pub mod spectrum;
pub mod superposer;

// Re-export commonly used types at the crate root
pub use combinators::{Add, SignalExt};
pub use error::{Error, Result};
pub use level::{amplitude_to_db, db_to_amplitude};
pub use oscillators::{HarmonicOscillator, Oscillator};
pub use sampling::SamplingConfig;
pub use signal::Signal;
pub use spectrum::{SpectralPeak, SpectrumAnalyzer};
pub use superposer::{OscillatorParams, SampledWaveform, WaveSuperposer};
