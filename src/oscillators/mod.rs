//! Oscillator implementations.
//!
//! This module contains the `Oscillator` trait and the simple harmonic
//! oscillator that the superposer sums.

mod harmonic;
mod traits;

pub use harmonic::HarmonicOscillator;
pub use traits::Oscillator;
