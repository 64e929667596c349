//! Core trait definitions for oscillators.

use std::f64::consts::TAU;

/// Common interface for all oscillators.
///
/// This trait defines oscillator-specific functionality:
/// frequency access and state management.
pub trait Oscillator {
    /// Gets the angular frequency of the oscillator.
    ///
    /// # Returns
    ///
    /// Angular frequency in radians per second
    fn angular_frequency(&self) -> f64;

    /// Gets the cyclic frequency of the oscillator.
    ///
    /// # Returns
    ///
    /// Frequency in Hz, `ω / 2π`
    fn frequency(&self) -> f64 {
        self.angular_frequency() / TAU
    }

    /// Rewinds the oscillator to the start of its sampling grid.
    fn reset(&mut self);
}
