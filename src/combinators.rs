//! Signal combinators for composing signals.
//!
//! Superposition is the pointwise sum of two signals sampled on the same
//! grid; [`Add`] performs that sum one sample at a time.

use crate::Signal;

/// Adds two signals together (superposition).
///
/// # Examples
///
/// ```
/// use superposition::{HarmonicOscillator, SamplingConfig, Signal, SignalExt};
///
/// let sampling = SamplingConfig::default();
/// let a = HarmonicOscillator::new(1.0, 100.0, 0.0, sampling);
/// let b = HarmonicOscillator::new(10.0, 200.0, 0.0, sampling);
/// let mut sum = a.add(b);
/// assert_eq!(sum.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Extension trait providing combinator methods on every signal.
pub trait SignalExt: Signal + Sized {
    /// Adds this signal to another signal (superposition).
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }
}

impl<T: Signal> SignalExt for T {}
