//! Core sample-source trait.
//!
//! This module provides the `Signal` trait that represents anything able to
//! produce successive samples on a sampling grid: a single oscillator or a
//! combination of several.

/// Common interface for all sample sources.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Collects the next `len` samples into a new vector.
    fn take_samples(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Signal for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_process_fills_buffer_in_order() {
        let mut counter = Counter(0.0);
        let mut buffer = [0.0; 4];
        counter.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_take_samples_continues_from_state() {
        let mut counter = Counter(0.0);
        counter.next_sample();
        assert_eq!(counter.take_samples(3), vec![2.0, 3.0, 4.0]);
    }
}
