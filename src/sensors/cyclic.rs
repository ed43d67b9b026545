//! Cyclic sample source.
//!
//! Returns the values of a fixed sequence in order, wrapping around
//! forever.  The position only advances when a value is read, so two
//! sources never influence each other.

use heapless::Vec;

use crate::config::SAMPLE_CAPACITY;
use crate::error::SequenceError;

#[derive(Debug, Clone)]
pub struct CyclicSource {
    values: Vec<f32, SAMPLE_CAPACITY>,
    next: usize,
}

impl CyclicSource {
    pub fn new(values: &[f32]) -> Result<Self, SequenceError> {
        if values.is_empty() {
            return Err(SequenceError::Empty);
        }
        let values = Vec::from_slice(values).map_err(|()| SequenceError::TooLong {
            capacity: SAMPLE_CAPACITY,
        })?;
        Ok(Self { values, next: 0 })
    }

    /// Return the current value and advance, wrapping at the end.
    pub fn read(&mut self) -> f32 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }

    /// Index of the value the next [`read`](Self::read) returns.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Restart from the first value.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Infinite: `next()` never returns `None`.
impl Iterator for CyclicSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut src = CyclicSource::new(&[1.0, 2.0, 3.0]).unwrap();
        let got: std::vec::Vec<f32> = src.by_ref().take(7).collect();
        assert_eq!(got, [1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
        assert_eq!(src.position(), 1);
    }

    #[test]
    fn reset_restarts() {
        let mut src = CyclicSource::new(&[5.0, 6.0]).unwrap();
        src.read();
        src.reset();
        assert!((src.read() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(CyclicSource::new(&[]).err(), Some(SequenceError::Empty));
    }

    #[test]
    fn over_capacity_rejected() {
        let values = [0.0f32; SAMPLE_CAPACITY + 1];
        assert!(matches!(
            CyclicSource::new(&values),
            Err(SequenceError::TooLong { .. })
        ));
    }
}
