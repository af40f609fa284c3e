//! Fixed-size seasonal ring buffer
//!
//! Holds one seasonal adjustment per phase of the cycle. Logical index 0 is
//! always the oldest entry, one full period behind the next slot to be
//! written. Rotation moves the head instead of shifting the storage.

use crate::{Result, SmoothingError};

/// Circular buffer of `period` seasonal values addressed by logical index
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalRing {
    values: Vec<f64>,
    head: usize,
}

impl SeasonalRing {
    /// Create a ring of `period` zeros
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(SmoothingError::InvalidPeriod(period));
        }

        Ok(Self {
            values: vec![0.0; period],
            head: 0,
        })
    }

    /// Season length
    pub fn period(&self) -> usize {
        self.values.len()
    }

    /// Value at logical position `index`, wrapped into the period
    pub fn get(&self, index: usize) -> f64 {
        self.values[self.slot(index)]
    }

    /// Overwrites logical position `index`, wrapped into the period
    pub(crate) fn set(&mut self, index: usize, value: f64) {
        let slot = self.slot(index);
        self.values[slot] = value;
    }

    /// Drops the oldest entry and appends `value` as the newest.
    /// Returns the dropped entry.
    pub(crate) fn rotate(&mut self, value: f64) -> f64 {
        let oldest = self.values[self.head];
        self.values[self.head] = value;
        self.head = (self.head + 1) % self.values.len();
        oldest
    }

    /// Copy of the buffer in logical order
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Iterates the buffer in logical order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (tail, front) = self.values.split_at(self.head);
        front.iter().chain(tail.iter()).copied()
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.values.len()
    }
}
