use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CyclicStateError {
    #[error("cyclic state needs at least one value")]
    Empty,
}

/// A fixed, non-empty list of values and a wrapping cursor into it.
#[derive(Clone, Debug)]
pub struct CyclicState<T> {
    values: Vec<T>,
    index: usize,
}

impl<T> CyclicState<T> {
    /// Starts at index 0.
    pub fn new(values: Vec<T>) -> Result<Self, CyclicStateError> {
        if values.is_empty() {
            return Err(CyclicStateError::Empty);
        }
        Ok(Self { values, index: 0 })
    }

    /// Steps to the next value, wrapping after the last, and returns it.
    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.values.len();
        &self.values[self.index]
    }

    pub fn current(&self) -> &T {
        &self.values[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
