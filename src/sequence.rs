//! The mutating half of an ordered sequence.
//!
//! `Vec<T>` implements it with ordinary semantics. [`FrozenList`] implements
//! it by rejecting every call, which is the only place the two differ.
//!
//! [`FrozenList`]: crate::frozen::FrozenList

use crate::error::SequenceError;

pub trait MutableSequence<T> {
    type Error;

    /// Replace the element at `index`.
    fn set_item(&mut self, index: usize, value: T) -> Result<(), Self::Error>;

    /// Delete the element at `index`.
    fn del_item(&mut self, index: usize) -> Result<(), Self::Error>;

    /// In-place concatenation (`seq += other`).
    fn concat_in_place<I>(&mut self, other: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = T>;

    /// Insert before `index`. An index past the end appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), Self::Error>;

    fn append(&mut self, value: T) -> Result<(), Self::Error>;

    fn extend<I>(&mut self, other: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = T>;

    /// Remove and return the element at `index`, or the last one when `None`.
    fn pop(&mut self, index: Option<usize>) -> Result<T, Self::Error>;

    /// Remove the first element equal to `value`.
    fn remove(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: PartialEq;

    fn sort(&mut self) -> Result<(), Self::Error>
    where
        T: Ord;
}

impl<T> MutableSequence<T> for Vec<T> {
    type Error = SequenceError;

    fn set_item(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SequenceError::IndexOutOfRange { index, len }),
        }
    }

    fn del_item(&mut self, index: usize) -> Result<(), SequenceError> {
        if index >= self.len() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Vec::remove(self, index);
        Ok(())
    }

    fn concat_in_place<I>(&mut self, other: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, other);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let index = index.min(self.len());
        Vec::insert(self, index, value);
        Ok(())
    }

    fn append(&mut self, value: T) -> Result<(), SequenceError> {
        Vec::push(self, value);
        Ok(())
    }

    fn extend<I>(&mut self, other: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, other);
        Ok(())
    }

    fn pop(&mut self, index: Option<usize>) -> Result<T, SequenceError> {
        match index {
            None => Vec::pop(self).ok_or(SequenceError::PopFromEmpty),
            Some(_) if self.is_empty() => Err(SequenceError::PopFromEmpty),
            Some(index) if index >= self.len() => Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            }),
            Some(index) => Ok(Vec::remove(self, index)),
        }
    }

    fn remove(&mut self, value: &T) -> Result<(), SequenceError>
    where
        T: PartialEq,
    {
        let position = self
            .iter()
            .position(|item| item == value)
            .ok_or(SequenceError::ValueNotFound)?;
        Vec::remove(self, position);
        Ok(())
    }

    fn sort(&mut self) -> Result<(), SequenceError>
    where
        T: Ord,
    {
        <[T]>::sort(self);
        Ok(())
    }
}
