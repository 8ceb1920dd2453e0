use crate::{
    error::{Operation, UnmodifiableError},
    sequence::MutableSequence,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    borrow::Borrow,
    fmt,
    ops::{Deref, Index},
    slice::SliceIndex,
    sync::Arc,
};

/// An ordered sequence that rejects every mutation.
///
/// All read-only slice operations are available through `Deref<Target = [T]>`.
/// Mutations go through [`MutableSequence`] and always fail with
/// [`UnmodifiableError::UnsupportedOperation`], leaving the list untouched.
///
/// Clones share storage. The contents are never written after construction,
/// so sharing is unobservable except through [`FrozenList::ptr_eq`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrozenList<T> {
    items: Arc<[T]>,
}

/// The declared type of a public snapshot field.
pub type ImmutableList<T> = FrozenList<T>;

impl<T> FrozenList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Deep-copy `source` into a new frozen list.
    pub fn copied_from(source: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(source.to_vec())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether both lists share the same storage.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.items, &other.items)
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.items.iter().filter(|item| *item == value).count()
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    fn reject<R>(operation: Operation) -> Result<R, UnmodifiableError> {
        Err(UnmodifiableError::UnsupportedOperation { operation })
    }
}

impl<T> MutableSequence<T> for FrozenList<T> {
    type Error = UnmodifiableError;

    fn set_item(&mut self, _index: usize, _value: T) -> Result<(), UnmodifiableError> {
        Self::reject(Operation::SetItem)
    }

    fn del_item(&mut self, _index: usize) -> Result<(), UnmodifiableError> {
        Self::reject(Operation::DelItem)
    }

    fn concat_in_place<I>(&mut self, _other: I) -> Result<(), UnmodifiableError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::reject(Operation::ConcatInPlace)
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<(), UnmodifiableError> {
        Self::reject(Operation::Insert)
    }

    fn append(&mut self, _value: T) -> Result<(), UnmodifiableError> {
        Self::reject(Operation::Append)
    }

    fn extend<I>(&mut self, _other: I) -> Result<(), UnmodifiableError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::reject(Operation::Extend)
    }

    fn pop(&mut self, _index: Option<usize>) -> Result<T, UnmodifiableError> {
        Self::reject(Operation::Pop)
    }

    fn remove(&mut self, _value: &T) -> Result<(), UnmodifiableError>
    where
        T: PartialEq,
    {
        Self::reject(Operation::Remove)
    }

    fn sort(&mut self) -> Result<(), UnmodifiableError>
    where
        T: Ord,
    {
        Self::reject(Operation::Sort)
    }
}

impl<T> Clone for FrozenList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for FrozenList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for FrozenList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for FrozenList<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for FrozenList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Borrow<[T]> for FrozenList<T> {
    fn borrow(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for FrozenList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> From<&[T]> for FrozenList<T> {
    fn from(items: &[T]) -> Self {
        Self::copied_from(items)
    }
}

impl<T> FromIterator<T> for FrozenList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a FrozenList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for FrozenList<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for FrozenList<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.items[..] == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for FrozenList<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.items[..] == **other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for FrozenList<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<FrozenList<U>> for Vec<T> {
    fn eq(&self, other: &FrozenList<U>) -> bool {
        self[..] == other.items[..]
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FrozenList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: Serialize> Serialize for FrozenList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items[..].serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FrozenList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
