use crate::types::alloc_type::Vec;
use core::fmt;
use core::ops::Deref;
use smallvec::{smallvec, SmallVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SmallVec-backed storage for a [`NonEmptyVec`].
///
/// Uses inline storage for a single element, so buckets holding one value
/// (the common case when grouping by a mostly-unique key) never allocate.
pub type BucketVec<T> = SmallVec<[T; 1]>;

/// An ordered collection that always holds at least one element.
///
/// Produced by [`ResultArray::group`](crate::ResultArray::group) and
/// [`ResultArray::batch`](crate::ResultArray::batch): a bucket only exists
/// because some value landed in it, so [`first`](NonEmptyVec::first) never fails.
///
/// # Examples
///
/// ```
/// use result_rail::NonEmptyVec;
///
/// let mut bucket = NonEmptyVec::new(1);
/// bucket.push(2);
///
/// assert_eq!(*bucket.first(), 1);
/// assert_eq!(bucket.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(transparent, bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct NonEmptyVec<T> {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_non_empty"))]
    items: BucketVec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a collection holding exactly `first`.
    #[inline]
    pub fn new(first: T) -> Self {
        Self { items: smallvec![first] }
    }

    /// Appends an item at the end.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the first item.
    #[inline]
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Returns the last item.
    #[inline]
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Returns the number of items, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Applies `f` to every item, keeping order and the non-empty guarantee.
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec { items: self.items.into_iter().map(f).collect() }
    }

    /// Consumes the collection and returns its items as a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// Consumes the collection and returns the underlying [`BucketVec`].
    #[inline]
    pub fn into_inner(self) -> BucketVec<T> {
        self.items
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

/// Returned when building a [`NonEmptyVec`] from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollectionError;

impl fmt::Display for EmptyCollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("collection must contain at least one element")
    }
}

impl core::error::Error for EmptyCollectionError {}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = EmptyCollectionError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            return Err(EmptyCollectionError);
        }
        Ok(Self { items: SmallVec::from_vec(items) })
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    #[inline]
    fn from(items: NonEmptyVec<T>) -> Self {
        items.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
fn deserialize_non_empty<'de, D, T>(deserializer: D) -> Result<BucketVec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = BucketVec::<T>::deserialize(deserializer)?;
    if items.is_empty() {
        return Err(serde::de::Error::custom(EmptyCollectionError));
    }
    Ok(items)
}
